use crate::CFR_ITERATIONS;
use crate::N;
use crate::POLICY_MIN;
use crate::RESAMPLE_ATTEMPTS;
use crate::cards::Card;
use crate::cards::Suit;
use crate::cfr::Game;
use crate::cfr::Policy;
use crate::cfr::Profile;
use crate::game::Euchre;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// the trained seat. each decision gets its own training run: the state
/// is pushed into canonical trump, a batch of determinized deals is
/// traversed from all four perspectives against one shared profile, and
/// a card is drawn from the decision infoset's matched strategy.
///
/// stateless by default, meaning the profile is dropped after every
/// decision,
/// trading warm starts for bounded memory. `retain` keeps it across
/// decisions (and deals) instead; with suits canonicalized, infosets
/// learned under one trump transfer to every other.
pub struct CfrPlayer {
    profile: Profile<Euchre>,
    iterations: usize,
    retain: bool,
    rng: SmallRng,
}

impl CfrPlayer {
    pub fn new(iterations: usize) -> Self {
        Self {
            profile: Profile::new(),
            iterations,
            retain: false,
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn seeded(iterations: usize, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new(iterations)
        }
    }
    /// warm-start mode: keep the profile across decisions.
    pub fn retained(mut self) -> Self {
        self.retain = true;
        self
    }

    pub fn act(&mut self, game: &Euchre) -> Card {
        let choices = game.choices();
        if choices.len() == 1 {
            return choices[0];
        }
        let trump = game.trump();
        let root = game.normalized();
        assert!(root.trump() == Suit::Spades, "normalization lands on spades");
        let bucket = root.bucket();
        for _ in 0..self.iterations {
            let sample = self.sample(&root);
            for seat in 0..N {
                self.profile.cfr(seat, sample.clone(), [1.; N]);
            }
        }
        log::debug!(
            "trained {} infosets over {} determinizations",
            self.profile.len(),
            self.iterations,
        );
        let advice = self
            .profile
            .advice(&bucket)
            .expect("decision infoset visited in training");
        let card = self.choose(advice);
        if !self.retain {
            self.profile = Profile::new();
        }
        // back out of the canonical suits, an involution
        card.normalized(trump)
    }

    pub fn end_game(&mut self) {}

    /// redeal the hidden cards, retrying the occasional infeasible draw.
    /// a draw that stays infeasible through the whole budget means the
    /// void constraints are broken, which valid play cannot produce.
    fn sample(&mut self, root: &Euchre) -> Euchre {
        for attempt in 0..RESAMPLE_ATTEMPTS {
            match root.redeal(&mut self.rng) {
                Ok(sample) => return sample,
                Err(error) => log::trace!("redeal attempt {}: {}", attempt, error),
            }
        }
        panic!("no feasible redeal in {} attempts", RESAMPLE_ATTEMPTS)
    }

    fn choose(&mut self, advice: Policy<Card>) -> Card {
        let weights = advice
            .iter()
            .map(|(_, weight)| weight.max(POLICY_MIN))
            .collect::<Vec<_>>();
        let index = WeightedIndex::new(weights)
            .expect("advice is a distribution")
            .sample(&mut self.rng);
        advice[index].0
    }
}

impl Default for CfrPlayer {
    fn default() -> Self {
        Self::new(CFR_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfr::Turn;
    use rand::rngs::SmallRng;

    /// play a seeded deal down to two-card hands, where full traversals
    /// are cheap.
    fn endgame(seed: u64) -> Option<Euchre> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = Euchre::deal(&mut rng);
        for _ in 0..12 {
            match state.turn() {
                Turn::Choice(_) => state.apply(state.choices()[0]),
                Turn::Terminal => return None,
            }
        }
        match state.turn() {
            Turn::Choice(_) => Some(state),
            Turn::Terminal => None,
        }
    }

    #[test]
    fn returns_a_legal_card() {
        let mut player = CfrPlayer::seeded(8, 53);
        for seed in 0u64..16 {
            let Some(state) = endgame(seed) else { continue };
            let card = player.act(&state);
            assert!(state.choices().contains(&card));
            // stateless mode dropped the profile
            assert!(player.profile.is_empty());
        }
    }

    #[test]
    fn retains_the_profile_in_warm_start_mode() {
        let mut player = CfrPlayer::seeded(8, 59).retained();
        let state = (0u64..16).find_map(endgame).expect("a live endgame");
        let _ = player.act(&state);
        assert!(!player.profile.is_empty());
        let before = player.profile.len();
        let _ = player.act(&state);
        assert!(player.profile.len() >= before);
    }

    #[test]
    fn forced_moves_skip_training() {
        let mut player = CfrPlayer::seeded(8, 61).retained();
        // mid-trick followers are often down to a single legal card
        let state = (0u64..64)
            .find_map(|seed| {
                let mut state = endgame(seed)?;
                for _ in 0..3 {
                    match state.turn() {
                        Turn::Choice(_) if state.choices().len() == 1 => return Some(state),
                        Turn::Choice(_) => state.apply(state.choices()[0]),
                        Turn::Terminal => return None,
                    }
                }
                None
            })
            .expect("a forced endgame");
        let card = player.act(&state);
        assert!(card == state.choices()[0]);
        assert!(player.profile.is_empty());
    }
}
