use super::bucket::Bucket;
use super::game::Game;
use super::game::Turn;
use crate::Seat;
use crate::Utility;

/// two-player Kuhn poker: three cards, one each, one betting round.
///
/// test collateral only, never compiled into the shipped library: the
/// engine's conformance game. it is tiny enough to enumerate and has a
/// known equilibrium family, so regret accumulation, reach weighting,
/// and policy averaging can all be checked numerically. the deal is
/// injected from outside the state machine, the same shape the euchre
/// agent uses: a determinized deal is fixed before each traversal and
/// the bucket hides it from the seat to act.
#[derive(Debug, Clone)]
pub struct Kuhn {
    cards: [u8; 2],
    moves: Vec<KuhnMove>,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum KuhnMove {
    Pass,
    Bet,
}

/// deal one card to each seat, jack = 1 through king = 3.
impl From<(u8, u8)> for Kuhn {
    fn from((first, second): (u8, u8)) -> Self {
        assert!(first != second);
        assert!((1..=3).contains(&first) && (1..=3).contains(&second));
        Self {
            cards: [first, second],
            moves: Vec::with_capacity(3),
        }
    }
}

impl Kuhn {
    /// all six ordered deals, for exhaustive chance enumeration.
    pub fn deals() -> Vec<Kuhn> {
        let cards = [1u8, 2, 3];
        cards
            .into_iter()
            .flat_map(|a| cards.into_iter().filter(move |b| *b != a).map(move |b| Kuhn::from((a, b))))
            .collect()
    }

    fn showdown(&self) -> Seat {
        match self.cards[0] > self.cards[1] {
            true => 0,
            false => 1,
        }
    }
}

impl Game for Kuhn {
    type Action = KuhnMove;

    fn choices(&self) -> Vec<KuhnMove> {
        // a pass facing a bet folds; a bet facing a bet calls
        vec![KuhnMove::Pass, KuhnMove::Bet]
    }

    fn apply(&mut self, action: KuhnMove) {
        self.moves.push(action);
    }

    fn turn(&self) -> Turn {
        use KuhnMove::*;
        match self.moves[..] {
            [] => Turn::Choice(0),
            [_] => Turn::Choice(1),
            [Pass, Bet] => Turn::Choice(0),
            _ => Turn::Terminal,
        }
    }

    fn payoff(&self, seat: Seat) -> Utility {
        use KuhnMove::*;
        assert!(seat < 2, "two-handed game");
        let (winner, stake) = match self.moves[..] {
            [Pass, Pass] => (self.showdown(), 1.),
            [Bet, Bet] | [Pass, Bet, Bet] => (self.showdown(), 2.),
            [Bet, Pass] => (0, 1.),
            [Pass, Bet, Pass] => (1, 1.),
            _ => unreachable!("payoff at a live state"),
        };
        match seat == winner {
            true => stake,
            false => -stake,
        }
    }

    fn bucket(&self) -> Bucket {
        let seat = match self.turn() {
            Turn::Choice(seat) => seat,
            Turn::Terminal => unreachable!("bucket at a terminal state"),
        };
        let mut bytes = vec![self.cards[seat]];
        bytes.extend(self.moves.iter().map(|m| *m as u8 + 1));
        Bucket::from(&bytes[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N;
    use crate::Probability;
    use crate::cfr::Policy;
    use crate::cfr::profile::Profile;

    const ITERATIONS: usize = 10_000;

    fn density(policy: &Policy<KuhnMove>, action: KuhnMove) -> Probability {
        policy
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, p)| *p)
            .expect("action in policy")
    }

    /// exhaustive chance enumeration: every deal, every traverser, every
    /// iteration, against one shared profile.
    fn train() -> (Profile<Kuhn>, Utility) {
        let mut profile = Profile::new();
        let mut value = 0.;
        for _ in 0..ITERATIONS {
            for deal in Kuhn::deals() {
                value += profile.cfr(0, deal.clone(), [1.; N]);
                profile.cfr(1, deal, [1.; N]);
            }
        }
        (profile, value / (ITERATIONS * Kuhn::deals().len()) as Utility)
    }

    fn average(profile: &Profile<Kuhn>, observation: &[u8]) -> Policy<KuhnMove> {
        profile
            .at(&Bucket::from(observation))
            .expect("infoset visited in training")
            .average()
    }

    #[test]
    fn converges_on_kuhn_poker() {
        let (profile, value) = train();
        // twelve reachable information sets: 3 cards x (opening, facing a
        // bet, facing a check, facing a check-raise... ) = 3 x 4
        assert!(profile.len() == 12);
        // the first seat gives up 1/18 per deal at equilibrium
        assert!((value - (-1. / 18.)).abs() < 0.02, "game value {}", value);
        // every advice read is a distribution
        for info in profile.infos().values() {
            let advice = info.advice();
            let total = advice.iter().map(|(_, p)| p).sum::<Probability>();
            assert!((total - 1.).abs() < 1e-5);
            assert!(advice.iter().all(|(_, p)| *p >= 0.));
        }
    }

    #[test]
    fn purges_dominated_actions() {
        let (profile, _) = train();
        // the king always calls a bet
        assert!(density(&average(&profile, &[3, 2]), KuhnMove::Bet) > 0.9);
        assert!(density(&average(&profile, &[3, 1, 2]), KuhnMove::Bet) > 0.9);
        // the jack always folds to one
        assert!(density(&average(&profile, &[1, 2]), KuhnMove::Pass) > 0.9);
        assert!(density(&average(&profile, &[1, 1, 2]), KuhnMove::Pass) > 0.9);
    }

    #[test]
    fn mixes_the_bluff_at_one_third() {
        let (profile, _) = train();
        // the second seat holding the jack after a check bluffs 1/3 of
        // the time in the unique equilibrium
        let bluff = density(&average(&profile, &[1, 1]), KuhnMove::Bet);
        assert!((bluff - 1. / 3.).abs() < 0.1, "bluff rate {}", bluff);
        // and holding the queen it never bets
        let queen = density(&average(&profile, &[2, 1]), KuhnMove::Bet);
        assert!(queen < 0.1, "queen bet rate {}", queen);
    }
}
