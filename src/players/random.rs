use crate::cards::Card;
use crate::cfr::Game;
use crate::game::Euchre;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// the weakest baseline: a uniform draw from the legal plays.
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn act(&mut self, game: &Euchre) -> Card {
        *game
            .choices()
            .choose(&mut self.rng)
            .expect("live state has choices")
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}
