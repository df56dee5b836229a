pub mod cards;
pub mod cfr;
pub mod game;
pub mod players;

/// dimensional analysis types
pub type Utility = f32;
pub type Probability = f32;
pub type Seat = usize;
pub type Team = usize;

// table parameters
pub const N: usize = 4;
pub const TEAMS: usize = 2;
pub const HAND_SIZE: usize = 5;
pub const KITTY_SIZE: usize = 4;
pub const DECK_SIZE: usize = 24;
pub const TRICKS: usize = 5;

// per-decision training parameters
pub const CFR_ITERATIONS: usize = 100;
pub const RESAMPLE_ATTEMPTS: usize = 100;

// regret matching parameters
pub const POLICY_MIN: Probability = Probability::MIN_POSITIVE;

/// the team a seat plays for. partners sit across from each other.
pub const fn team(seat: Seat) -> Team {
    seat % TEAMS
}

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}
