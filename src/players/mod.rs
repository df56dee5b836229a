//! Players that can hold a seat at a [`Table`].
//!
//! one closed sum of agent kinds rather than an open trait object: the
//! driver matches on the variant, and every player exposes the same two
//! capabilities: pick a card for the state in front of you, and hear
//! that the deal ended.
//!
//! [`Table`]: crate::game::Table

mod cfr;
mod minimax;
mod random;

pub use cfr::*;
pub use minimax::*;
pub use random::*;

use crate::cards::Card;
use crate::game::Euchre;

pub enum Player {
    Cfr(CfrPlayer),
    Minimax(MinimaxPlayer),
    Random(RandomPlayer),
}

impl Player {
    pub fn act(&mut self, game: &Euchre) -> Card {
        match self {
            Player::Cfr(player) => player.act(game),
            Player::Minimax(player) => player.act(game),
            Player::Random(player) => player.act(game),
        }
    }
    pub fn end_game(&mut self) {
        match self {
            Player::Cfr(player) => player.end_game(),
            Player::Minimax(_) => {}
            Player::Random(_) => {}
        }
    }
}
