use super::state::Euchre;
use crate::N;
use crate::Seat;
use crate::Utility;
use crate::cfr::Game;
use crate::cfr::Turn;
use crate::players::Player;

/// one deal played out: the table repeatedly asks the seat to act for a
/// card and applies it until the hand is decided, then reports each
/// seat's point swing.
pub struct Table {
    game: Euchre,
    seats: [Player; N],
}

impl From<(Euchre, [Player; N])> for Table {
    fn from((game, seats): (Euchre, [Player; N])) -> Self {
        Self { game, seats }
    }
}

impl Table {
    pub fn play(&mut self) -> [Utility; N] {
        while let Turn::Choice(seat) = self.game.turn() {
            let card = self.seats[seat].act(&self.game);
            log::debug!("seat {} plays {} | {}", seat, card, self.game);
            self.game.apply(card);
        }
        for player in self.seats.iter_mut() {
            player.end_game();
        }
        std::array::from_fn(|seat: Seat| self.game.payoff(seat))
    }
}
