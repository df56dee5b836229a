use crate::Seat;
use crate::Utility;
use crate::cards::Card;
use crate::cfr::Game;
use crate::cfr::Turn;
use crate::game::Euchre;

/// a perfect-information baseline: full-width team minimax over the open
/// deal, as if every hand were face up. exact but exponential, so only
/// practical from the late tricks; useful as the cheating upper bound
/// the trained agent is measured against.
pub struct MinimaxPlayer;

impl MinimaxPlayer {
    pub fn act(&self, game: &Euchre) -> Card {
        let seat = match game.turn() {
            Turn::Choice(seat) => seat,
            Turn::Terminal => panic!("act on a finished deal"),
        };
        Self::search(game, seat)
            .1
            .expect("live state has choices")
    }

    /// maximize for the seat's team, minimize on the other team's turns.
    /// both partners and both opponents share one zero-sum payoff, so a
    /// two-valued minimax suffices.
    fn search(game: &Euchre, seat: Seat) -> (Utility, Option<Card>) {
        match game.turn() {
            Turn::Terminal => (game.payoff(seat), None),
            Turn::Choice(actor) => {
                let mine = crate::team(actor) == crate::team(seat);
                let mut best: Option<(Utility, Card)> = None;
                for card in game.choices() {
                    let (value, _) = Self::search(&game.child(card), seat);
                    let better = match best {
                        None => true,
                        Some((incumbent, _)) => match mine {
                            true => value > incumbent,
                            false => value < incumbent,
                        },
                    };
                    if better {
                        best = Some((value, card));
                    }
                }
                let (value, card) = best.expect("live state has choices");
                (value, Some(card))
            }
        }
    }
}
