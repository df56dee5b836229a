use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::DECK_SIZE;

/// the total trick order over all 24 cards for one (trump, lead) pair,
/// ascending. off-suit cards sit at the bottom in arbitrary order (legal
/// plays that can never win), then the lead suit by rank, then
/// trump by rank, with the bowers above everything: left below right.
/// the left bower appears only in the trump section, never in its nominal
/// suit's run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    order: [Card; DECK_SIZE],
}

impl From<(Suit, Suit)> for Ranking {
    fn from((trump, lead): (Suit, Suit)) -> Self {
        let right = Card::from((trump, Rank::Jack));
        let left = Card::from((trump.complement(), Rank::Jack));
        let run = |suit: Suit| Rank::all().into_iter().map(move |rank| Card::from((suit, rank)));
        let order = Suit::all()
            .into_iter()
            .filter(|suit| *suit != trump && *suit != lead)
            .flat_map(run)
            .chain(if lead == trump { vec![] } else { run(lead).collect() })
            .chain(run(trump))
            .filter(|card| *card != left && *card != right)
            .chain([left, right])
            .collect::<Vec<_>>()
            .try_into()
            .expect("all 24 cards ranked exactly once");
        Self { order }
    }
}

impl Ranking {
    /// position of a card in the order. linear scan over 24 entries.
    /// panics on a card that is not in the deck, which the encoding rules
    /// out.
    pub fn rank(&self, card: Card) -> usize {
        self.order
            .iter()
            .position(|c| *c == card)
            .expect("card appears in the ranking")
    }
}
