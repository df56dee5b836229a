/// one card, packed as suit byte + rank byte: the jack of diamonds is 13,
/// the ace of clubs is 46. the packing makes suit and rank arithmetic
/// (no tables), keeps a sorted hand grouped by suit, and doubles as the
/// action encoding for the play phase.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn suit(&self) -> Suit {
        Suit::from((self.0 / 10) * 10)
    }
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 10)
    }
    /// the suit this card plays as under the given trump: the left bower
    /// (jack of trump's complement) counts as trump for following and for
    /// ranking; every other card plays as its nominal suit.
    pub fn effective(&self, trump: Suit) -> Suit {
        if self.rank() == Rank::Jack && self.suit() == trump.complement() {
            trump
        } else {
            self.suit()
        }
    }
    /// the image of this card under the canonicalizing suit permutation.
    /// involutive: re-apply with the same trump to undo.
    pub fn normalized(&self, trump: Suit) -> Card {
        Card::from((self.suit().normalized(trump), self.rank()))
    }
}

impl From<(Suit, Rank)> for Card {
    fn from((suit, rank): (Suit, Rank)) -> Self {
        Self(u8::from(suit) + u8::from(rank))
    }
}

/// u8 isomorphism, panics on malformed bytes
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        let card = Self(n);
        let _ = card.suit();
        let _ = card.rank();
        card
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Card::from((Suit::random(), *Rank::all().choose(&mut rand::rng()).unwrap()))
    }
}

use super::rank::Rank;
use super::suit::Suit;
#[cfg(test)]
use crate::Arbitrary;
use rand::seq::IndexedRandom;
use std::fmt::{Display, Formatter, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            for rank in Rank::all() {
                let card = Card::from((suit, rank));
                assert!(card == Card::from(u8::from(card)));
                assert!(card.suit() == suit);
                assert!(card.rank() == rank);
            }
        }
    }

    #[test]
    #[should_panic]
    fn rejects_malformed_byte() {
        let _ = Card::from(17);
    }

    #[test]
    fn left_bower_plays_as_trump() {
        let left = Card::from((Suit::Clubs, Rank::Jack));
        assert!(left.effective(Suit::Spades) == Suit::Spades);
        assert!(left.effective(Suit::Hearts) == Suit::Clubs);
    }

    #[test]
    fn plain_cards_play_nominal() {
        let king = Card::from((Suit::Clubs, Rank::King));
        let jack = Card::from((Suit::Hearts, Rank::Jack));
        assert!(king.effective(Suit::Spades) == Suit::Clubs);
        assert!(jack.effective(Suit::Spades) == Suit::Hearts);
    }

    #[test]
    fn normalize_involution() {
        for trump in Suit::all() {
            for suit in Suit::all() {
                for rank in Rank::all() {
                    let card = Card::from((suit, rank));
                    assert!(card == card.normalized(trump).normalized(trump));
                    assert!(card.rank() == card.normalized(trump).rank());
                }
            }
        }
    }

    #[test]
    fn arbitrary_cards_are_well_formed() {
        for _ in 0..32 {
            let card = Card::random();
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn normalize_maps_bowers_to_bowers() {
        for trump in Suit::all() {
            let right = Card::from((trump, Rank::Jack));
            let left = Card::from((trump.complement(), Rank::Jack));
            assert!(right.normalized(trump) == Card::from((Suit::Spades, Rank::Jack)));
            assert!(left.normalized(trump) == Card::from((Suit::Clubs, Rank::Jack)));
        }
    }
}
