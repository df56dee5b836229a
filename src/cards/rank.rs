/// Euchre strips the pack down to six ranks. discriminants are the ones
/// digit of the packed card encoding, so rank extraction is `value % 10`
/// with no lookup table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Nine = 1,
    Ten = 2,
    Jack = 3,
    Queen = 4,
    King = 5,
    Ace = 6,
}

impl Rank {
    /// all six ranks in ascending order.
    pub const fn all() -> [Rank; 6] {
        [
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            1 => Rank::Nine,
            2 => Rank::Ten,
            3 => Rank::Jack,
            4 => Rank::Queen,
            5 => Rank::King,
            6 => Rank::Ace,
            _ => panic!("invalid rank byte: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Rank::Nine => write!(f, "9"),
            Rank::Ten => write!(f, "T"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
        }
    }
}

use std::fmt::{Display, Formatter, Result};
