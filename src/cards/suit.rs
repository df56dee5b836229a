/// Card suit. discriminants are the tens digit of the packed card
/// encoding, so suit extraction is `(value / 10) * 10`.
///
/// Suits pair up by color, Diamonds with Hearts and Spades with Clubs,
/// and the pairing matters: the jack of the trump suit's same-color partner
/// (the left bower) plays as a trump card. Suit symmetry is exploited by
/// [`Suit::normalized`] to collapse trump-isomorphic states, shrinking the
/// strategy table by a factor of four.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Diamonds = 10,
    Hearts = 20,
    Spades = 30,
    Clubs = 40,
}

impl Suit {
    /// all four suits in encoding order.
    pub const fn all() -> [Suit; 4] {
        [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs]
    }

    /// the same-color partner suit: D <-> H, S <-> C. the jack of
    /// trump's complement is the left bower.
    pub const fn complement(self) -> Suit {
        match self {
            Suit::Diamonds => Suit::Hearts,
            Suit::Hearts => Suit::Diamonds,
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
        }
    }

    /// the across-color swap: D <-> C, H <-> S.
    const fn crossed(self) -> Suit {
        match self {
            Suit::Diamonds => Suit::Clubs,
            Suit::Hearts => Suit::Spades,
            Suit::Spades => Suit::Hearts,
            Suit::Clubs => Suit::Diamonds,
        }
    }

    /// the canonicalizing permutation for a given trump suit: sends
    /// `trump` to Spades while pairing each suit with its image's
    /// complement, so bowers stay bowers. composed from the two swaps
    /// above, each an involution, the whole map is its own inverse:
    /// re-apply with the same `trump` to undo.
    pub const fn normalized(self, trump: Suit) -> Suit {
        match trump {
            Suit::Spades => self,
            Suit::Clubs => self.complement(),
            Suit::Hearts => self.crossed(),
            Suit::Diamonds => self.complement().crossed(),
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            10 => Suit::Diamonds,
            20 => Suit::Hearts,
            30 => Suit::Spades,
            40 => Suit::Clubs,
            _ => panic!("invalid suit byte: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::Diamonds => write!(f, "d"),
            Suit::Hearts => write!(f, "h"),
            Suit::Spades => write!(f, "s"),
            Suit::Clubs => write!(f, "c"),
        }
    }
}

impl crate::Arbitrary for Suit {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        *Suit::all().choose(&mut rand::rng()).unwrap()
    }
}
