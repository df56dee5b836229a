use super::suit::Suit;

/// a set of suits, one bit per suit. tracks which effective suits a seat
/// is known to be void in: once a seat fails to follow a lead, no future
/// redeal may hand them that suit back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuitSet(u8);

impl SuitSet {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub fn insert(&mut self, suit: Suit) {
        self.0 |= Self::mask(suit);
    }
    pub fn contains(&self, suit: Suit) -> bool {
        self.0 & Self::mask(suit) != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn iter(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::all().into_iter().filter(|s| self.contains(*s))
    }
    /// the image of every member under the canonicalizing permutation.
    pub fn normalized(&self, trump: Suit) -> Self {
        self.iter()
            .map(|s| s.normalized(trump))
            .fold(Self::empty(), |mut set, s| {
                set.insert(s);
                set
            })
    }

    fn mask(suit: Suit) -> u8 {
        1 << (u8::from(suit) / 10 - 1)
    }
}

impl std::fmt::Display for SuitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in self.iter() {
            write!(f, "{}", suit)?;
        }
        Ok(())
    }
}
