/// the full 24-card deck. shuffling takes the caller's RNG so a seeded
/// generator reproduces a deal exactly.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Deck {
        Deck {
            cards: Suit::all()
                .into_iter()
                .flat_map(|suit| Rank::all().into_iter().map(move |rank| Card::from((suit, rank))))
                .collect(),
        }
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// deal the top `n` cards. panics if the deck runs dry, which cannot
    /// happen in a 4 x 5 + kitty deal.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(n <= self.cards.len(), "deck exhausted");
        self.cards.split_off(self.cards.len() - n)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DECK_SIZE;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn full_and_unique() {
        let deck = Deck::new();
        assert!(deck.len() == DECK_SIZE);
        assert!(deck.cards.iter().all_unique());
    }

    #[test]
    fn shuffle_preserves_cards() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        assert!(deck.cards.iter().sorted().eq(Deck::new().cards.iter()));
    }

    #[test]
    fn deal_partitions() {
        let mut deck = Deck::new();
        let hand = deck.deal(5);
        assert!(hand.len() == 5);
        assert!(deck.len() == DECK_SIZE - 5);
        assert!(hand.iter().all(|c| !deck.cards.contains(c)));
    }
}
