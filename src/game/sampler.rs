use super::state::Euchre;
use crate::KITTY_SIZE;
use crate::N;
use crate::Seat;
use crate::cards::Card;
use crate::cfr::Game;
use anyhow::Result;
use anyhow::bail;
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

/// determinization: redealing the cards the acting seat cannot see.
impl Euchre {
    /// a same-information state with the hidden cards redealt: the other
    /// seats' hands and the face-down kitty go back into a pool and come
    /// out again under the void constraints the actor has observed. the
    /// actor's own hand, the table, the history, and the public up-card
    /// are untouched, so the redealt state shares the original's bucket.
    /// that is checked on the way out, since a divergence would poison
    /// training.
    ///
    /// seats are filled most-constrained first and the pool is
    /// re-shuffled between seats; the draw is not exactly uniform over
    /// feasible completions, but the greedy order avoids systematic
    /// dead ends. errs when a seat cannot be filled from the compatible
    /// remainder; callers retry with fresh randomness.
    pub fn redeal<R: Rng>(&self, rng: &mut R) -> Result<Self> {
        let mut next = self.clone();
        let mut pool = Vec::with_capacity(crate::DECK_SIZE);
        for seat in self.others() {
            pool.append(&mut next.hands[seat]);
        }
        pool.extend_from_slice(&self.kitty[1..]);
        pool.shuffle(rng);
        let constrained = self
            .others()
            .sorted_by_key(|seat| pool.iter().filter(|c| self.accepts(*seat, **c)).count())
            .collect::<Vec<_>>();
        for seat in constrained {
            let size = self.hands[seat].len();
            let mut hand = Vec::with_capacity(size);
            let mut rest = Vec::with_capacity(pool.len());
            for card in pool {
                match hand.len() < size && self.accepts(seat, card) {
                    true => hand.push(card),
                    false => rest.push(card),
                }
            }
            if hand.len() < size {
                bail!("infeasible redeal: seat {} short of a {}-card hand", seat, size);
            }
            hand.sort();
            next.hands[seat] = hand;
            pool = rest;
            pool.shuffle(rng);
        }
        assert!(pool.len() == KITTY_SIZE - 1, "leftovers fill the hidden kitty");
        next.kitty[1..].copy_from_slice(&pool);
        assert!(next.bucket() == self.bucket(), "redeal changed the actor's view");
        Ok(next)
    }

    fn others(&self) -> impl Iterator<Item = Seat> + '_ {
        (0..N).filter(|seat| *seat != self.actor)
    }

    /// a seat may hold a card unless it is known void in the card's
    /// effective suit.
    fn accepts(&self, seat: Seat, card: Card) -> bool {
        !self.voids[seat].contains(card.effective(self.trump))
    }
}
