use crate::HAND_SIZE;
use crate::KITTY_SIZE;
use crate::N;
use crate::Seat;
use crate::TRICKS;
use crate::Team;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Ranking;
use crate::cards::Suit;
use crate::cards::SuitSet;
use crate::cfr::Bucket;
use crate::cfr::Game;
use crate::cfr::Turn;
use itertools::Itertools;
use rand::Rng;

/// one Euchre deal in its play phase. trump is fixed by the public
/// up-card; bidding and the kitty exchange are out of frame.
///
/// the state is a full deal from nobody's perspective: all four hands and
/// the kitty are materialized. what a single seat actually knows is
/// carried by its bucket (its own sorted hand plus the public history)
/// and by the per-seat void sets, which record every failure to follow
/// suit and constrain how hidden cards may be redealt.
#[derive(Debug, Clone, PartialEq)]
pub struct Euchre {
    pub(super) hands: [Vec<Card>; N],
    pub(super) voids: [SuitSet; N],
    pub(super) table: Vec<Card>,
    pub(super) history: Vec<Card>,
    pub(super) kitty: [Card; KITTY_SIZE],
    pub(super) tricks: [usize; 2],
    pub(super) lead_suit: Option<Suit>,
    pub(super) trump: Suit,
    pub(super) lead: Seat,
    pub(super) caller: Team,
    pub(super) actor: Seat,
}

impl Euchre {
    /// shuffle and deal a fresh hand: five sorted cards to each seat, the
    /// rest to the kitty with the up-card on top fixing trump, a random
    /// lead seat, and a random calling team.
    pub fn deal<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let hands = std::array::from_fn(|_| deck.deal(HAND_SIZE).into_iter().sorted().collect());
        let kitty: [Card; KITTY_SIZE] = deck
            .deal(KITTY_SIZE)
            .try_into()
            .expect("four cards left for the kitty");
        let lead = rng.random_range(0..N);
        Self {
            trump: kitty[0].suit(),
            caller: rng.random_range(0..crate::TEAMS),
            voids: [SuitSet::empty(); N],
            table: Vec::with_capacity(N),
            history: Vec::with_capacity(N * HAND_SIZE),
            tricks: [0; 2],
            lead_suit: None,
            actor: lead,
            hands,
            kitty,
            lead,
        }
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }
    pub fn up_card(&self) -> Card {
        self.kitty[0]
    }

    /// the whole state pushed through the canonicalizing suit permutation
    /// for `trump`: every card in hands, table, history, and kitty, every
    /// void entry, the trump suit, and the led suit. hands are re-sorted.
    /// involutive: re-apply with the same argument to undo.
    pub fn permuted(&self, trump: Suit) -> Self {
        let map = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| c.normalized(trump))
                .collect::<Vec<_>>()
        };
        Self {
            hands: std::array::from_fn(|seat| {
                map(&self.hands[seat]).into_iter().sorted().collect()
            }),
            voids: std::array::from_fn(|seat| self.voids[seat].normalized(trump)),
            table: map(&self.table),
            history: map(&self.history),
            kitty: self.kitty.map(|c| c.normalized(trump)),
            lead_suit: self.lead_suit.map(|s| s.normalized(trump)),
            trump: self.trump.normalized(trump),
            ..*self
        }
    }

    /// canonical form: the permutation that lands trump on Spades,
    /// collapsing the four trump-isomorphic copies of this state onto one
    /// strategy entry.
    pub fn normalized(&self) -> Self {
        self.permuted(self.trump)
    }

    /// completed tricks.
    fn played(&self) -> usize {
        self.tricks[0] + self.tricks[1]
    }

    fn resolve(&mut self) {
        let lead_suit = self.lead_suit.expect("a full trick has a led suit");
        let ranking = Ranking::from((self.trump, lead_suit));
        let (best, _) = self
            .table
            .iter()
            .enumerate()
            .max_by_key(|(_, card)| ranking.rank(**card))
            .expect("four cards on the table");
        let winner = (self.lead + best) % N;
        self.tricks[crate::team(winner)] += 1;
        self.lead = winner;
        self.actor = winner;
        self.table.clear();
        self.lead_suit = None;
    }
}

impl Game for Euchre {
    type Action = Card;

    /// legal plays for the seat to act: follow the led effective suit if
    /// possible, otherwise anything in hand. consecutive same-suit cards
    /// are collapsed onto their lowest member, since unplayed touching
    /// ranks win and lose the same tricks; without this reduction the
    /// branching is untrainable.
    // TODO: the collapse treats a left bower adjacent to its nominal
    // ten as touching when nothing has been led; splitting the bower out
    // of the run needs effective-suit-aware adjacency.
    fn choices(&self) -> Vec<Card> {
        let hand = &self.hands[self.actor];
        let playable = match self.lead_suit {
            None => hand.clone(),
            Some(lead) => {
                let follow = hand
                    .iter()
                    .copied()
                    .filter(|c| c.effective(self.trump) == lead)
                    .collect::<Vec<_>>();
                match follow.is_empty() {
                    true => hand.clone(),
                    false => follow,
                }
            }
        };
        let mut last = None;
        let mut choices = Vec::with_capacity(playable.len());
        for card in playable {
            if last != Some(u8::from(card) - 1) {
                choices.push(card);
            }
            last = Some(u8::from(card));
        }
        choices
    }

    /// play a card: out of the hand, onto the table and into the history.
    /// the first card of a trick fixes the led suit (a led bower leads
    /// trump); a failure to follow brands the seat void in the led suit;
    /// the fourth card resolves the trick and hands the lead to its
    /// winner.
    fn apply(&mut self, card: Card) {
        let hand = &mut self.hands[self.actor];
        let slot = hand
            .iter()
            .position(|c| *c == card)
            .expect("played card is in the actor's hand");
        hand.remove(slot);
        match self.lead_suit {
            None => self.lead_suit = Some(card.effective(self.trump)),
            Some(lead) => {
                if card.effective(self.trump) != lead {
                    self.voids[self.actor].insert(lead);
                }
            }
        }
        self.table.push(card);
        self.history.push(card);
        match self.table.len() == N {
            true => self.resolve(),
            false => self.actor = (self.actor + 1) % N,
        }
    }

    /// the deal ends early once the outcome is locked: a march (callers
    /// take all five) can only be confirmed on the last trick, but three
    /// defender tricks already decide a euchre.
    fn turn(&self) -> Turn {
        let attackers = self.caller;
        let defenders = 1 - self.caller;
        if self.tricks[attackers] == TRICKS
            || self.tricks[defenders] >= 3
            || self.played() == TRICKS
        {
            Turn::Terminal
        } else {
            Turn::Choice(self.actor)
        }
    }

    /// point swing from one seat's view. defenders taking the majority
    /// score two for the euchre; callers score two for a march and one
    /// otherwise. zero-sum across teams by construction.
    fn payoff(&self, seat: Seat) -> Utility {
        let attackers = self.caller;
        let defenders = 1 - self.caller;
        let mut points = [0i32; 2];
        if self.tricks[defenders] > self.tricks[attackers] {
            points[defenders] = 2;
        } else if self.tricks[attackers] == TRICKS {
            points[attackers] = 2;
        } else {
            points[attackers] = 1;
        }
        let team = crate::team(seat);
        (points[team] - points[1 - team]) as Utility
    }

    /// what the seat to act can see: its own sorted hand, zero-padded,
    /// then every card played this deal in order. nobody else's hand, and
    /// nothing of the hidden kitty.
    fn bucket(&self) -> Bucket {
        let mut bytes = [0u8; crate::cfr::BUCKET_WIDTH];
        for (i, card) in self.hands[self.actor].iter().enumerate() {
            bytes[i] = u8::from(*card);
        }
        for (i, card) in self.history.iter().enumerate() {
            bytes[HAND_SIZE + i] = u8::from(*card);
        }
        Bucket::from(bytes)
    }
}

impl std::fmt::Display for Euchre {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "trump {} up {} tricks {}-{} table",
            self.trump,
            self.up_card(),
            self.tricks[0],
            self.tricks[1],
        )?;
        for card in self.table.iter() {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}
