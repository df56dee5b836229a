use super::Policy;
use super::bucket::Bucket;
use super::game::Game;
use super::game::Turn;
use super::info::Info;
use crate::N;
use crate::Probability;
use crate::Seat;
use crate::Utility;
use std::collections::HashMap;

/// the strategy profile: one [`Info`] per information set visited so far.
/// shared across iterations and across traverser seats; the only
/// long-lived structure in a training run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound = "G::Action: serde::Serialize + serde::de::DeserializeOwned")
)]
pub struct Profile<G: Game> {
    infos: HashMap<Bucket, Info<G::Action>>,
}

impl<G: Game> Default for Profile<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Profile<G> {
    pub fn new() -> Self {
        Self {
            infos: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// the learning record at a bucket, if that information set has been
    /// visited.
    pub fn at(&self, bucket: &Bucket) -> Option<&Info<G::Action>> {
        self.infos.get(bucket)
    }

    /// decision-time read: positive-regret matching at a bucket.
    pub fn advice(&self, bucket: &Bucket) -> Option<Policy<G::Action>> {
        self.infos.get(bucket).map(Info::advice)
    }

    /// the full table, for callers that persist strategies.
    pub fn infos(&self) -> &HashMap<Bucket, Info<G::Action>> {
        &self.infos
    }

    /// one counterfactual-regret-minimization traversal from `state` on
    /// behalf of `traverser`, with `reach` carrying each seat's
    /// probability of having played to this point.
    ///
    /// regrets and strategy mass accumulate only at the traverser's own
    /// decision nodes, weighted by how likely everyone else was to let
    /// the game get here; the node's current policy re-matches right
    /// after. forced moves are followed in place without an update, since
    /// a single choice carries no regret.
    ///
    /// returns the node value: the policy-weighted mean of the action
    /// utilities.
    pub fn cfr(&mut self, traverser: Seat, state: G, reach: [Probability; N]) -> Utility {
        let mut state = state;
        let (seat, choices) = loop {
            match state.turn() {
                Turn::Terminal => return state.payoff(traverser),
                Turn::Choice(seat) => {
                    let choices = state.choices();
                    assert!(!choices.is_empty(), "no choices at a live state");
                    match choices.len() {
                        1 => state.apply(choices[0]),
                        _ => break (seat, choices),
                    }
                }
            }
        };
        let bucket = state.bucket();
        let policy = self
            .infos
            .entry(bucket)
            .or_insert_with(|| Info::from(choices))
            .current();
        let mut value = 0.;
        let mut utilities = Vec::with_capacity(policy.len());
        for (choice, probability) in policy.iter().copied() {
            let mut forward = reach;
            forward[seat] *= probability;
            let utility = self.cfr(traverser, state.child(choice), forward);
            value += probability * utility;
            utilities.push((choice, utility));
        }
        if seat == traverser {
            let counterfactual = reach
                .iter()
                .enumerate()
                .filter(|(s, _)| *s != seat)
                .map(|(_, p)| p)
                .product::<Probability>();
            let info = self.infos.get_mut(&bucket).expect("inserted above");
            for (choice, utility) in utilities {
                let weight = reach[seat] * info.policy(&choice);
                info.update(&choice, counterfactual * (utility - value), weight);
            }
            info.rematch();
        }
        value
    }
}
