use super::Policy;
use crate::Probability;
use crate::Utility;

/// the learning record for one information set: the action set it was
/// created with, cumulative counterfactual regret per action, cumulative
/// reach-weighted strategy per action, and the current regret-matched
/// policy. parallel Vecs keyed by position in `choices`.
///
/// only the two cumulative tables are load-bearing for persistence; the
/// current policy is derivable by re-matching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Info<A: Copy + Eq + std::fmt::Debug> {
    choices: Vec<A>,
    regrets: Vec<Utility>,
    weights: Vec<Probability>,
    policy: Vec<Probability>,
}

/// fresh record: zero sums, uniform current policy.
impl<A: Copy + Eq + std::fmt::Debug> From<Vec<A>> for Info<A> {
    fn from(choices: Vec<A>) -> Self {
        let n = choices.len();
        assert!(n > 0, "an information set requires at least one choice");
        Self {
            regrets: vec![0.; n],
            weights: vec![0.; n],
            policy: vec![1. / n as Probability; n],
            choices,
        }
    }
}

impl<A: Copy + Eq + std::fmt::Debug> Info<A> {
    pub fn choices(&self) -> &[A] {
        &self.choices
    }

    /// current policy mass on one action.
    pub fn policy(&self, action: &A) -> Probability {
        self.policy[self.index(action)]
    }

    /// cumulative regret on one action.
    pub fn regret(&self, action: &A) -> Utility {
        self.regrets[self.index(action)]
    }

    /// accumulate one traversal's contribution: counterfactual regret and
    /// reach-weighted strategy mass. negative regret contributions are
    /// expected and permitted.
    pub fn update(&mut self, action: &A, regret: Utility, weight: Probability) {
        let i = self.index(action);
        self.regrets[i] += regret;
        self.weights[i] += weight;
    }

    /// regret matching: the current policy becomes the positive part of
    /// cumulative regret, normalized. all regrets non-positive falls back
    /// to uniform.
    pub fn rematch(&mut self) {
        self.policy = self.matched();
    }

    /// the current policy over the full action set, in creation order.
    pub fn current(&self) -> Policy<A> {
        self.choices
            .iter()
            .copied()
            .zip(self.policy.iter().copied())
            .collect()
    }

    /// the state-strategy snapshot read at decision time: positive-regret
    /// matching over cumulative regret, without touching the record.
    pub fn advice(&self) -> Policy<A> {
        self.choices.iter().copied().zip(self.matched()).collect()
    }

    /// the long-run average strategy: cumulative reach-weighted strategy
    /// mass, normalized, uniform before any mass arrives. this is the
    /// distribution with equilibrium-convergence guarantees.
    pub fn average(&self) -> Policy<A> {
        let total = self.weights.iter().sum::<Probability>();
        let n = self.choices.len();
        self.choices
            .iter()
            .copied()
            .zip(self.weights.iter())
            .map(|(a, w)| match total > 0. {
                true => (a, w / total),
                false => (a, 1. / n as Probability),
            })
            .collect()
    }

    fn matched(&self) -> Vec<Probability> {
        let clipped = self.regrets.iter().map(|r| r.max(0.)).collect::<Vec<_>>();
        let total = clipped.iter().sum::<Utility>();
        let n = self.choices.len();
        match total > 0. {
            true => clipped.into_iter().map(|r| r / total).collect(),
            false => vec![1. / n as Probability; n],
        }
    }

    fn index(&self, action: &A) -> usize {
        self.choices
            .iter()
            .position(|a| a == action)
            .expect("action belongs to this information set")
    }
}
