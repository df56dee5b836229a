//! Counterfactual regret minimization over an abstract extensive-form
//! game.
//!
//! The engine is generic: anything implementing [`Game`] can be trained
//! on. A [`Profile`] owns one [`Info`] record per reachable [`Bucket`]
//! (information set) and walks the tree recursively, accumulating
//! counterfactual regret for the traversing seat and re-matching its
//! current policy as it goes. The test build carries Kuhn poker as a
//! second implementation of the capability, small enough to check
//! convergence against a known equilibrium; it is test collateral, not
//! shipped API.

mod bucket;
mod game;
mod info;
#[cfg(test)]
mod kuhn;
mod profile;

pub use bucket::*;
pub use game::*;
pub use info::*;
pub use profile::*;

/// a distribution (or any weighting) over a small set of actions.
///
/// Vec over HashMap: action sets here are five entries at most, and a
/// linear scan beats hashing at that size while keeping iteration order
/// deterministic.
pub type Policy<A> = Vec<(A, crate::Probability)>;
