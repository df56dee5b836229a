use super::bucket::Bucket;
use crate::Seat;
use crate::Utility;

/// whose move it is, if anyone's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Choice(Seat),
    Terminal,
}

/// the state capability consumed by the regret minimizer.
///
/// implementations are full perfect-information states: the engine runs
/// on determinized deals, so hidden information is resolved before a
/// traversal ever starts. what keeps the training honest is [`bucket`],
/// which must expose only what the seat to act can observe: states that
/// look alike to that seat must collide on the same bucket.
///
/// [`bucket`]: Game::bucket
pub trait Game: Clone {
    type Action: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// legal actions for the seat to act. empty only at terminal states.
    fn choices(&self) -> Vec<Self::Action>;
    /// advance this state in place. used for forced moves where no
    /// branching is needed.
    fn apply(&mut self, action: Self::Action);
    /// branch into an independent successor state.
    fn child(&self, action: Self::Action) -> Self {
        let mut next = self.clone();
        next.apply(action);
        next
    }
    /// whose move it is, or Terminal.
    fn turn(&self) -> Turn;
    /// payoff from one seat's perspective. defined at terminal states.
    fn payoff(&self, seat: Seat) -> Utility;
    /// the information-set key from the acting seat's perspective.
    fn bucket(&self) -> Bucket;
}
