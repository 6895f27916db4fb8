//! Environment port - the world the TD learner acts in.

use std::fmt;
use std::hash::Hash;

/// A stateful world the learner interacts with step by step.
///
/// Unlike [`crate::ports::Model`], an environment reveals nothing about its
/// dynamics: the learner only observes the state it lands in after applying
/// an action. Domain knowledge the learner does need (legal actions,
/// rewards, goal detection) comes separately through [`crate::ports::Task`].
pub trait Environment {
    type State: Clone + Eq + Hash + fmt::Debug;
    type Action: Clone + Eq + Hash + fmt::Debug;

    /// Re-initialize to a start state. Called before training and after
    /// every completed episode.
    fn reset(&mut self);

    /// The state the environment is currently in.
    fn current_state(&self) -> Self::State;

    /// Apply `action`, mutating internal state according to domain rules.
    /// Adapters keep the state inside the valid domain; a move that would
    /// leave it is typically a no-op.
    fn apply(&mut self, action: &Self::Action);
}
