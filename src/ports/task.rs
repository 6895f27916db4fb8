//! Task port - domain knowledge supplied to the TD learner.

use std::fmt;
use std::hash::Hash;

/// The per-state knowledge a learner cannot discover on its own.
///
/// The TD learner pairs a [`Task`] with an
/// [`Environment`](crate::ports::Environment) over the same state and
/// action types: the environment moves, the task judges.
pub trait Task {
    type State: Clone + Eq + Hash + fmt::Debug;
    type Action: Clone + Eq + Hash + fmt::Debug;

    /// Legal actions in `state`, in a stable order. Must be non-empty for
    /// every state the learner can visit.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Immediate reward for occupying `state`.
    fn reward(&self, state: &Self::State) -> f64;

    /// Whether `state` completes an episode.
    fn reached_goal(&self, state: &Self::State) -> bool;
}
