//! Model port - the known-dynamics boundary consumed by the DP solvers.

use std::fmt;
use std::hash::Hash;

/// A fully known Markov decision process, minus the discount factor.
///
/// The dynamic programming solvers ([`crate::PolicyIterationSolver`],
/// [`crate::ValueIterationSolver`]) consume this trait; γ and the
/// convergence tolerance live in [`crate::SolverConfig`], not here, because
/// they parameterize the solve rather than the domain.
///
/// # Closed world
///
/// Every state returned by [`Model::transitions`] must be a member of
/// [`Model::states`]. The solvers detect violations and report them as
/// [`crate::Error::UnknownState`] rather than treating unknown successors
/// as zero-value.
pub trait Model {
    type State: Clone + Eq + Hash + fmt::Debug;
    type Action: Clone + Eq + fmt::Debug;

    /// The complete, finite state set.
    fn states(&self) -> Vec<Self::State>;

    /// Immediate reward for occupying `state`.
    fn reward(&self, state: &Self::State) -> f64;

    /// Legal actions in `state`, in a stable order. Must be non-empty for
    /// every declared state; an empty set is a model-definition bug and
    /// surfaces as [`crate::Error::EmptyDomain`].
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Successor distribution for taking `action` in `state`, as
    /// `(probability, successor)` pairs. Probabilities are assumed, not
    /// verified, to sum to 1.
    fn transitions(&self, state: &Self::State, action: &Self::Action)
    -> Vec<(f64, Self::State)>;
}
