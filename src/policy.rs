//! Policies: total mappings from state to chosen action.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// A mapping from state to the action chosen in that state.
///
/// Produced once, at the end of a solve or train call. Dynamic programming
/// solvers return a policy covering every declared state; the TD learner
/// returns one covering every state with at least one stored Q entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Policy<S: Eq + Hash, A> {
    choices: HashMap<S, A>,
}

impl<S: Eq + Hash, A> Policy<S, A> {
    pub fn new() -> Self {
        Self {
            choices: HashMap::new(),
        }
    }

    /// Assign `action` to `state`, replacing any previous choice.
    pub fn insert(&mut self, state: S, action: A) {
        self.choices.insert(state, action);
    }

    /// The action chosen in `state`, if the policy covers it.
    pub fn action(&self, state: &S) -> Option<&A> {
        self.choices.get(state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &A)> {
        self.choices.iter()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl<S: Eq + Hash, A: PartialEq> Policy<S, A> {
    /// Count the states in this policy whose chosen action disagrees with
    /// `reference` (states absent from `reference` count as disagreements).
    ///
    /// Reporting drivers use this to plot policy convergence of a partial
    /// training run against a long reference run.
    pub fn difference(&self, reference: &Policy<S, A>) -> usize {
        self.choices
            .iter()
            .filter(|(state, action)| reference.action(state) != Some(action))
            .count()
    }
}
