//! Value tables: state → utility estimates over a declared state set.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

use crate::{Error, Result};

/// A mapping from state to a scalar utility estimate.
///
/// Constructed zeroed over the declared state set and kept fully defined
/// over it for the whole solve. Reads of undeclared states fail with
/// [`Error::UnknownState`] instead of defaulting to zero, so a transition
/// model that leaks out of the declared set is caught at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueTable<S: Eq + Hash> {
    values: HashMap<S, f64>,
}

impl<S: Clone + Eq + Hash + fmt::Debug> ValueTable<S> {
    /// Build a table holding 0.0 for every state in `states`.
    pub fn zeroed<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            values: states.into_iter().map(|state| (state, 0.0)).collect(),
        }
    }

    /// The utility estimate for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] when `state` was not declared.
    pub fn get(&self, state: &S) -> Result<f64> {
        self.values
            .get(state)
            .copied()
            .ok_or_else(|| Error::unknown_state(state))
    }

    /// Overwrite the utility estimate for `state`.
    pub fn set(&mut self, state: S, value: f64) {
        self.values.insert(state, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, f64)> {
        self.values.iter().map(|(state, value)| (state, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
