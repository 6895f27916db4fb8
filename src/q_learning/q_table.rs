//! Q-table: learned action values for temporal difference control.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::Serialize;

/// A mapping from `(state, action)` to a learned value.
///
/// Entries are created lazily on write; absent entries read as exactly 0.0
/// through [`QTable::get`] and are never materialized by reads. The
/// learning rate α and discount factor γ live in the table because every
/// update uses both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QTable<S: Eq + Hash, A: Eq + Hash> {
    q_values: HashMap<(S, A), f64>,
    learning_rate: f64,
    discount_factor: f64,
}

impl<S, A> QTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    /// Create an empty table with the given α and γ. Parameter ranges are
    /// validated by [`crate::TdLearner::new`], which owns construction.
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            q_values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// The learned value for `(state, action)`, defaulting to 0.0 for any
    /// pair never written.
    pub fn get(&self, state: &S, action: &A) -> f64 {
        self.q_values
            .get(&(state.clone(), action.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Overwrite the value for `(state, action)`, materializing the entry.
    pub fn set(&mut self, state: S, action: A, value: f64) {
        self.q_values.insert((state, action), value);
    }

    /// Maximum learned value over `actions` in `state`, with absent entries
    /// reading as 0.0. Callers guarantee `actions` is non-empty.
    pub fn max_q(&self, state: &S, actions: &[A]) -> f64 {
        actions
            .iter()
            .map(|action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Q-learning update: off-policy TD control.
    ///
    /// `Q(s,a) ← Q(s,a) + α·(r + γ·max_a' Q(s',a') − Q(s,a))`
    ///
    /// The target takes the max over `next_actions` regardless of which
    /// action the behavior policy will actually choose next. The episodic
    /// loop driving this update resembles SARSA bookkeeping, but the target
    /// stays off-policy on purpose; substituting the on-policy SARSA target
    /// would change semantics.
    ///
    /// An empty `next_actions` slice means `next_state` is terminal: the
    /// future term is 0.0, not a default smuggled past [`QTable::max_q`]'s
    /// non-empty contract. Successor states that merely lack legal actions
    /// must be rejected by the caller before reaching this update.
    pub fn update(&mut self, state: S, action: A, reward: f64, next_state: &S, next_actions: &[A]) {
        let current = self.get(&state, &action);
        let best_future = if next_actions.is_empty() {
            0.0
        } else {
            self.max_q(next_state, next_actions)
        };
        let target = reward + self.discount_factor * best_future;
        let updated = current + self.learning_rate * (target - current);
        self.set(state, action, updated);
    }

    /// Every state with at least one stored entry. Order is unspecified;
    /// callers that need determinism derive it per state, not from this
    /// order.
    pub fn visited_states(&self) -> Vec<S> {
        let mut seen = HashSet::new();
        let mut states = Vec::new();
        for (state, _) in self.q_values.keys() {
            if seen.insert(state.clone()) {
                states.push(state.clone());
            }
        }
        states
    }

    /// Σ |Q − Q_ref| over this table's stored entries, reading absent
    /// reference entries as 0.0. Reporting drivers use this to plot
    /// Q-value convergence against a long reference run.
    pub fn absolute_difference(&self, reference: &QTable<S, A>) -> f64 {
        self.q_values
            .iter()
            .map(|((state, action), value)| (value - reference.get(state, action)).abs())
            .sum()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Number of materialized entries.
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(S, A), f64)> {
        self.q_values.iter().map(|(key, value)| (key, *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_pairs_read_as_zero_without_materializing() {
        let table: QTable<&str, u8> = QTable::new(0.2, 0.9);
        assert_eq!(table.get(&"s", &0), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn zero_default_survives_unrelated_updates() {
        let mut table = QTable::new(0.2, 0.9);
        table.set("other", 1u8, 5.0);
        table.update("other", 0, -1.0, &"other", &[0, 1]);

        assert_eq!(table.get(&"s", &0), 0.0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn update_moves_toward_the_td_target() {
        let mut table = QTable::new(0.5, 0.99);
        table.set("next", 1u8, 1.0);
        table.set("next", 2, 2.0);

        table.update("s", 4, 0.0, &"next", &[1, 2]);

        // Q(s,4) = 0 + 0.5·(0 + 0.99·2 − 0) = 0.99
        assert!((table.get(&"s", &4) - 0.99).abs() < 1e-12);
    }

    #[test]
    fn update_treats_an_empty_next_action_set_as_terminal() {
        let mut table = QTable::new(0.5, 0.99);
        table.update("s", 0u8, 4.0, &"end", &[]);
        // Q(s,0) = 0 + 0.5·(4 + 0.99·0 − 0) = 2.0
        assert!((table.get(&"s", &0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn max_q_reads_defaults_for_unseen_actions() {
        let mut table = QTable::new(0.2, 0.9);
        table.set("s", 0u8, -3.0);
        // Action 1 was never written: its 0.0 default wins the max.
        assert_eq!(table.max_q(&"s", &[0, 1]), 0.0);
    }

    #[test]
    fn visited_states_deduplicates() {
        let mut table = QTable::new(0.2, 0.9);
        table.set("a", 0u8, 1.0);
        table.set("a", 1, 2.0);
        table.set("b", 0, 3.0);

        let mut states = table.visited_states();
        states.sort_unstable();
        assert_eq!(states, vec!["a", "b"]);
    }

    #[test]
    fn absolute_difference_sums_over_stored_entries() {
        let mut table = QTable::new(0.2, 0.9);
        table.set("a", 0u8, 1.0);
        table.set("b", 0, -2.0);

        let mut reference = QTable::new(0.2, 0.9);
        reference.set("a", 0, 0.5);
        // "b" absent from reference: reads as 0.0.

        assert!((table.absolute_difference(&reference) - 2.5).abs() < 1e-12);
    }
}
