//! One-step-lookahead expected utility under a known model.

use crate::{Result, planning::ValueTable, ports::Model};

/// Expected utility of taking `action` in `state`:
/// Σ over `(p, s')` in `model.transitions(state, action)` of `p · values[s']`.
///
/// # Errors
///
/// Returns [`crate::Error::UnknownState`] when the model produces a
/// successor outside the declared state set. That is a model-definition
/// bug, never silently valued at zero.
pub fn expected_utility<M: Model>(
    model: &M,
    values: &ValueTable<M::State>,
    state: &M::State,
    action: &M::Action,
) -> Result<f64> {
    let mut total = 0.0;
    for (probability, successor) in model.transitions(state, action) {
        total += probability * values.get(&successor)?;
    }
    Ok(total)
}

/// Every legal action in `state` paired with its expected utility, in the
/// model's action order. Both solvers feed this to the first-wins argmax.
pub(crate) fn scored_actions<M: Model>(
    model: &M,
    values: &ValueTable<M::State>,
    state: &M::State,
) -> Result<Vec<(M::Action, f64)>> {
    let mut scored = Vec::new();
    for action in model.legal_actions(state) {
        let utility = expected_utility(model, values, state, &action)?;
        scored.push((action, utility));
    }
    Ok(scored)
}
