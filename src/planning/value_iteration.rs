//! Value iteration: direct fixed point of the Bellman optimality operator.

use crate::{
    Error, Policy, Result,
    planning::{Solution, SolverConfig, ValueTable, bellman::scored_actions},
    ports::Model,
    utils::argmax,
};

/// Solves a known model by value iteration.
///
/// Repeatedly applies the Bellman optimality backup to the whole value
/// table (synchronously, from a snapshot of the previous sweep) until the
/// max residual drops below `tolerance · (1 − γ) / γ`, then extracts the
/// greedy policy once. Needs no randomness: there is no initial policy to
/// draw, and ties break first-wins like the improvement step of
/// [`crate::PolicyIterationSolver`], so both solvers agree whenever the
/// optimal policy is unique.
pub struct ValueIterationSolver<'a, M: Model> {
    model: &'a M,
    config: SolverConfig,
}

impl<'a, M: Model> ValueIterationSolver<'a, M> {
    pub fn new(model: &'a M, config: SolverConfig) -> Self {
        Self { model, config }
    }

    /// Run to a converged value table and extract the greedy policy.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDomain`] if any declared state has no legal actions
    /// - [`Error::UnknownState`] if the model leaks out of its declared set
    /// - [`Error::NonConvergence`] if the sweep cap is exceeded
    pub fn solve(&self) -> Result<Solution<M::State, M::Action>> {
        let states = self.model.states();
        let mut values = ValueTable::zeroed(states.iter().cloned());

        let threshold = self.config.threshold();
        let mut converged = false;
        let mut residual = f64::INFINITY;
        for _sweep in 0..self.config.max_sweeps() {
            let (next, sweep_residual) = optimality_backup(self.model, &self.config, &states, &values)?;
            values = next;
            residual = sweep_residual;
            if residual < threshold {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(Error::NonConvergence {
                iterations: self.config.max_sweeps(),
                residual,
            });
        }

        let mut policy = Policy::new();
        for state in &states {
            let scored = scored_actions(self.model, &values, state)?;
            let (best, _) = argmax(scored, |(_, utility)| *utility)
                .ok_or_else(|| Error::empty_domain(state))?;
            policy.insert(state.clone(), best);
        }
        Ok(Solution { policy, values })
    }
}

/// One synchronous Bellman optimality sweep: every state's value is
/// recomputed from the previous table as reward plus discounted best
/// expected utility. Returns the new table and the max residual.
fn optimality_backup<M: Model>(
    model: &M,
    config: &SolverConfig,
    states: &[M::State],
    values: &ValueTable<M::State>,
) -> Result<(ValueTable<M::State>, f64)> {
    let mut next = values.clone();
    let mut residual = 0.0f64;
    for state in states {
        let scored = scored_actions(model, values, state)?;
        if scored.is_empty() {
            return Err(Error::empty_domain(state));
        }
        let best = scored
            .iter()
            .map(|(_, utility)| *utility)
            .fold(f64::NEG_INFINITY, f64::max);
        let updated = model.reward(state) + config.discount() * best;
        residual = residual.max((updated - values.get(state)?).abs());
        next.set(state.clone(), updated);
    }
    Ok((next, residual))
}
