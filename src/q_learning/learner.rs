//! The TD learner: epsilon-greedy exploration over a Q-table.

use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Error, Policy, Result,
    ports::{Environment, Task},
    q_learning::QTable,
    utils::{argmax, build_rng},
};

/// A Q-learning agent stepping through an environment.
///
/// Owns the environment it acts in, the task supplying domain knowledge,
/// and the Q-table it learns into. All randomness (exploration draws and
/// greedy tie-break draws) flows through one `StdRng`, seedable via
/// [`TdLearner::with_seed`] for reproducible runs.
pub struct TdLearner<E, T>
where
    E: Environment,
    T: Task<State = E::State, Action = E::Action>,
{
    environment: E,
    task: T,
    q_table: QTable<E::State, E::Action>,
    exploration_rate: f64,
    rng: StdRng,
}

impl<E, T> TdLearner<E, T>
where
    E: Environment,
    T: Task<State = E::State, Action = E::Action>,
{
    /// Create a learner with the given α (learning rate, in (0, 1]),
    /// γ (discount factor, in (0, 1)), and exploration rate (in [0, 1],
    /// the probability of a uniformly random action per step).
    ///
    /// The exploration rate and the DP solvers' convergence tolerance are
    /// unrelated quantities; neither API calls its parameter "epsilon".
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when a parameter is out of
    /// range.
    pub fn new(
        environment: E,
        task: T,
        learning_rate: f64,
        discount_factor: f64,
        exploration_rate: f64,
    ) -> Result<Self> {
        if !(learning_rate > 0.0 && learning_rate <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("learning rate must lie in (0, 1], got {learning_rate}"),
            });
        }
        if !(discount_factor > 0.0 && discount_factor < 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("discount factor must lie in (0, 1), got {discount_factor}"),
            });
        }
        if !(0.0..=1.0).contains(&exploration_rate) {
            return Err(Error::InvalidConfiguration {
                message: format!("exploration rate must lie in [0, 1], got {exploration_rate}"),
            });
        }
        Ok(Self {
            environment,
            task,
            q_table: QTable::new(learning_rate, discount_factor),
            exploration_rate,
            rng: build_rng(None),
        })
    }

    /// Seed the learner's RNG for reproducible training.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self
    }

    /// Epsilon-greedy action selection for `state`.
    ///
    /// With probability `exploration_rate`, a uniformly random legal
    /// action. Otherwise the greedy action by Q-value, with ties among
    /// maximizers broken uniformly at random - deliberately not the
    /// first-wins rule of [`crate::utils::argmax`], which is reserved for
    /// final policy extraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] when `state` has no legal actions.
    pub fn select_action(&mut self, state: &E::State) -> Result<E::Action> {
        let actions = self.task.legal_actions(state);
        if actions.is_empty() {
            return Err(Error::empty_domain(state));
        }
        if self.rng.random::<f64>() < self.exploration_rate {
            return Ok(actions.choose(&mut self.rng).cloned().unwrap());
        }

        let q_values: Vec<f64> = actions
            .iter()
            .map(|action| self.q_table.get(state, action))
            .collect();
        let maxq = q_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let best: Vec<usize> = (0..actions.len())
            .filter(|&i| q_values[i] == maxq)
            .collect();
        let index = if best.len() > 1 {
            *best.choose(&mut self.rng).unwrap()
        } else {
            best[0]
        };
        Ok(actions[index].clone())
    }

    /// Run one agent-environment step, returning whether it completed an
    /// episode.
    ///
    /// Ordering is load-bearing and preserved exactly: the reward is the
    /// task's reward for the state being *left*, evaluated before the
    /// transition, and the goal test also runs on that pre-transition
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDomain`] when the current or successor state
    /// has no legal actions.
    pub fn step(&mut self) -> Result<bool> {
        let state1 = self.environment.current_state();
        let reward = self.task.reward(&state1);
        let action1 = self.select_action(&state1)?;
        self.environment.apply(&action1);
        let state2 = self.environment.current_state();

        let next_actions = self.task.legal_actions(&state2);
        if next_actions.is_empty() {
            return Err(Error::empty_domain(&state2));
        }
        self.q_table
            .update(state1.clone(), action1, reward, &state2, &next_actions);

        if self.task.reached_goal(&state1) {
            self.environment.reset();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The greedy policy induced by the current Q-table, covering every
    /// state with at least one stored entry. Ties break first-wins in the
    /// task's action order; states never visited are absent, not defaulted.
    pub fn greedy_policy(&self) -> Result<Policy<E::State, E::Action>> {
        let mut policy = Policy::new();
        for state in self.q_table.visited_states() {
            let scored: Vec<(E::Action, f64)> = self
                .task
                .legal_actions(&state)
                .into_iter()
                .map(|action| {
                    let value = self.q_table.get(&state, &action);
                    (action, value)
                })
                .collect();
            let (best, _) = argmax(scored, |(_, value)| *value)
                .ok_or_else(|| Error::empty_domain(&state))?;
            policy.insert(state, best);
        }
        Ok(policy)
    }

    /// Reset the environment to its start state (does not touch the
    /// Q-table).
    pub fn reset_environment(&mut self) {
        self.environment.reset();
    }

    /// Read access to the learned table, available after any partial run.
    pub fn q_table(&self) -> &QTable<E::State, E::Action> {
        &self.q_table
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn task(&self) -> &T {
        &self.task
    }
}
