//! Dynamic programming solvers for a known model.
//!
//! Both solvers iterate the Bellman operator over a [`ValueTable`] to a
//! fixed point and extract a greedy policy:
//!
//! - [`PolicyIterationSolver`] alternates policy evaluation and greedy
//!   improvement until the policy stabilizes
//! - [`ValueIterationSolver`] iterates the Bellman optimality operator
//!   directly, then extracts the policy once
//!
//! For a model with a unique optimal policy the two produce identical
//! results; both break ties toward the earliest action in the model's
//! ordering.

pub mod bellman;
pub mod policy_iteration;
pub mod value_iteration;
pub mod value_table;

pub use bellman::expected_utility;
pub use policy_iteration::PolicyIterationSolver;
pub use value_iteration::ValueIterationSolver;
pub use value_table::ValueTable;

use serde::Serialize;

use crate::{Error, Policy, Result};

/// Default safety bound on fixed-point sweeps.
pub const DEFAULT_MAX_SWEEPS: usize = 10_000;

/// Shared configuration for the dynamic programming solvers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolverConfig {
    discount: f64,
    tolerance: f64,
    max_sweeps: usize,
}

impl SolverConfig {
    /// Create a configuration with `discount` (γ, exclusive 0..1) and
    /// `tolerance` (the Bellman-residual convergence bound, > 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when either parameter is out
    /// of range.
    pub fn new(discount: f64, tolerance: f64) -> Result<Self> {
        if !(discount > 0.0 && discount < 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("discount factor must lie in (0, 1), got {discount}"),
            });
        }
        if !(tolerance > 0.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("convergence tolerance must be positive, got {tolerance}"),
            });
        }
        Ok(Self {
            discount,
            tolerance,
            max_sweeps: DEFAULT_MAX_SWEEPS,
        })
    }

    /// Override the safety bound on fixed-point sweeps. Exceeding the bound
    /// surfaces as [`Error::NonConvergence`] rather than looping forever on
    /// a pathological discount/tolerance pair.
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_sweeps(&self) -> usize {
        self.max_sweeps
    }

    /// Residual threshold scaled for γ-discounted truncation error.
    pub(crate) fn threshold(&self) -> f64 {
        self.tolerance * (1.0 - self.discount) / self.discount
    }
}

/// The output of a solve: the greedy policy and the converged value table.
#[derive(Debug, Clone, Serialize)]
pub struct Solution<S: Eq + std::hash::Hash, A> {
    pub policy: Policy<S, A>,
    pub values: ValueTable<S>,
}
