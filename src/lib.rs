//! Tabular solvers for finite Markov decision problems.
//!
//! This crate provides:
//! - Dynamic programming solvers (policy iteration, value iteration) that
//!   plan from a known transition model
//! - A temporal difference learner (Q-learning with epsilon-greedy
//!   exploration) that learns from experience without a model
//! - The shared policy and value-table bookkeeping both families sit on
//!
//! The domain supplying rewards, transitions, and goal signals is abstracted
//! behind the traits in [`ports`]; the crate never inspects state or action
//! structure beyond identity.

pub mod error;
pub mod planning;
pub mod policy;
pub mod ports;
pub mod q_learning;
pub mod utils;

pub use error::{Error, Result};
pub use planning::{
    PolicyIterationSolver, Solution, SolverConfig, ValueIterationSolver, ValueTable,
    expected_utility,
};
pub use policy::Policy;
pub use ports::{Environment, Model, NullObserver, Task, TrainingObserver};
pub use q_learning::{EpisodicTrainer, QTable, TdLearner, TrainingSummary};
