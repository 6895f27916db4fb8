//! Temporal difference learning without a model.
//!
//! This family learns action values directly from agent-environment
//! experience:
//!
//! - [`QTable`] holds the learned `(state, action) → value` estimates and
//!   applies the off-policy Q-learning update
//! - [`TdLearner`] runs individual steps under an epsilon-greedy behavior
//!   policy
//! - [`EpisodicTrainer`] drives the learner for a requested number of
//!   completed episodes and extracts the induced greedy policy
//!
//! The update target is Q-learning's max over next-state actions even
//! though the driving loop is episodic; this mirrors the system being
//! reimplemented and is deliberate (see [`QTable::update`]).

pub mod learner;
pub mod q_table;
pub mod trainer;

pub use learner::TdLearner;
pub use q_table::QTable;
pub use trainer::{EpisodicTrainer, TrainingSummary};
