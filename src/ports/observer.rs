//! Observer port - abstraction for training observation.
//!
//! The episodic trainer reports progress through this trait instead of
//! logging or printing, so reporting layers can collect convergence data
//! (policy and Q-value differences against a reference run) without the
//! core doing any I/O.

use std::fmt;
use std::hash::Hash;

use crate::{Result, q_learning::QTable};

/// Observer trait for monitoring a training run.
///
/// All methods default to no-ops; implementors override only the events
/// they care about.
///
/// # Event sequence
///
/// 1. `on_training_start(total_episodes)` - once, before the first step
/// 2. `on_episode_end(episode, steps, q_table)` - after each completed episode
/// 3. `on_training_end(total_steps)` - once, after the requested episode
///    count completes
pub trait TrainingObserver<S, A>
where
    S: Clone + Eq + Hash + fmt::Debug,
    A: Clone + Eq + Hash + fmt::Debug,
{
    /// Called when training starts.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode completes.
    ///
    /// `episode` is the 1-based count of completed episodes, `steps` the
    /// number of steps this episode took. `q_table` is a read-only snapshot
    /// of the learner's table at this point in training.
    fn on_episode_end(&mut self, _episode: usize, _steps: usize, _q_table: &QTable<S, A>) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self, _total_steps: usize) -> Result<()> {
        Ok(())
    }
}

/// The do-nothing observer, used when no reporting is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl<S, A> TrainingObserver<S, A> for NullObserver
where
    S: Clone + Eq + Hash + fmt::Debug,
    A: Clone + Eq + Hash + fmt::Debug,
{
}
