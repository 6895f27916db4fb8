//! Episodic training driver for the TD learner.

use serde::Serialize;

use crate::{
    Policy, Result,
    ports::{Environment, NullObserver, Task, TrainingObserver},
    q_learning::{QTable, TdLearner},
};

/// What a training call did: completed episodes and total steps taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingSummary {
    pub episodes: usize,
    pub steps: usize,
}

/// Drives a [`TdLearner`] until a requested number of completed episodes.
///
/// The budget counts episodes, not steps: training continues until the
/// goal has been reached exactly `episodes` times, however many steps that
/// requires. Progress is reported through a
/// [`TrainingObserver`](crate::ports::TrainingObserver); the learner and
/// its Q-table stay readable between calls so drivers can compare partial
/// runs against a reference.
pub struct EpisodicTrainer<E, T>
where
    E: Environment,
    T: Task<State = E::State, Action = E::Action>,
{
    learner: TdLearner<E, T>,
}

impl<E, T> EpisodicTrainer<E, T>
where
    E: Environment,
    T: Task<State = E::State, Action = E::Action>,
{
    pub fn new(learner: TdLearner<E, T>) -> Self {
        Self { learner }
    }

    /// Train for `episodes` completed episodes with no observation.
    pub fn train(&mut self, episodes: usize) -> Result<TrainingSummary> {
        self.train_with_observer(episodes, &mut NullObserver)
    }

    /// Train for `episodes` completed episodes, reporting progress to
    /// `observer` after each completion.
    ///
    /// The environment is reset once at the start of the call; afterwards
    /// only goal completions reset it, so a second call continues learning
    /// into the same Q-table.
    pub fn train_with_observer(
        &mut self,
        episodes: usize,
        observer: &mut dyn TrainingObserver<E::State, E::Action>,
    ) -> Result<TrainingSummary> {
        observer.on_training_start(episodes)?;
        self.learner.reset_environment();

        let mut completed = 0;
        let mut total_steps = 0;
        let mut episode_steps = 0;
        while completed < episodes {
            total_steps += 1;
            episode_steps += 1;
            if self.learner.step()? {
                completed += 1;
                observer.on_episode_end(completed, episode_steps, self.learner.q_table())?;
                episode_steps = 0;
            }
        }

        observer.on_training_end(total_steps)?;
        Ok(TrainingSummary {
            episodes: completed,
            steps: total_steps,
        })
    }

    /// The greedy policy induced by the learner's current Q-table.
    pub fn greedy_policy(&self) -> Result<Policy<E::State, E::Action>> {
        self.learner.greedy_policy()
    }

    /// Read access to the learned table after any partial run.
    pub fn q_table(&self) -> &QTable<E::State, E::Action> {
        self.learner.q_table()
    }

    pub fn learner(&self) -> &TdLearner<E, T> {
        &self.learner
    }

    pub fn into_learner(self) -> TdLearner<E, T> {
        self.learner
    }
}
