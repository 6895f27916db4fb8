//! Ports (trait boundaries) for the domain collaborators.
//!
//! The solvers in this crate never define rewards, transitions, or goals
//! themselves; the domain supplies them by implementing these traits.
//! Following hexagonal architecture, the traits are owned by the solver core
//! and implemented by adapters outside it.

pub mod environment;
pub mod model;
pub mod observer;
pub mod task;

pub use environment::Environment;
pub use model::Model;
pub use observer::{NullObserver, TrainingObserver};
pub use task::Task;
