//! Error types for the tabular-rl crate

use thiserror::Error;

/// Main error type for the tabular-rl crate
///
/// Every variant signals an unrecoverable condition at the point it is
/// raised: either a model-definition bug ([`Error::EmptyDomain`],
/// [`Error::UnknownState`]), a misconfigured solver
/// ([`Error::InvalidConfiguration`]), or a fixed-point loop that ran out of
/// its safety budget ([`Error::NonConvergence`]).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("state {state} has no legal actions")]
    EmptyDomain { state: String },

    #[error("state {state} is outside the declared state set")]
    UnknownState { state: String },

    #[error("no convergence after {iterations} sweeps (last residual {residual})")]
    NonConvergence { iterations: usize, residual: f64 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl Error {
    /// Build an [`Error::EmptyDomain`] from any debuggable state value.
    pub(crate) fn empty_domain<S: std::fmt::Debug>(state: &S) -> Self {
        Error::EmptyDomain {
            state: format!("{state:?}"),
        }
    }

    /// Build an [`Error::UnknownState`] from any debuggable state value.
    pub(crate) fn unknown_state<S: std::fmt::Debug>(state: &S) -> Self {
        Error::UnknownState {
            state: format!("{state:?}"),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
