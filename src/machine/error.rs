//! Failures reported by state machines.

use crate::core::TransitionId;
use crate::error::BoxError;
use thiserror::Error;

/// Errors a [`StateMachine`](super::StateMachine) reports from `transition`.
///
/// The variant, never the message text, decides how a transitioner
/// translates the failure.
#[derive(Debug, Error)]
pub enum StateMachineError {
    /// The transition is not valid from the machine's current state.
    #[error("{message}")]
    CouldNotTransition {
        message: String,
        transition: Option<TransitionId>,
        #[source]
        source: Option<BoxError>,
    },

    /// The machine failed for a reason unrelated to the requested transition.
    #[error("{message}")]
    Machine {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Anything else; transitioners pass it through unwrapped.
    #[error(transparent)]
    Other(BoxError),
}

impl StateMachineError {
    pub fn could_not_transition(
        message: impl Into<String>,
        transition: Option<TransitionId>,
    ) -> Self {
        Self::CouldNotTransition {
            message: message.into(),
            transition,
            source: None,
        }
    }

    pub fn machine(message: impl Into<String>) -> Self {
        Self::Machine {
            message: message.into(),
            source: None,
        }
    }

    pub fn other(error: impl Into<BoxError>) -> Self {
        Self::Other(error.into())
    }

    /// Attach an underlying cause. Has no effect on [`StateMachineError::Other`].
    pub fn with_source(mut self, cause: impl Into<BoxError>) -> Self {
        match &mut self {
            Self::CouldNotTransition { source, .. } | Self::Machine { source, .. } => {
                *source = Some(cause.into());
            }
            Self::Other(_) => {}
        }
        self
    }

    pub fn is_could_not_transition(&self) -> bool {
        matches!(self, Self::CouldNotTransition { .. })
    }
}
