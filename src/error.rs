//! Errors returned by holders and transitioners.

use crate::core::{StateAwareRef, TransitionId};
use crate::machine::StateMachineError;
use std::fmt::Debug;
use thiserror::Error;

/// Boxed error for causes whose concrete type is not known here.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by guarded setters and by transitioning.
#[derive(Debug, Error)]
pub enum TransitionerError {
    /// A setter received a value lacking the required capability.
    #[error("{message}")]
    InvalidArgument {
        message: String,
        /// Debug rendering of the rejected value.
        argument: String,
    },

    /// The transition machinery itself failed.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: Option<StateMachineError>,
    },

    /// The state machine rejected this transition for this subject.
    #[error("{message}")]
    CouldNotTransition {
        message: String,
        #[source]
        source: StateMachineError,
        subject: StateAwareRef,
        transition: Option<TransitionId>,
    },

    /// A failure the transitioner does not recognise, passed through as is.
    #[error(transparent)]
    Unhandled(BoxError),
}

impl TransitionerError {
    pub fn invalid_argument(message: impl Into<String>, argument: &dyn Debug) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            argument: format!("{argument:?}"),
        }
    }

    pub fn failed(message: impl Into<String>, source: Option<StateMachineError>) -> Self {
        Self::Failed {
            message: message.into(),
            source,
        }
    }

    /// The state machine failure this error wraps, if any.
    pub fn cause(&self) -> Option<&StateMachineError> {
        match self {
            Self::Failed { source, .. } => source.as_ref(),
            Self::CouldNotTransition { source, .. } => Some(source),
            Self::InvalidArgument { .. } | Self::Unhandled(_) => None,
        }
    }

    /// Subject of a rejected transition.
    pub fn subject(&self) -> Option<&StateAwareRef> {
        match self {
            Self::CouldNotTransition { subject, .. } => Some(subject),
            _ => None,
        }
    }

    /// Transition that was rejected, as originally requested.
    pub fn transition(&self) -> Option<&TransitionId> {
        match self {
            Self::CouldNotTransition { transition, .. } => transition.as_ref(),
            _ => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_could_not_transition(&self) -> bool {
        matches!(self, Self::CouldNotTransition { .. })
    }
}
