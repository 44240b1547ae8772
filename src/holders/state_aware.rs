//! Holder for a state-aware subject.

use crate::core::{ObjectRef, StateAwareRef};
use crate::error::TransitionerError;
use crate::translate::{Interpolator, Translator};
use tracing::trace;

/// Stores a reference to a state-aware object.
#[derive(Debug, Clone, Default)]
pub struct StateAwareHolder<T = Interpolator> {
    state_aware: Option<StateAwareRef>,
    translator: T,
}

impl StateAwareHolder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Translator> StateAwareHolder<T> {
    pub fn with_translator(translator: T) -> Self {
        Self {
            state_aware: None,
            translator,
        }
    }

    pub fn state_aware(&self) -> Option<&StateAwareRef> {
        self.state_aware.as_ref()
    }

    /// Replace the stored subject.
    ///
    /// `None` clears it. Anything else must be state-aware, otherwise
    /// `InvalidArgument` is returned and the old subject is kept.
    pub fn set_state_aware(&mut self, value: Option<ObjectRef>) -> Result<(), TransitionerError> {
        let state_aware = value
            .map(|value| {
                StateAwareRef::from_object(value.clone()).ok_or_else(|| {
                    TransitionerError::invalid_argument(
                        self.translator
                            .translate("Argument is not a state aware object", &[]),
                        &value,
                    )
                })
            })
            .transpose()?;

        self.set_subject(state_aware);
        Ok(())
    }

    /// Replace the stored subject with a handle already known to be state-aware.
    pub fn set_subject(&mut self, subject: Option<StateAwareRef>) {
        trace!(present = subject.is_some(), "state-aware subject replaced");
        self.state_aware = subject;
    }
}
