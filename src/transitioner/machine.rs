//! Transitioner backed by an external state machine.

use super::{TransitionStrategy, Transitioner};
use crate::core::{StateAwareRef, TransitionId};
use crate::error::TransitionerError;
use crate::machine::StateMachineError;
use crate::translate::{Interpolator, Translator};
use tracing::{debug, trace};

/// Drives a single transition through a state machine chosen by `S`.
///
/// No state is kept between calls. The transitioner provides no
/// synchronization of its own.
#[derive(Debug, Clone)]
pub struct MachineTransitioner<S, T = Interpolator> {
    strategy: S,
    translator: T,
}

impl<S: TransitionStrategy> MachineTransitioner<S> {
    pub fn new(strategy: S) -> Self {
        Self::with_translator(strategy, Interpolator)
    }
}

impl<S: TransitionStrategy, T: Translator> MachineTransitioner<S, T> {
    pub fn with_translator(strategy: S, translator: T) -> Self {
        Self {
            strategy,
            translator,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Map a machine failure onto the transitioner's own errors.
    ///
    /// Only rejections of the transition itself carry the subject and the
    /// transition; other machine failures carry just the cause.
    fn wrap_machine_error(
        &self,
        error: StateMachineError,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> TransitionerError {
        match error {
            error @ StateMachineError::CouldNotTransition { .. } => {
                let name = transition.map(ToString::to_string).unwrap_or_default();
                TransitionerError::CouldNotTransition {
                    message: self
                        .translator
                        .translate("Failed to apply \"%1$s\" transition", &[&name]),
                    source: error,
                    subject: subject.clone(),
                    transition: transition.cloned(),
                }
            }
            error @ StateMachineError::Machine { .. } => TransitionerError::failed(
                self.translator
                    .translate("An error occurred during transition", &[]),
                Some(error),
            ),
            StateMachineError::Other(error) => TransitionerError::Unhandled(error),
        }
    }
}

impl<S: TransitionStrategy, T: Translator> Transitioner for MachineTransitioner<S, T> {
    fn transition(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<StateAwareRef, TransitionerError> {
        debug!(transition = ?transition, "resolving state machine");
        let machine = self
            .strategy
            .state_machine_for(subject, transition)?
            .ok_or_else(|| {
                TransitionerError::failed(
                    self.translator.translate("State machine is null", &[]),
                    None,
                )
            })?;

        let normalized = self.strategy.normalize_transition(subject, transition)?;
        trace!(?normalized, "applying transition");

        let resulting = machine
            .transition(normalized.as_ref())
            .map_err(|error| self.wrap_machine_error(error, subject, transition))?;

        let readable = resulting.into_readable().ok_or_else(|| {
            TransitionerError::failed(
                self.translator
                    .translate("Resulting state machine is not readable", &[]),
                None,
            )
        })?;

        debug!(transition = ?transition, "building transitioned subject");
        self.strategy.new_subject(subject, transition, readable)
    }
}
