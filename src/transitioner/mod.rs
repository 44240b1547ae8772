//! Transitioning state-aware subjects through an external state machine.
//!
//! A [`Transitioner`] takes a subject and a transition and returns the
//! transitioned subject. [`MachineTransitioner`] does so by delegating every
//! decision to a [`TransitionStrategy`]:
//!
//! 1. resolve the state machine for the subject and transition
//! 2. normalize the transition for that machine
//! 3. apply it, translating machine failures into [`TransitionerError`]s
//! 4. require the resulting machine to be readable
//! 5. let the strategy build the new subject from it
//!
//! [`TransitionerBuilder`] assembles a transitioner from closures.

mod builder;
mod error;
mod machine;
mod request;

pub use builder::{FnStrategy, TransitionerBuilder};
pub use error::BuildError;
pub use machine::MachineTransitioner;
pub use request::TransitionRequest;

use crate::core::{StateAwareRef, TransitionId};
use crate::error::TransitionerError;
use crate::machine::{ReadableStateMachine, StateMachine};
use std::sync::Arc;

/// Applies transitions to state-aware subjects.
pub trait Transitioner {
    /// Transition `subject`.
    ///
    /// The returned subject may or may not be the same object.
    fn transition(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<StateAwareRef, TransitionerError>;
}

impl<X: Transitioner + ?Sized> Transitioner for &X {
    fn transition(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<StateAwareRef, TransitionerError> {
        (**self).transition(subject, transition)
    }
}

/// Decisions a [`MachineTransitioner`] delegates.
///
/// Errors returned from any of these propagate to the caller unchanged.
pub trait TransitionStrategy {
    /// The state machine to use, or `None` if there is none.
    fn state_machine_for(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<Option<Arc<dyn StateMachine>>, TransitionerError>;

    /// Normalize `transition` before it is handed to the state machine.
    ///
    /// Independent of any [`StringableNormalizer`](crate::holders::StringableNormalizer);
    /// the default passes the transition through untouched.
    fn normalize_transition(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<Option<TransitionId>, TransitionerError> {
        let _ = subject;
        Ok(transition.cloned())
    }

    /// Build the transitioned subject from the machine that resulted.
    fn new_subject(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
        machine: Arc<dyn ReadableStateMachine>,
    ) -> Result<StateAwareRef, TransitionerError>;
}
