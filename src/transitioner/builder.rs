//! Builder for closure-backed transitioners.

use super::error::BuildError;
use super::machine::MachineTransitioner;
use super::TransitionStrategy;
use crate::core::{StateAwareRef, StateMap, StateSubject, TransitionId};
use crate::error::TransitionerError;
use crate::machine::{ReadableStateMachine, StateMachine};
use crate::translate::{Interpolator, Translator};
use std::fmt;
use std::sync::Arc;

type Resolver = Box<
    dyn Fn(
            &StateAwareRef,
            Option<&TransitionId>,
        ) -> Result<Option<Arc<dyn StateMachine>>, TransitionerError>
        + Send
        + Sync,
>;

type Normalizer = Box<
    dyn Fn(&StateAwareRef, Option<&TransitionId>) -> Result<Option<TransitionId>, TransitionerError>
        + Send
        + Sync,
>;

type SubjectFactory = Box<
    dyn Fn(
            &StateAwareRef,
            Option<&TransitionId>,
            Arc<dyn ReadableStateMachine>,
        ) -> Result<StateAwareRef, TransitionerError>
        + Send
        + Sync,
>;

/// [`TransitionStrategy`] made of closures.
pub struct FnStrategy {
    resolver: Resolver,
    normalizer: Option<Normalizer>,
    subject_factory: SubjectFactory,
}

impl fmt::Debug for FnStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("normalizer", &self.normalizer.is_some())
            .finish_non_exhaustive()
    }
}

impl TransitionStrategy for FnStrategy {
    fn state_machine_for(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<Option<Arc<dyn StateMachine>>, TransitionerError> {
        (self.resolver)(subject, transition)
    }

    fn normalize_transition(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<Option<TransitionId>, TransitionerError> {
        match &self.normalizer {
            Some(normalizer) => normalizer(subject, transition),
            None => Ok(transition.cloned()),
        }
    }

    fn new_subject(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
        machine: Arc<dyn ReadableStateMachine>,
    ) -> Result<StateAwareRef, TransitionerError> {
        (self.subject_factory)(subject, transition, machine)
    }
}

/// Builder for [`MachineTransitioner`]s with a fluent API.
///
/// # Example
///
/// ```rust
/// use transitioner::transitioner::TransitionerBuilder;
///
/// let result = TransitionerBuilder::new()
///     .resolver(|_subject, _transition| Ok(None))
///     .subject_from_machine_state()
///     .build();
///
/// assert!(result.is_ok());
/// ```
pub struct TransitionerBuilder<T = Interpolator> {
    resolver: Option<Resolver>,
    normalizer: Option<Normalizer>,
    subject_factory: Option<SubjectFactory>,
    translator: T,
}

impl TransitionerBuilder {
    pub fn new() -> Self {
        Self {
            resolver: None,
            normalizer: None,
            subject_factory: None,
            translator: Interpolator,
        }
    }
}

impl Default for TransitionerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Translator> TransitionerBuilder<T> {
    /// Set how the state machine is chosen (required).
    pub fn resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(
                &StateAwareRef,
                Option<&TransitionId>,
            ) -> Result<Option<Arc<dyn StateMachine>>, TransitionerError>
            + Send
            + Sync
            + 'static,
    {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Always transition through `machine`.
    pub fn machine(self, machine: Arc<dyn StateMachine>) -> Self {
        self.resolver(move |_, _| Ok(Some(Arc::clone(&machine))))
    }

    /// Set how transitions are normalized for the machine (optional).
    pub fn normalizer<F>(mut self, normalizer: F) -> Self
    where
        F: Fn(
                &StateAwareRef,
                Option<&TransitionId>,
            ) -> Result<Option<TransitionId>, TransitionerError>
            + Send
            + Sync
            + 'static,
    {
        self.normalizer = Some(Box::new(normalizer));
        self
    }

    /// Set how the transitioned subject is built (required).
    pub fn subject_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(
                &StateAwareRef,
                Option<&TransitionId>,
                Arc<dyn ReadableStateMachine>,
            ) -> Result<StateAwareRef, TransitionerError>
            + Send
            + Sync
            + 'static,
    {
        self.subject_factory = Some(Box::new(factory));
        self
    }

    /// Build each transitioned subject as a fresh [`StateSubject`] holding a
    /// copy of the resulting machine's state.
    pub fn subject_from_machine_state(self) -> Self {
        self.subject_factory(|_, _, machine| {
            Ok(StateAwareRef::new(StateSubject::new(
                machine.state().to_data(),
            )))
        })
    }

    /// Set the message translator (optional).
    pub fn translator<U: Translator>(self, translator: U) -> TransitionerBuilder<U> {
        TransitionerBuilder {
            resolver: self.resolver,
            normalizer: self.normalizer,
            subject_factory: self.subject_factory,
            translator,
        }
    }

    /// Build the transitioner.
    /// Returns an error if a required capability is missing.
    pub fn build(self) -> Result<MachineTransitioner<FnStrategy, T>, BuildError> {
        let resolver = self.resolver.ok_or(BuildError::MissingResolver)?;
        let subject_factory = self
            .subject_factory
            .ok_or(BuildError::MissingSubjectFactory)?;

        let strategy = FnStrategy {
            resolver,
            normalizer: self.normalizer,
            subject_factory,
        };

        Ok(MachineTransitioner::with_translator(
            strategy,
            self.translator,
        ))
    }
}
