//! A subject paired with the transition requested for it.

use super::Transitioner;
use crate::core::{ObjectRef, StateAwareRef, TransitionId};
use crate::error::TransitionerError;
use crate::holders::{ScalarNormalizer, StateAwareHolder, StringableNormalizer, TransitionHolder};
use crate::translate::{Interpolator, Translator};
use serde_json::Value;

/// Carries a subject and a transition until a transitioner applies them.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use transitioner::core::{StateAwareRef, StateSubject};
/// use transitioner::transitioner::TransitionRequest;
///
/// let mut request = TransitionRequest::new();
/// request.set_transition("publish").unwrap();
/// request.set_subject_ref(Some(StateAwareRef::new(
///     StateSubject::default().with("status", json!("draft")),
/// )));
///
/// assert_eq!(request.transition().unwrap(), "publish");
/// assert!(request.subject().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitionRequest<N = ScalarNormalizer, T = Interpolator> {
    subject: StateAwareHolder<T>,
    transition: TransitionHolder<N>,
    translator: T,
}

impl TransitionRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: StringableNormalizer> TransitionRequest<N> {
    /// Request whose transitions are normalized by `normalizer`.
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            subject: StateAwareHolder::new(),
            transition: TransitionHolder::with_normalizer(normalizer),
            translator: Interpolator,
        }
    }
}

impl<T: Translator + Clone> TransitionRequest<ScalarNormalizer<T>, T> {
    /// Request whose messages, including those of its holders, go through
    /// `translator`.
    pub fn with_translator(translator: T) -> Self {
        Self {
            subject: StateAwareHolder::with_translator(translator.clone()),
            transition: TransitionHolder::with_translator(translator.clone()),
            translator,
        }
    }
}

impl<N: StringableNormalizer, T: Translator> TransitionRequest<N, T> {
    pub fn subject(&self) -> Option<&StateAwareRef> {
        self.subject.state_aware()
    }

    /// Set the subject from a loosely typed value; it must be state-aware.
    pub fn set_subject(&mut self, subject: Option<ObjectRef>) -> Result<(), TransitionerError> {
        self.subject.set_state_aware(subject)
    }

    pub fn set_subject_ref(&mut self, subject: Option<StateAwareRef>) {
        self.subject.set_subject(subject);
    }

    pub fn transition(&self) -> Option<&TransitionId> {
        self.transition.transition()
    }

    pub fn set_transition(&mut self, value: impl Into<Value>) -> Result<(), TransitionerError> {
        self.transition.set_transition(value)
    }

    /// Apply the requested transition to the requested subject.
    pub fn apply<X>(&self, transitioner: &X) -> Result<StateAwareRef, TransitionerError>
    where
        X: Transitioner + ?Sized,
    {
        let subject = self.subject().ok_or_else(|| {
            TransitionerError::invalid_argument(
                self.translator.translate("Request has no subject", &[]),
                &None::<StateAwareRef>,
            )
        })?;

        transitioner.transition(subject, self.transition())
    }
}
