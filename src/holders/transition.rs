//! Holder for a transition identifier.

use crate::core::TransitionId;
use crate::error::TransitionerError;
use crate::translate::{Interpolator, Translator};
use serde_json::{Number, Value};
use tracing::trace;

/// Turns a loosely typed value into a displayable transition identifier.
///
/// Implementations fail with `InvalidArgument` when the value has no
/// meaningful string form.
pub trait StringableNormalizer {
    fn normalize_stringable(&self, value: &Value) -> Result<TransitionId, TransitionerError>;
}

impl<F> StringableNormalizer for F
where
    F: Fn(&Value) -> Result<TransitionId, TransitionerError>,
{
    fn normalize_stringable(&self, value: &Value) -> Result<TransitionId, TransitionerError> {
        self(value)
    }
}

/// Accepts strings, numbers and booleans; rejects null, arrays and objects.
///
/// Floats with no fractional part render without one, so `1.0` and `1`
/// both become `"1"`. The rejection message goes through `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarNormalizer<T = Interpolator> {
    translator: T,
}

impl<T: Translator> ScalarNormalizer<T> {
    pub fn with_translator(translator: T) -> Self {
        Self { translator }
    }
}

impl<T: Translator> StringableNormalizer for ScalarNormalizer<T> {
    fn normalize_stringable(&self, value: &Value) -> Result<TransitionId, TransitionerError> {
        match value {
            Value::String(name) => Ok(TransitionId::new(name.as_str())),
            Value::Number(number) => Ok(TransitionId::new(number_name(number))),
            Value::Bool(flag) => Ok(TransitionId::new(flag.to_string())),
            other => Err(TransitionerError::invalid_argument(
                self.translator.translate("Argument is not stringable", &[]),
                other,
            )),
        }
    }
}

// Integral floats lose their ".0"; beyond 2^53 the float form is kept.
fn number_name(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if !number.is_i64()
                && !number.is_u64()
                && float.fract() == 0.0
                && float.abs() < 9_007_199_254_740_992.0 =>
        {
            format!("{}", float as i64)
        }
        _ => number.to_string(),
    }
}

/// Stores the normalized form of a transition.
///
/// # Example
///
/// ```rust
/// use transitioner::holders::TransitionHolder;
///
/// let mut holder = TransitionHolder::new();
/// holder.set_transition("activate").unwrap();
/// assert_eq!(holder.transition().unwrap(), "activate");
///
/// holder.set_transition(None::<&str>).unwrap();
/// assert!(holder.transition().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitionHolder<N = ScalarNormalizer> {
    transition: Option<TransitionId>,
    normalizer: N,
}

impl TransitionHolder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Translator> TransitionHolder<ScalarNormalizer<T>> {
    /// Holder using the default normalizer with its messages sent through
    /// `translator`.
    pub fn with_translator(translator: T) -> Self {
        Self::with_normalizer(ScalarNormalizer::with_translator(translator))
    }
}

impl<N: StringableNormalizer> TransitionHolder<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            transition: None,
            normalizer,
        }
    }

    pub fn transition(&self) -> Option<&TransitionId> {
        self.transition.as_ref()
    }

    /// Normalize and store `value`.
    ///
    /// Null is stored as `None` without consulting the normalizer. A
    /// normalizer failure is returned unchanged and the old value is kept.
    pub fn set_transition(&mut self, value: impl Into<Value>) -> Result<(), TransitionerError> {
        let value = value.into();
        let transition = if value.is_null() {
            None
        } else {
            Some(self.normalizer.normalize_stringable(&value)?)
        };

        trace!(transition = ?transition, "transition replaced");
        self.transition = transition;
        Ok(())
    }
}
