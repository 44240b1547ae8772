//! Holder for a state container.

use crate::core::{ObjectRef, StateMap};
use crate::error::TransitionerError;
use crate::translate::{Interpolator, Translator};
use std::sync::Arc;
use tracing::trace;

/// Stores a reference to a state map.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use transitioner::core::{ObjectRef, StateData};
/// use transitioner::holders::StateHolder;
///
/// let mut holder = StateHolder::new();
///
/// let map: ObjectRef = Arc::new(StateData::new());
/// holder.set_state(Some(map)).unwrap();
/// assert!(holder.state().is_some());
///
/// let number: ObjectRef = Arc::new(7_i64);
/// assert!(holder.set_state(Some(number)).is_err());
/// assert!(holder.state().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateHolder<T = Interpolator> {
    state: Option<Arc<dyn StateMap>>,
    translator: T,
}

impl StateHolder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Translator> StateHolder<T> {
    pub fn with_translator(translator: T) -> Self {
        Self {
            state: None,
            translator,
        }
    }

    pub fn state(&self) -> Option<&Arc<dyn StateMap>> {
        self.state.as_ref()
    }

    /// Replace the stored state.
    ///
    /// `None` clears it. Anything else must expose the mapping capability,
    /// otherwise `InvalidArgument` is returned and the old state is kept.
    pub fn set_state(&mut self, state: Option<ObjectRef>) -> Result<(), TransitionerError> {
        let state = state
            .map(|value| {
                Arc::clone(&value).into_state_map().ok_or_else(|| {
                    TransitionerError::invalid_argument(
                        self.translator.translate("Argument is not a valid map", &[]),
                        &value,
                    )
                })
            })
            .transpose()?;

        self.set_map(state);
        Ok(())
    }

    /// Replace the stored state with a value already known to be a map.
    pub fn set_map(&mut self, state: Option<Arc<dyn StateMap>>) {
        trace!(present = state.is_some(), "state replaced");
        self.state = state;
    }
}
