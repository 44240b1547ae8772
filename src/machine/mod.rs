//! State machine collaborators.
//!
//! This crate does not implement a state machine. It consumes one through
//! [`StateMachine`] and requires the machine that results from a transition
//! to also be a [`ReadableStateMachine`], so that its state can be read back.

mod error;

pub use error::StateMachineError;

use crate::core::{StateMap, TransitionId};
use std::fmt::Debug;
use std::sync::Arc;

/// A machine that accepts transitions.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use serde_json::json;
/// use transitioner::core::{StateData, StateMap, TransitionId};
/// use transitioner::machine::{ReadableStateMachine, StateMachine, StateMachineError};
///
/// #[derive(Debug)]
/// struct Door {
///     state: StateData,
/// }
///
/// impl Door {
///     fn new(status: &str) -> Self {
///         let mut state = StateData::new();
///         state.insert("status".into(), json!(status));
///         Self { state }
///     }
/// }
///
/// impl StateMachine for Door {
///     fn transition(
///         &self,
///         transition: Option<&TransitionId>,
///     ) -> Result<Arc<dyn StateMachine>, StateMachineError> {
///         match transition.map(TransitionId::as_str) {
///             Some("open") => Ok(Arc::new(Door::new("open"))),
///             Some("close") => Ok(Arc::new(Door::new("closed"))),
///             _ => Err(StateMachineError::could_not_transition(
///                 "unknown transition",
///                 transition.cloned(),
///             )),
///         }
///     }
///
///     fn into_readable(self: Arc<Self>) -> Option<Arc<dyn ReadableStateMachine>> {
///         Some(self)
///     }
/// }
///
/// impl ReadableStateMachine for Door {
///     fn state(&self) -> &dyn StateMap {
///         &self.state
///     }
/// }
///
/// let door: Arc<dyn StateMachine> = Arc::new(Door::new("closed"));
/// let opened = door.transition(Some(&"open".into())).unwrap();
/// let readable = opened.into_readable().unwrap();
/// assert_eq!(readable.state().get("status"), Some(&json!("open")));
/// ```
pub trait StateMachine: Debug + Send + Sync {
    /// Apply `transition`, returning the machine that results from it.
    ///
    /// The returned machine may or may not be `self`.
    fn transition(
        &self,
        transition: Option<&TransitionId>,
    ) -> Result<Arc<dyn StateMachine>, StateMachineError>;

    /// Hand out this machine as a readable one, if it is.
    fn into_readable(self: Arc<Self>) -> Option<Arc<dyn ReadableStateMachine>> {
        None
    }
}

/// A state machine whose current state can be read.
pub trait ReadableStateMachine: StateMachine {
    fn state(&self) -> &dyn StateMap;
}
