//! Transitioner: state-aware subjects moved through external state machines
//!
//! This crate does not implement a state machine. It provides the pieces an
//! application needs around one:
//!
//! # Core Concepts
//!
//! - **Holders**: guarded slots for a state map, a state-aware subject and a
//!   transition. Setters check capabilities and either store or reject.
//! - **Transitioner**: resolves a state machine for a subject, applies a
//!   transition through it, and builds the transitioned subject from the
//!   resulting machine.
//! - **Errors**: invalid arguments, rejected transitions (with subject and
//!   transition attached) and generic transitioner failures are distinct
//!   [`TransitionerError`] variants.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use transitioner::core::{StateAwareRef, StateData, StateMap, StateSubject, TransitionId};
//! use transitioner::machine::{ReadableStateMachine, StateMachine, StateMachineError};
//! use transitioner::{Transitioner, TransitionerBuilder};
//!
//! #[derive(Debug)]
//! struct Light {
//!     state: StateData,
//! }
//!
//! impl Light {
//!     fn new(status: &str) -> Self {
//!         let mut state = StateData::new();
//!         state.insert("status".into(), json!(status));
//!         Self { state }
//!     }
//! }
//!
//! impl StateMachine for Light {
//!     fn transition(
//!         &self,
//!         transition: Option<&TransitionId>,
//!     ) -> Result<Arc<dyn StateMachine>, StateMachineError> {
//!         match transition.map(TransitionId::as_str) {
//!             Some("on") => Ok(Arc::new(Light::new("lit"))),
//!             Some("off") => Ok(Arc::new(Light::new("dark"))),
//!             _ => Err(StateMachineError::could_not_transition(
//!                 "unsupported",
//!                 transition.cloned(),
//!             )),
//!         }
//!     }
//!
//!     fn into_readable(self: Arc<Self>) -> Option<Arc<dyn ReadableStateMachine>> {
//!         Some(self)
//!     }
//! }
//!
//! impl ReadableStateMachine for Light {
//!     fn state(&self) -> &dyn StateMap {
//!         &self.state
//!     }
//! }
//!
//! let transitioner = TransitionerBuilder::new()
//!     .machine(Arc::new(Light::new("dark")))
//!     .subject_from_machine_state()
//!     .build()
//!     .unwrap();
//!
//! let subject = StateAwareRef::new(StateSubject::default().with("status", json!("dark")));
//! let lit = transitioner.transition(&subject, Some(&"on".into())).unwrap();
//! assert_eq!(lit.state().unwrap().get("status"), Some(&json!("lit")));
//!
//! let error = transitioner.transition(&subject, Some(&"blink".into())).unwrap_err();
//! assert!(error.is_could_not_transition());
//! ```

pub mod core;
pub mod error;
pub mod holders;
pub mod machine;
pub mod transitioner;
pub mod translate;

// Re-export commonly used types
pub use crate::core::{
    Object, StateAware, StateAwareRef, StateData, StateMap, StateSubject, TransitionId,
};
pub use error::TransitionerError;
pub use holders::{StateAwareHolder, StateHolder, TransitionHolder};
pub use machine::{ReadableStateMachine, StateMachine, StateMachineError};
pub use transitioner::{
    MachineTransitioner, TransitionRequest, TransitionStrategy, Transitioner, TransitionerBuilder,
};
