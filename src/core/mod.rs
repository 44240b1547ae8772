//! Capability traits and value types shared by every other module.
//!
//! - [`Object`]: runtime capability queries used by guarded setters
//! - [`StateMap`] / [`StateData`]: the mapping capability and its default container
//! - [`StateAware`] / [`StateAwareRef`]: objects exposing a state container
//! - [`TransitionId`]: normalized transition names

mod aware;
mod map;
mod object;
mod transition;

pub use aware::{StateAware, StateAwareRef, StateSubject};
pub use map::{StateData, StateMap};
pub use object::{Object, ObjectRef};
pub use transition::TransitionId;
