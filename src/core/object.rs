//! Runtime capability queries for loosely typed values.
//!
//! Guarded setters accept any [`Object`] and ask it which capabilities it
//! supports. A value that cannot hand out the requested capability is
//! rejected before anything is stored.

use super::aware::StateAware;
use super::map::{StateData, StateMap};
use std::fmt::Debug;
use std::sync::Arc;

/// A shared, dynamically typed value.
pub type ObjectRef = Arc<dyn Object>;

/// Base trait for values handed to guarded setters.
///
/// Every capability query defaults to "not supported". Implementors opt in
/// by returning themselves as the capability:
///
/// ```rust
/// use std::sync::Arc;
/// use transitioner::core::{Object, StateAware, StateMap};
///
/// #[derive(Debug)]
/// struct Ticket;
///
/// impl StateAware for Ticket {
///     fn state(&self) -> Option<&dyn StateMap> {
///         None
///     }
/// }
///
/// impl Object for Ticket {
///     fn into_state_aware(self: Arc<Self>) -> Option<Arc<dyn StateAware>> {
///         Some(self)
///     }
/// }
/// ```
pub trait Object: Debug + Send + Sync {
    /// Hand out this value as a state map, if it is one.
    fn into_state_map(self: Arc<Self>) -> Option<Arc<dyn StateMap>> {
        None
    }

    /// Hand out this value as a state-aware object, if it is one.
    fn into_state_aware(self: Arc<Self>) -> Option<Arc<dyn StateAware>> {
        None
    }
}

impl Object for StateData {
    fn into_state_map(self: Arc<Self>) -> Option<Arc<dyn StateMap>> {
        Some(self)
    }
}

macro_rules! plain_object {
    ($($ty:ty),* $(,)?) => {
        $(impl Object for $ty {})*
    };
}

// Scalars carry no capabilities.
plain_object!(String, &'static str, i64, u64, f64, bool, ());
