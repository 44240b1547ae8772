//! State-aware objects and the shared handle used to pass them around.

use super::map::{StateData, StateMap};
use super::object::{Object, ObjectRef};
use crate::holders::StateHolder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An object that exposes a state container.
pub trait StateAware: fmt::Debug + Send + Sync {
    /// The current state, if any has been assigned.
    fn state(&self) -> Option<&dyn StateMap>;
}

/// Shared handle to a state-aware object.
///
/// Cloning the handle never copies the object; two handles compare as the
/// same subject with [`StateAwareRef::ptr_eq`].
#[derive(Clone)]
pub struct StateAwareRef(Arc<dyn StateAware>);

impl StateAwareRef {
    /// Wrap a concrete state-aware value.
    pub fn new<T: StateAware + 'static>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Ask a loosely typed value for its state-aware capability.
    ///
    /// Returns `None` when the value does not expose one.
    pub fn from_object(value: ObjectRef) -> Option<Self> {
        value.into_state_aware().map(Self)
    }

    /// Whether both handles point at the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn as_arc(&self) -> &Arc<dyn StateAware> {
        &self.0
    }
}

impl Deref for StateAwareRef {
    type Target = dyn StateAware;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for StateAwareRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: StateAware + 'static> From<Arc<T>> for StateAwareRef {
    fn from(inner: Arc<T>) -> Self {
        Self(inner)
    }
}

/// Ready-made state-aware value backed by a [`StateHolder`].
///
/// Serializes as its plain state map.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use transitioner::core::{StateAware, StateSubject};
///
/// let subject = StateSubject::default().with("status", json!("draft"));
/// let state = subject.state().unwrap();
///
/// assert_eq!(state.get("status"), Some(&json!("draft")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateSubject {
    holder: StateHolder,
}

impl StateSubject {
    pub fn new(state: StateData) -> Self {
        let mut holder = StateHolder::new();
        holder.set_map(Some(Arc::new(state)));
        Self { holder }
    }

    /// Returns a copy of this subject with `key` set to `value`.
    ///
    /// The original state container is left untouched.
    pub fn with(self, key: impl Into<String>, value: Value) -> Self {
        let mut state = self.data();
        state.insert(key.into(), value);
        Self::new(state)
    }

    /// Owned copy of the current state, empty when none is set.
    pub fn data(&self) -> StateData {
        self.holder
            .state()
            .map(|state| state.to_data())
            .unwrap_or_default()
    }

    pub fn holder(&self) -> &StateHolder {
        &self.holder
    }

    /// Mutable access to the backing holder, for replacing the state in place.
    pub fn holder_mut(&mut self) -> &mut StateHolder {
        &mut self.holder
    }
}

impl StateAware for StateSubject {
    fn state(&self) -> Option<&dyn StateMap> {
        self.holder.state().map(|state| state.as_ref())
    }
}

impl Object for StateSubject {
    fn into_state_aware(self: Arc<Self>) -> Option<Arc<dyn StateAware>> {
        Some(self)
    }
}

impl From<StateData> for StateSubject {
    fn from(state: StateData) -> Self {
        Self::new(state)
    }
}

impl Serialize for StateSubject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StateSubject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StateData::deserialize(deserializer).map(Self::new)
    }
}
