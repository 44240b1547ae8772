//! The mapping capability used as a state container.

use serde_json::Value;
use std::fmt::Debug;

/// Ordered snapshot of domain state, keyed by name.
///
/// Insertion order is preserved.
pub type StateData = serde_json::Map<String, Value>;

/// Read access to a string-keyed state container.
///
/// Only `get` and `keys` are required; everything else is derived from them.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use transitioner::core::{StateData, StateMap};
///
/// let mut data = StateData::new();
/// data.insert("status".into(), json!("draft"));
///
/// let map: &dyn StateMap = &data;
/// assert!(map.has("status"));
/// assert_eq!(map.get("status"), Some(&json!("draft")));
/// assert_eq!(map.keys(), vec!["status"]);
/// ```
pub trait StateMap: Debug + Send + Sync {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Keys in container order.
    fn keys(&self) -> Vec<&str>;

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the container into an owned [`StateData`].
    fn to_data(&self) -> StateData {
        self.keys()
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_owned(), value.clone())))
            .collect()
    }
}

impl StateMap for StateData {
    fn get(&self, key: &str) -> Option<&Value> {
        serde_json::Map::get(self, key)
    }

    fn keys(&self) -> Vec<&str> {
        serde_json::Map::keys(self).map(String::as_str).collect()
    }

    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }

    fn to_data(&self) -> StateData {
        self.clone()
    }
}
