//! Normalized transition identifiers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque name of a requested transition, e.g. `"activate"` or `"close"`.
///
/// Values are produced by a normalizer and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionId(String);

impl TransitionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TransitionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransitionId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TransitionId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<TransitionId> for Value {
    fn from(id: TransitionId) -> Self {
        Value::String(id.0)
    }
}

impl PartialEq<str> for TransitionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TransitionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
