//! Guarded holders for state, state-aware subjects and transitions.
//!
//! Each holder starts out empty, is mutated only through its setter, and
//! either stores the new value or rejects it without touching the old one.

mod state;
mod state_aware;
mod transition;

pub use state::StateHolder;
pub use state_aware::StateAwareHolder;
pub use transition::{ScalarNormalizer, StringableNormalizer, TransitionHolder};
