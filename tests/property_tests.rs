//! Property-based tests for the guarded holders.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::cell::Cell;
use std::sync::Arc;
use transitioner::core::{
    ObjectRef, StateAwareRef, StateData, StateMap, StateSubject, TransitionId,
};
use transitioner::holders::{StateAwareHolder, StateHolder, TransitionHolder};
use transitioner::TransitionerError;

prop_compose! {
    fn arbitrary_state()(
        entries in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..8),
    ) -> StateData {
        entries
            .into_iter()
            .map(|(key, value)| (key, json!(value)))
            .collect()
    }
}

prop_compose! {
    fn arbitrary_scalar()(variant in 0..4u8, n in any::<i64>(), s in "[a-z_]{0,12}") -> ObjectRef {
        match variant {
            0 => Arc::new(n) as ObjectRef,
            1 => Arc::new(s) as ObjectRef,
            2 => Arc::new(n % 2 == 0) as ObjectRef,
            _ => Arc::new(()) as ObjectRef,
        }
    }
}

prop_compose! {
    fn arbitrary_container()(
        items in prop::collection::vec(any::<i32>(), 0..4),
        as_object in any::<bool>(),
    ) -> Value {
        if as_object {
            json!({ "items": items })
        } else {
            json!(items)
        }
    }
}

proptest! {
    #[test]
    fn set_state_stores_the_same_map(state in arbitrary_state()) {
        let map = Arc::new(state);
        let mut holder = StateHolder::new();

        holder.set_state(Some(map.clone() as ObjectRef)).unwrap();

        let stored = holder.state().unwrap();
        prop_assert!(std::ptr::addr_eq(Arc::as_ptr(stored), Arc::as_ptr(&map)));
        prop_assert_eq!(stored.to_data(), (*map).clone());
    }

    #[test]
    fn set_state_none_always_succeeds(state in arbitrary_state()) {
        let mut holder = StateHolder::new();
        holder.set_state(Some(Arc::new(state) as ObjectRef)).unwrap();

        prop_assert!(holder.set_state(None).is_ok());
        prop_assert!(holder.state().is_none());
    }

    #[test]
    fn set_state_rejects_without_mutation(state in arbitrary_state(), bad in arbitrary_scalar()) {
        let map = Arc::new(state);
        let mut holder = StateHolder::new();
        holder.set_state(Some(map.clone() as ObjectRef)).unwrap();

        let error = holder.set_state(Some(bad)).unwrap_err();

        let is_invalid = matches!(error, TransitionerError::InvalidArgument { .. });
        prop_assert!(is_invalid);
        prop_assert!(std::ptr::addr_eq(Arc::as_ptr(holder.state().unwrap()), Arc::as_ptr(&map)));
    }

    #[test]
    fn set_state_aware_rejects_without_mutation(
        state in arbitrary_state(),
        bad in arbitrary_scalar(),
    ) {
        let subject = StateAwareRef::new(StateSubject::new(state.clone()));
        let mut holder = StateAwareHolder::new();
        holder.set_subject(Some(subject.clone()));

        prop_assert!(holder.set_state_aware(Some(bad)).is_err());
        prop_assert!(holder.set_state_aware(Some(Arc::new(state) as ObjectRef)).is_err());
        prop_assert!(holder.state_aware().unwrap().ptr_eq(&subject));
    }

    #[test]
    fn set_state_aware_stores_the_same_subject(state in arbitrary_state()) {
        let subject = Arc::new(StateSubject::new(state));
        let mut holder = StateAwareHolder::new();

        holder.set_state_aware(Some(subject.clone() as ObjectRef)).unwrap();

        let stored = holder.state_aware().unwrap();
        prop_assert!(std::ptr::addr_eq(Arc::as_ptr(stored.as_arc()), Arc::as_ptr(&subject)));
    }

    #[test]
    fn set_transition_normalizes_exactly_once(name in "[a-z]{1,12}", suffix in "[0-9]{1,4}") {
        let calls = Cell::new(0);
        let mut holder = TransitionHolder::with_normalizer(|value: &Value| {
            calls.set(calls.get() + 1);
            Ok::<_, TransitionerError>(TransitionId::new(format!(
                "{}-{}",
                value.as_str().unwrap_or_default(),
                suffix
            )))
        });

        holder.set_transition(name.as_str()).unwrap();

        prop_assert_eq!(calls.get(), 1);
        let expected = format!("{name}-{suffix}");
        prop_assert_eq!(holder.transition().unwrap().as_str(), expected.as_str());
    }

    #[test]
    fn set_transition_null_never_normalizes(name in "[a-z]{1,12}") {
        let calls = Cell::new(0);
        let mut holder = TransitionHolder::with_normalizer(|value: &Value| {
            calls.set(calls.get() + 1);
            Ok::<_, TransitionerError>(TransitionId::new(value.as_str().unwrap_or_default()))
        });
        holder.set_transition(name.as_str()).unwrap();

        holder.set_transition(Value::Null).unwrap();

        prop_assert_eq!(calls.get(), 1);
        prop_assert!(holder.transition().is_none());
    }

    #[test]
    fn failed_normalization_keeps_previous(name in "[a-z]{1,12}", bad in arbitrary_container()) {
        let mut holder = TransitionHolder::new();
        holder.set_transition(name.as_str()).unwrap();

        let error = holder.set_transition(bad).unwrap_err();

        prop_assert!(error.is_invalid_argument());
        prop_assert_eq!(holder.transition().unwrap().as_str(), name.as_str());
    }
}
