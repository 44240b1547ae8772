//! End-to-end transition scenarios.
//!
//! Every collaborator is a recording fake so each test can check exactly
//! which capabilities were consulted, how often, and with what.

use serde_json::json;
use std::sync::{Arc, Mutex};
use transitioner::core::{StateAwareRef, StateData, StateMap, StateSubject, TransitionId};
use transitioner::machine::{ReadableStateMachine, StateMachine, StateMachineError};
use transitioner::transitioner::{MachineTransitioner, TransitionStrategy, Transitioner};
use transitioner::TransitionerError;

#[derive(Debug)]
struct Readable {
    state: StateData,
}

impl Readable {
    fn with_status(status: &str) -> Arc<Self> {
        let mut state = StateData::new();
        state.insert("status".into(), json!(status));
        Arc::new(Self { state })
    }
}

impl StateMachine for Readable {
    fn transition(
        &self,
        _transition: Option<&TransitionId>,
    ) -> Result<Arc<dyn StateMachine>, StateMachineError> {
        Err(StateMachineError::machine("already transitioned"))
    }

    fn into_readable(self: Arc<Self>) -> Option<Arc<dyn ReadableStateMachine>> {
        Some(self)
    }
}

impl ReadableStateMachine for Readable {
    fn state(&self) -> &dyn StateMap {
        &self.state
    }
}

/// Not readable: `into_readable` keeps its default.
#[derive(Debug)]
struct WriteOnly;

impl StateMachine for WriteOnly {
    fn transition(
        &self,
        _transition: Option<&TransitionId>,
    ) -> Result<Arc<dyn StateMachine>, StateMachineError> {
        Ok(Arc::new(WriteOnly))
    }
}

/// Machine returning one scripted outcome and recording what it was asked.
#[derive(Debug)]
struct Scripted {
    outcome: Mutex<Option<Result<Arc<dyn StateMachine>, StateMachineError>>>,
    received: Mutex<Vec<Option<TransitionId>>>,
}

impl Scripted {
    fn new(outcome: Result<Arc<dyn StateMachine>, StateMachineError>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Some(outcome)),
            received: Mutex::new(Vec::new()),
        })
    }

    fn received(&self) -> Vec<Option<TransitionId>> {
        self.received.lock().unwrap().clone()
    }
}

impl StateMachine for Scripted {
    fn transition(
        &self,
        transition: Option<&TransitionId>,
    ) -> Result<Arc<dyn StateMachine>, StateMachineError> {
        self.received.lock().unwrap().push(transition.cloned());
        self.outcome
            .lock()
            .unwrap()
            .take()
            .expect("scripted machine called more than once")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hook {
    Resolve,
    Normalize,
    Build,
}

/// Strategy that records every call it receives.
#[derive(Default)]
struct Recording {
    machine: Option<Arc<dyn StateMachine>>,
    result: Option<StateAwareRef>,
    failing: Option<Hook>,
    resolved: Mutex<Vec<(StateAwareRef, Option<TransitionId>)>>,
    normalized: Mutex<Vec<(StateAwareRef, Option<TransitionId>)>>,
    built: Mutex<Vec<(StateAwareRef, Option<TransitionId>, Arc<dyn ReadableStateMachine>)>>,
}

impl Recording {
    fn resolving(machine: Arc<dyn StateMachine>) -> Self {
        Self {
            machine: Some(machine),
            result: Some(StateAwareRef::new(StateSubject::default())),
            ..Self::default()
        }
    }

    fn failing_at(hook: Hook, machine: Arc<dyn StateMachine>) -> Self {
        Self {
            failing: Some(hook),
            ..Self::resolving(machine)
        }
    }

    fn check(&self, hook: Hook) -> Result<(), TransitionerError> {
        if self.failing == Some(hook) {
            return Err(TransitionerError::invalid_argument(
                format!("{hook:?} hook refused"),
                &hook,
            ));
        }
        Ok(())
    }
}

impl TransitionStrategy for Recording {
    fn state_machine_for(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<Option<Arc<dyn StateMachine>>, TransitionerError> {
        self.resolved
            .lock()
            .unwrap()
            .push((subject.clone(), transition.cloned()));
        self.check(Hook::Resolve)?;
        Ok(self.machine.clone())
    }

    fn normalize_transition(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
    ) -> Result<Option<TransitionId>, TransitionerError> {
        self.normalized
            .lock()
            .unwrap()
            .push((subject.clone(), transition.cloned()));
        self.check(Hook::Normalize)?;
        Ok(transition.map(|t| TransitionId::new(t.as_str().to_uppercase())))
    }

    fn new_subject(
        &self,
        subject: &StateAwareRef,
        transition: Option<&TransitionId>,
        machine: Arc<dyn ReadableStateMachine>,
    ) -> Result<StateAwareRef, TransitionerError> {
        self.built
            .lock()
            .unwrap()
            .push((subject.clone(), transition.cloned(), machine));
        self.check(Hook::Build)?;
        Ok(self
            .result
            .clone()
            .unwrap_or_else(|| StateAwareRef::new(StateSubject::default())))
    }
}

fn subject() -> StateAwareRef {
    StateAwareRef::new(StateSubject::default().with("status", json!("inactive")))
}

fn activate() -> TransitionId {
    TransitionId::new("activate")
}

#[test]
fn happy_path_builds_subject_from_readable_result() {
    let resulting = Readable::with_status("active");
    let machine = Scripted::new(Ok(resulting.clone()));
    let strategy = Recording::resolving(machine.clone());
    let expected = strategy.result.clone().unwrap();
    let transitioner = MachineTransitioner::new(strategy);
    let subject = subject();

    let result = transitioner.transition(&subject, Some(&activate())).unwrap();

    assert!(result.ptr_eq(&expected));
    assert_eq!(machine.received(), vec![Some(TransitionId::new("ACTIVATE"))]);

    let strategy = transitioner.strategy();
    let resolved = strategy.resolved.lock().unwrap();
    assert_eq!(resolved.len(), 1);
    assert!(resolved[0].0.ptr_eq(&subject));
    assert_eq!(resolved[0].1, Some(activate()));

    let built = strategy.built.lock().unwrap();
    assert_eq!(built.len(), 1);
    let (built_subject, built_transition, built_machine) = &built[0];
    assert!(built_subject.ptr_eq(&subject));
    assert_eq!(built_transition, &Some(activate()));
    assert!(std::ptr::addr_eq(
        Arc::as_ptr(built_machine),
        Arc::as_ptr(&resulting)
    ));
}

#[test]
fn null_state_machine_fails_before_anything_else() {
    let transitioner = MachineTransitioner::new(Recording::default());

    let error = transitioner
        .transition(&subject(), Some(&activate()))
        .unwrap_err();

    assert!(error.is_failed());
    assert!(error.to_string().to_lowercase().contains("state machine is null"));
    assert!(error.cause().is_none());

    let strategy = transitioner.strategy();
    assert_eq!(strategy.resolved.lock().unwrap().len(), 1);
    assert!(strategy.normalized.lock().unwrap().is_empty());
    assert!(strategy.built.lock().unwrap().is_empty());
}

#[test]
fn domain_rejection_carries_subject_transition_and_cause() {
    let machine = Scripted::new(Err(StateMachineError::could_not_transition(
        "inactive subjects cannot be archived",
        Some(TransitionId::new("ACTIVATE")),
    )));
    let transitioner = MachineTransitioner::new(Recording::resolving(machine));
    let subject = subject();

    let error = transitioner
        .transition(&subject, Some(&activate()))
        .unwrap_err();

    assert!(error.is_could_not_transition());
    assert_eq!(error.to_string(), "Failed to apply \"activate\" transition");
    assert!(error.subject().unwrap().ptr_eq(&subject));
    assert_eq!(error.transition(), Some(&activate()));

    match error.cause() {
        Some(StateMachineError::CouldNotTransition {
            message,
            transition,
            ..
        }) => {
            assert_eq!(message, "inactive subjects cannot be archived");
            assert_eq!(transition.as_ref().unwrap(), "ACTIVATE");
        }
        other => panic!("unexpected cause: {other:?}"),
    }
    assert!(transitioner.strategy().built.lock().unwrap().is_empty());
}

#[test]
fn generic_machine_failure_is_wrapped_without_context() {
    let machine = Scripted::new(Err(StateMachineError::machine("transition table missing")));
    let transitioner = MachineTransitioner::new(Recording::resolving(machine));

    let error = transitioner
        .transition(&subject(), Some(&activate()))
        .unwrap_err();

    assert!(error.is_failed());
    assert_eq!(error.to_string(), "An error occurred during transition");
    assert!(error.subject().is_none());
    assert!(error.transition().is_none());
    assert!(matches!(
        error.cause(),
        Some(StateMachineError::Machine { message, .. }) if message == "transition table missing"
    ));
}

#[test]
fn unrecognised_failure_propagates_unwrapped() {
    #[derive(Debug, thiserror::Error)]
    #[error("bus unreachable")]
    struct BusDown;

    let machine = Scripted::new(Err(StateMachineError::other(BusDown)));
    let transitioner = MachineTransitioner::new(Recording::resolving(machine));

    let error = transitioner
        .transition(&subject(), Some(&activate()))
        .unwrap_err();

    match error {
        TransitionerError::Unhandled(inner) => assert!(inner.downcast_ref::<BusDown>().is_some()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_readable_result_fails_without_building_subject() {
    let machine = Scripted::new(Ok(Arc::new(WriteOnly)));
    let transitioner = MachineTransitioner::new(Recording::resolving(machine));

    let error = transitioner
        .transition(&subject(), Some(&activate()))
        .unwrap_err();

    assert!(error.is_failed());
    assert!(error.to_string().contains("not readable"));
    assert!(transitioner.strategy().built.lock().unwrap().is_empty());
}

#[test]
fn missing_transition_reaches_the_machine_as_none() {
    let machine = Scripted::new(Ok(Readable::with_status("idle")));
    let transitioner = MachineTransitioner::new(Recording::resolving(machine.clone()));

    transitioner.transition(&subject(), None).unwrap();

    assert_eq!(machine.received(), vec![None]);
    assert_eq!(transitioner.strategy().normalized.lock().unwrap()[0].1, None);
}

fn assert_refused_by(error: TransitionerError, hook: Hook) {
    match error {
        TransitionerError::InvalidArgument { message, argument } => {
            assert_eq!(message, format!("{hook:?} hook refused"));
            assert_eq!(argument, format!("{hook:?}"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolver_error_propagates_unchanged() {
    let machine = Scripted::new(Ok(Readable::with_status("active")));
    let transitioner =
        MachineTransitioner::new(Recording::failing_at(Hook::Resolve, machine.clone()));

    let error = transitioner
        .transition(&subject(), Some(&activate()))
        .unwrap_err();

    assert_refused_by(error, Hook::Resolve);
    let strategy = transitioner.strategy();
    assert_eq!(strategy.resolved.lock().unwrap().len(), 1);
    assert!(strategy.normalized.lock().unwrap().is_empty());
    assert!(strategy.built.lock().unwrap().is_empty());
    assert!(machine.received().is_empty());
}

#[test]
fn normalizer_error_propagates_unchanged() {
    let machine = Scripted::new(Ok(Readable::with_status("active")));
    let transitioner =
        MachineTransitioner::new(Recording::failing_at(Hook::Normalize, machine.clone()));

    let error = transitioner
        .transition(&subject(), Some(&activate()))
        .unwrap_err();

    assert_refused_by(error, Hook::Normalize);
    let strategy = transitioner.strategy();
    assert_eq!(strategy.normalized.lock().unwrap().len(), 1);
    assert!(strategy.built.lock().unwrap().is_empty());
    assert!(machine.received().is_empty());
}

#[test]
fn new_subject_error_propagates_unchanged() {
    let machine = Scripted::new(Ok(Readable::with_status("active")));
    let transitioner =
        MachineTransitioner::new(Recording::failing_at(Hook::Build, machine.clone()));

    let error = transitioner
        .transition(&subject(), Some(&activate()))
        .unwrap_err();

    assert_refused_by(error, Hook::Build);
    assert_eq!(machine.received(), vec![Some(TransitionId::new("ACTIVATE"))]);
    assert_eq!(transitioner.strategy().built.lock().unwrap().len(), 1);
}
