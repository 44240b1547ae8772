//! Document Approval Workflow
//!
//! This demo moves a document through a small approval table using a
//! transitioner.
//!
//! Key concepts:
//! - The state machine lives in the application; the transitioner only drives it
//! - Transitions are normalized before reaching the machine
//! - Rejected transitions keep the subject and the requested transition
//! - Each transitioned document is a new subject built from the machine's state
//!
//! Run with: cargo run --example document_workflow

use serde_json::json;
use std::sync::Arc;
use transitioner::core::{StateAwareRef, StateData, StateMap, StateSubject, TransitionId};
use transitioner::machine::{ReadableStateMachine, StateMachine, StateMachineError};
use transitioner::{TransitionRequest, TransitionerBuilder, TransitionerError};

// (from, transition, to)
const TABLE: &[(&str, &str, &str)] = &[
    ("draft", "submit", "review"),
    ("review", "reject", "draft"),
    ("review", "approve", "approved"),
    ("approved", "publish", "published"),
];

#[derive(Debug)]
struct ApprovalMachine {
    state: StateData,
}

impl ApprovalMachine {
    fn for_subject(subject: &StateAwareRef) -> Self {
        Self {
            state: subject.state().map(|state| state.to_data()).unwrap_or_default(),
        }
    }

    fn status(&self) -> &str {
        self.state
            .get("status")
            .and_then(|status| status.as_str())
            .unwrap_or("draft")
    }
}

impl StateMachine for ApprovalMachine {
    fn transition(
        &self,
        transition: Option<&TransitionId>,
    ) -> Result<Arc<dyn StateMachine>, StateMachineError> {
        let name = transition.map(TransitionId::as_str).unwrap_or_default();
        let target = TABLE
            .iter()
            .find(|(from, via, _)| *from == self.status() && *via == name)
            .map(|(_, _, to)| *to)
            .ok_or_else(|| {
                StateMachineError::could_not_transition(
                    format!("no \"{name}\" transition from \"{}\"", self.status()),
                    transition.cloned(),
                )
            })?;

        let mut state = self.state.clone();
        state.insert("status".into(), json!(target));
        Ok(Arc::new(ApprovalMachine { state }))
    }

    fn into_readable(self: Arc<Self>) -> Option<Arc<dyn ReadableStateMachine>> {
        Some(self)
    }
}

impl ReadableStateMachine for ApprovalMachine {
    fn state(&self) -> &dyn StateMap {
        &self.state
    }
}

fn status_of(subject: &StateAwareRef) -> String {
    subject
        .state()
        .and_then(|state| state.get("status").and_then(|status| status.as_str()))
        .unwrap_or("unknown")
        .to_owned()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Document Approval Workflow ===\n");

    let transitioner = TransitionerBuilder::new()
        .resolver(|subject, _| {
            let machine: Arc<dyn StateMachine> = Arc::new(ApprovalMachine::for_subject(subject));
            Ok(Some(machine))
        })
        .normalizer(|_, transition| {
            Ok(transition.map(|t| TransitionId::new(t.as_str().trim().to_lowercase())))
        })
        .subject_from_machine_state()
        .build()?;

    let mut document = StateAwareRef::new(
        StateSubject::default()
            .with("id", json!(42))
            .with("status", json!("draft")),
    );
    println!("Document 42 starts as {}\n", status_of(&document));

    for step in ["Submit", "APPROVE", " publish "] {
        let mut request = TransitionRequest::new();
        request.set_subject_ref(Some(document.clone()));
        request.set_transition(step)?;

        document = request.apply(&transitioner)?;
        println!("  {:<10} -> {}", step.trim(), status_of(&document));
    }

    println!("\nTrying to reject a published document:");
    let mut request = TransitionRequest::new();
    request.set_subject_ref(Some(document.clone()));
    request.set_transition("reject")?;

    match request.apply(&transitioner) {
        Err(error @ TransitionerError::CouldNotTransition { .. }) => {
            println!("  {error}");
            if let Some(cause) = error.cause() {
                println!("  cause: {cause}");
            }
            println!("  subject unchanged: {}", status_of(&document));
        }
        other => println!("  unexpected outcome: {other:?}"),
    }

    Ok(())
}
