//! Build errors for transitioner builders.

use thiserror::Error;

/// Errors that can occur when building a transitioner.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State machine resolver not specified. Call .resolver(f) or .machine(m) before .build()")]
    MissingResolver,

    #[error("Subject factory not specified. Call .subject_factory(f) or .subject_from_machine_state() before .build()")]
    MissingSubjectFactory,
}
