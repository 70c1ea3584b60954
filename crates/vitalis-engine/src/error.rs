use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A required vitals field is missing, non-numeric, or holds an
    /// unrecognized categorical code. Nothing is scored or assembled.
    #[error("invalid vitals input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
