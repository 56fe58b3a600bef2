use fittrack_types::trainings::ActivityKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrainingError {
    #[error("unknown workout type `{0}`")]
    UnknownActivityKind(String),
    #[error("invalid {kind} parameters: {reason}")]
    InvalidParameters { kind: ActivityKind, reason: String },
    #[error("{kind} {field} must be non-zero")]
    ArithmeticDegenerate {
        kind: ActivityKind,
        field: &'static str,
    },
}
