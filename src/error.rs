use super::state::ProcessingState;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{value}' is not a valid value for {field}")]
    InvalidValue { field: &'static str, value: String },
    #[error("Sandwich is missing required field {0}")]
    MissingField(&'static str),
    #[error("Processing state cannot move from {from} to {to}")]
    StateRegression {
        from: ProcessingState,
        to: ProcessingState,
    },
    #[error("Sandwich is not complete, current state: {0:?}")]
    NotComplete(Option<ProcessingState>),
}
