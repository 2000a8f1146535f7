//! Error types for guard configuration and data loading.

use thiserror::Error;

use crate::brain::StateType;

/// Setup defects in a guard's state machine.
///
/// These are raised while a brain is being built or when a state asks for a
/// state that was never registered. They are never retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AiError {
    /// Two states were registered under the same identifier.
    #[error("State {0:?} is already registered")]
    DuplicateState(StateType),

    /// A transition named a state that is not registered.
    #[error("State {0:?} is not registered")]
    UnknownState(StateType),
}

/// Errors that can occur when loading guard definition files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}
