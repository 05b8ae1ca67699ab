//! Domain layer error definitions.
//!
//! The `Display` text of [`ParseError`] and [`CommandError`] is sent
//! verbatim to participants as a server notice, so it is part of the
//! client-visible protocol.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// ParticipantName too long error
    #[error("ParticipantName cannot exceed {max} characters (got {actual})")]
    ParticipantNameTooLong { max: usize, actual: usize },
}

/// Errors raised while splitting slash-command text into words
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after word splitting
    #[error("command has no word")]
    NoWord,

    /// Unbalanced quote or trailing escape character; clients see the same
    /// text as for [`ParseError::NoWord`]
    #[error("command has no word")]
    UnterminatedQuoting,
}

/// Errors raised while executing a parsed command
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments
    #[error("malformed command")]
    Malformed,

    /// `tell` destination is not registered
    #[error("user {0} not found")]
    UserNotFound(String),

    /// No command with this name
    #[error("command {0} does not exist")]
    UnknownCommand(String),
}
