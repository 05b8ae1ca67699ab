//! Slash-command model and parser.

use super::error::ParseError;

/// A parsed slash command, e.g. `/tell bob "see you"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parse command text (without the leading `/`).
    ///
    /// Words are split the way a POSIX shell would, so quotes group words
    /// and backslashes escape the next character.
    ///
    /// # Errors
    ///
    /// * [`ParseError::UnterminatedQuoting`] on unbalanced quotes or a
    ///   trailing backslash
    /// * [`ParseError::NoWord`] when nothing is left after splitting
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let words = shlex::split(text).ok_or(ParseError::UnterminatedQuoting)?;
        let mut words = words.into_iter();
        let name = words.next().ok_or(ParseError::NoWord)?;

        Ok(Self {
            name,
            args: words.collect(),
        })
    }
}
