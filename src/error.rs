use thiserror::Error;

/// Conditions raised by misusing a cursor or building an invalid combinator
///
/// Ordinary parse failures are not errors: they are returned as
/// [`Outcome::Failure`](crate::Outcome::Failure) and consumed by the
/// surrounding combinators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemocombError {
    #[error("cannot read value at end of input (position {position})")]
    CannotReadValueAtEof { position: usize },

    #[error("already at end of input (position {position})")]
    AlreadyAtEndOfInput { position: usize },

    #[error("unexpected end of input (position {position})")]
    UnexpectedEndOfInput { position: usize },

    #[error("an alternation needs at least one candidate")]
    NoAlternatives,
}

impl MemocombError {
    /// Returns the position where this error occurred, if it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            MemocombError::CannotReadValueAtEof { position }
            | MemocombError::AlreadyAtEndOfInput { position }
            | MemocombError::UnexpectedEndOfInput { position } => Some(*position),
            MemocombError::NoAlternatives => None,
        }
    }
}
