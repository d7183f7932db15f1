use crate::error::MemocombError;
use std::fmt;

/// Generic cursor trait for parser combinators
///
/// A cursor represents a position in a sequence of tokens that can be advanced
/// and queried. Cursors are cheap `Copy` handles: holding on to one and reading
/// from it again later always observes the same token, which is what lets
/// alternatives and repetitions backtrack freely.
pub trait Cursor: Copy + PartialEq + fmt::Debug {
    /// The type of tokens this cursor iterates over
    type Element: Clone + PartialEq + fmt::Debug;

    /// Get the token at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the sequence.
    /// Combinators check [`Cursor::eos`] first, so this error only surfaces on
    /// direct misuse.
    fn value(&self) -> Result<Self::Element, MemocombError>;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool;

    /// Advance the cursor to the next token
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Advance the cursor to the next token, returning an error if at end
    ///
    /// Unlike `next()`, this method returns an error if called when already
    /// at the end of the sequence, or if advancing lands on the end
    fn try_next(self) -> Result<Self, MemocombError> {
        if self.eos() {
            return Err(MemocombError::AlreadyAtEndOfInput {
                position: self.position(),
            });
        }
        let next = self.next();
        if next.eos() {
            Err(MemocombError::UnexpectedEndOfInput {
                position: next.position(),
            })
        } else {
            Ok(next)
        }
    }

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors this is the length of the sequence
    fn position(&self) -> usize;
}
