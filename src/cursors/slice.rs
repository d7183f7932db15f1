use crate::cursor::Cursor;
use crate::error::MemocombError;
use std::fmt;

/// Zero-copy cursor over tokens that are already in memory
///
/// Nothing is pulled or buffered: every position is just an index into the
/// borrowed slice.
pub enum SliceCursor<'code, T> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T> SliceCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::EndOfFile { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    /// Get the source data without consuming the cursor
    pub fn source(&self) -> &'code [T] {
        match self {
            SliceCursor::Valid { data, .. } => *data,
            SliceCursor::EndOfFile { data } => *data,
        }
    }

    /// The tokens from this position to the end of the source
    pub fn rest(&self) -> &'code [T] {
        match self {
            SliceCursor::Valid { data, position } => &data[*position..],
            SliceCursor::EndOfFile { .. } => &[],
        }
    }

    fn offset(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::EndOfFile { data } => data.len(),
        }
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    /// Cursors are equal when they point into the same slice at the same position
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source(), other.source()) && self.offset() == other.offset()
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceCursor::Valid { data, position } => f
                .debug_struct("Valid")
                .field("position", position)
                .field("len", &data.len())
                .finish(),
            SliceCursor::EndOfFile { data } => f
                .debug_struct("EndOfFile")
                .field("len", &data.len())
                .finish(),
        }
    }
}

impl<T> Cursor for SliceCursor<'_, T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Element = T;

    fn value(&self) -> Result<Self::Element, MemocombError> {
        match self {
            SliceCursor::Valid { data, position } => Ok(data[*position].clone()),
            SliceCursor::EndOfFile { data } => Err(MemocombError::CannotReadValueAtEof {
                position: data.len(),
            }),
        }
    }

    fn eos(&self) -> bool {
        matches!(self, SliceCursor::EndOfFile { .. })
    }

    fn next(self) -> Self {
        match self {
            SliceCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    SliceCursor::EndOfFile { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            SliceCursor::EndOfFile { data } => SliceCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        self.offset()
    }
}
