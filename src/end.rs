use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that matches only at the end of the input, without consuming anything
pub struct EndOfInput<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C: Cursor> EndOfInput<C> {
    pub fn new() -> Self {
        EndOfInput {
            _cursor: PhantomData,
        }
    }
}

impl<C: Cursor> Default for EndOfInput<C> {
    fn default() -> Self {
        EndOfInput::new()
    }
}

impl<C: Cursor> Parser for EndOfInput<C> {
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: C) -> Outcome<C, Self::Output> {
        if cursor.eos() {
            Outcome::success(cursor, cursor, ())
        } else {
            Outcome::rejected(cursor, Expected::EndOfInput)
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input<C: Cursor>() -> EndOfInput<C> {
    EndOfInput::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{SliceCursor, Stream};

    #[test]
    fn test_end_of_empty_input() {
        let data: [i32; 0] = [];
        let cursor = SliceCursor::new(&data);

        let outcome = end_of_input().parse(cursor);
        assert!(outcome.is_success());
        assert_eq!(outcome.start(), cursor);
        assert_eq!(outcome.remaining(), cursor);
    }

    #[test]
    fn test_end_with_input_left() {
        let data = [1];
        let cursor = SliceCursor::new(&data);

        let outcome = end_of_input().parse(cursor);
        assert!(outcome.is_failure());
        assert!(outcome.rejected_by().unwrap().contains(&Expected::EndOfInput));
    }

    #[test]
    fn test_end_after_consuming() {
        let stream = Stream::from_chars("x");
        let cursor = stream.cursor();

        assert!(end_of_input().parse(cursor).is_failure());
        assert!(end_of_input().parse(cursor.next()).is_success());
    }
}
