use crate::cursor::Cursor;
use crate::expected::{Expected, ExpectedSet};
use thiserror::Error;

/// Result of one parse attempt
///
/// Both variants remember the cursor the attempt started from. A failure never
/// consumes input, so its remaining cursor is its start cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<C: Cursor, R> {
    Success {
        start: C,
        remaining: C,
        value: R,
    },
    Failure {
        start: C,
        rejected_by: ExpectedSet<C::Element>,
    },
}

impl<C: Cursor, R> Outcome<C, R> {
    pub fn success(start: C, remaining: C, value: R) -> Self {
        Outcome::Success {
            start,
            remaining,
            value,
        }
    }

    pub fn failure(start: C, rejected_by: ExpectedSet<C::Element>) -> Self {
        Outcome::Failure { start, rejected_by }
    }

    /// Failure with a single rejector
    pub fn rejected(start: C, expected: Expected<C::Element>) -> Self {
        Outcome::failure(start, ExpectedSet::single(expected))
    }

    pub fn start(&self) -> C {
        match self {
            Outcome::Success { start, .. } | Outcome::Failure { start, .. } => *start,
        }
    }

    pub fn remaining(&self) -> C {
        match self {
            Outcome::Success { remaining, .. } => *remaining,
            Outcome::Failure { start, .. } => *start,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    pub fn value(&self) -> Option<&R> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<R> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn rejected_by(&self) -> Option<&ExpectedSet<C::Element>> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { rejected_by, .. } => Some(rejected_by),
        }
    }

    /// Transform the value of a success; failures pass through re-typed
    pub fn map_value<U>(self, f: impl FnOnce(R) -> U) -> Outcome<C, U> {
        match self {
            Outcome::Success {
                start,
                remaining,
                value,
            } => Outcome::success(start, remaining, f(value)),
            Outcome::Failure { start, rejected_by } => Outcome::failure(start, rejected_by),
        }
    }

    /// Re-anchor the outcome so it reports `start` as where the attempt began
    ///
    /// Used by combinators that run children part-way into their own input, so
    /// that success and failure both point at the combinator's own start.
    pub fn with_start(self, start: C) -> Self {
        match self {
            Outcome::Success {
                remaining, value, ..
            } => Outcome::success(start, remaining, value),
            Outcome::Failure { rejected_by, .. } => Outcome::failure(start, rejected_by),
        }
    }

    /// Convert into a `Result` so callers can use `?`
    pub fn into_result(self) -> Result<(R, C), ParseFailure<C>> {
        match self {
            Outcome::Success {
                remaining, value, ..
            } => Ok((value, remaining)),
            Outcome::Failure { start, rejected_by } => Err(ParseFailure { start, rejected_by }),
        }
    }

    /// Human-readable diagnostic for a failure, e.g. `expected one of {1, 2} at position 0`
    pub fn describe_failure(&self) -> Option<String> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { start, rejected_by } => Some(format!(
                "{} at position {}",
                rejected_by,
                start.position()
            )),
        }
    }
}

/// A failed [`Outcome`] as an error value
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{rejected_by} at position {}", .start.position())]
pub struct ParseFailure<C: Cursor> {
    pub start: C,
    pub rejected_by: ExpectedSet<C::Element>,
}

impl<C: Cursor> ParseFailure<C> {
    /// Back into an [`Outcome`] of any value type
    pub fn retype<R>(self) -> Outcome<C, R> {
        Outcome::failure(self.start, self.rejected_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SliceCursor;

    #[test]
    fn test_failure_remaining_is_start() {
        let data = [1, 2];
        let cursor = SliceCursor::new(&data);
        let outcome: Outcome<_, i32> = Outcome::rejected(cursor, Expected::Token(3));

        assert!(outcome.is_failure());
        assert_eq!(outcome.start(), cursor);
        assert_eq!(outcome.remaining(), cursor);
        assert_eq!(outcome.value(), None);
        assert!(outcome.rejected_by().unwrap().expects_token(&3));
    }

    #[test]
    fn test_map_value() {
        let data = [1, 2];
        let cursor = SliceCursor::new(&data);
        let outcome = Outcome::success(cursor, cursor.next(), 20).map_value(|v| v + 1);

        assert_eq!(outcome.value(), Some(&21));
        assert_eq!(outcome.remaining(), cursor.next());

        let failed: Outcome<_, i32> = Outcome::rejected(cursor, Expected::EndOfInput);
        let failed = failed.map_value(|v| v.to_string());
        assert!(failed.is_failure());
    }

    #[test]
    fn test_with_start() {
        let data = [1, 2, 3];
        let cursor = SliceCursor::new(&data);
        let middle = cursor.next();

        let success = Outcome::success(middle, middle.next(), 'x').with_start(cursor);
        assert_eq!(success.start(), cursor);
        assert_eq!(success.remaining(), middle.next());

        let failure: Outcome<_, char> = Outcome::rejected(middle, Expected::Token(9));
        let failure = failure.with_start(cursor);
        assert_eq!(failure.start(), cursor);
        assert_eq!(failure.remaining(), cursor);
    }

    #[test]
    fn test_into_result() {
        let data = [5];
        let cursor = SliceCursor::new(&data);

        let (value, rest) = Outcome::success(cursor, cursor.next(), 5).into_result().unwrap();
        assert_eq!(value, 5);
        assert!(rest.eos());

        let failure: Outcome<_, i32> = Outcome::rejected(cursor, Expected::Token(6));
        let error = failure.into_result().unwrap_err();
        assert_eq!(error.start, cursor);
        assert_eq!(error.to_string(), "expected 6 at position 0");
    }

    #[test]
    fn test_retype_failure() {
        let data = [5];
        let cursor = SliceCursor::new(&data);

        let failure: Outcome<_, i32> = Outcome::rejected(cursor, Expected::Token(6));
        let retyped: Outcome<_, String> = failure.into_result().unwrap_err().retype();
        assert_eq!(retyped.start(), cursor);
        assert!(retyped.rejected_by().unwrap().expects_token(&6));
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        fn render(error: &dyn std::error::Error) -> String {
            error.to_string()
        }

        let data = ['a'];
        let cursor = SliceCursor::new(&data);
        let failure: Outcome<_, char> = Outcome::rejected(cursor, Expected::EndOfInput);
        let error = failure.into_result().unwrap_err();
        assert_eq!(render(&error), "expected end of input at position 0");
    }

    #[test]
    fn test_describe_failure() {
        let data = [3];
        let cursor = SliceCursor::new(&data);
        let rejected_by: ExpectedSet<i32> = [Expected::Token(1), Expected::Token(2)]
            .into_iter()
            .collect();

        let failure: Outcome<_, i32> = Outcome::failure(cursor, rejected_by);
        assert_eq!(
            failure.describe_failure().unwrap(),
            "expected one of {1, 2} at position 0"
        );
        assert_eq!(Outcome::success(cursor, cursor, 0).describe_failure(), None);
    }
}
