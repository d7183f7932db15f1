use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences a parser with a continuation
///
/// The first parser runs, `next` builds the second parser from the first
/// value, the second parser runs where the first stopped, and `combine` merges
/// both values. Because `next` sees the first value, the second half of the
/// grammar can depend on what was already parsed.
///
/// Either way the outcome reports the whole concatenation's start: a failure
/// in the second half points at where the first half began.
///
/// Example:
/// ```
/// use memocomb::cursors::SliceCursor;
/// use memocomb::then::ThenExt;
/// use memocomb::{Cursor, Parser, is_token};
///
/// let data = [1, 2];
/// let parser = is_token(1).then(|_: &i32| is_token(2), |a: i32, b: i32| a + b);
///
/// let outcome = parser.parse(SliceCursor::new(&data));
/// assert_eq!(outcome.value(), Some(&3));
/// assert!(outcome.remaining().eos());
/// ```
pub struct Then<P, N, F> {
    parser: P,
    next: N,
    combine: F,
}

impl<P, N, F> Then<P, N, F> {
    pub fn new(parser: P, next: N, combine: F) -> Self {
        Then {
            parser,
            next,
            combine,
        }
    }
}

impl<P, N, Q, F, R> Parser for Then<P, N, F>
where
    P: Parser,
    N: Fn(&P::Output) -> Q,
    Q: Parser<Cursor = P::Cursor>,
    F: Fn(P::Output, Q::Output) -> R,
{
    type Cursor = P::Cursor;
    type Output = R;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output> {
        let (first, middle) = match self.parser.parse(cursor).into_result() {
            Ok(parsed) => parsed,
            Err(failure) => return failure.retype().with_start(cursor),
        };

        let second = (self.next)(&first);
        match second.parse(middle) {
            Outcome::Success {
                remaining, value, ..
            } => Outcome::success(cursor, remaining, (self.combine)(first, value)),
            Outcome::Failure { rejected_by, .. } => Outcome::failure(cursor, rejected_by),
        }
    }
}

/// Convenience function to create a Then parser
pub fn then<P, N, Q, F, R>(parser: P, next: N, combine: F) -> Then<P, N, F>
where
    P: Parser,
    N: Fn(&P::Output) -> Q,
    Q: Parser<Cursor = P::Cursor>,
    F: Fn(P::Output, Q::Output) -> R,
{
    Then::new(parser, next, combine)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt: Parser + Sized {
    fn then<N, Q, F, R>(self, next: N, combine: F) -> Then<Self, N, F>
    where
        N: Fn(&Self::Output) -> Q,
        Q: Parser<Cursor = Self::Cursor>,
        F: Fn(Self::Output, Q::Output) -> R,
    {
        Then::new(self, next, combine)
    }
}

/// Implement ThenExt for all parsers
impl<P> ThenExt for P where P: Parser {}
