use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// This is [`Then`](crate::then::Then) with a second parser that does not
/// depend on the first value, and it fails the same way: a failure of the
/// second parser is reported from where the first one started.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// Example:
/// ```
/// use memocomb::and::AndExt;
/// use memocomb::cursors::Stream;
/// use memocomb::{Parser, is_token};
///
/// let stream = Stream::from_chars("a=1");
/// let ((name, _), value) = is_token('a')
///     .and(is_token('='))
///     .and(is_token('1'))
///     .parse(stream.cursor())
///     .into_value()
///     .unwrap();
/// assert_eq!(name, 'a');
/// assert_eq!(value, '1');
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output> {
        let (result1, middle) = match self.parser1.parse(cursor).into_result() {
            Ok(parsed) => parsed,
            Err(failure) => return failure.retype().with_start(cursor),
        };
        self.parser2
            .parse(middle)
            .map_value(|result2| (result1, result2))
            .with_start(cursor)
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
