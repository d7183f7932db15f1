use crate::cursor::Cursor;
use crate::outcome::Outcome;

/// Core parser trait for parser combinators
///
/// Parsers hold only their configuration, so one parser value can be run any
/// number of times, from any cursor, and shared between threads whenever its
/// closures allow it.
pub trait Parser {
    type Cursor: Cursor;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Failures are returned as [`Outcome::Failure`] and never consume input.
    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, used to put differently-built parsers of the same
/// cursor and output type side by side (e.g. in [`one_of`](crate::one_of))
pub type BoxedParser<'a, C, O> = Box<dyn Parser<Cursor = C, Output = O> + 'a>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, Self::Cursor, Self::Output>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SliceCursor;
    use crate::map::MapExt;
    use crate::token::is_token;

    fn run<P: Parser>(parser: P, cursor: P::Cursor) -> Outcome<P::Cursor, P::Output> {
        parser.parse(cursor)
    }

    #[test]
    fn test_reference_is_a_parser() {
        let data = [1];
        let parser = is_token(1);

        let outcome = run(&parser, SliceCursor::new(&data));
        assert_eq!(outcome.value(), Some(&1));
        // Still usable after lending it out
        assert!(run(&parser, SliceCursor::new(&data).next()).is_failure());
    }

    #[test]
    fn test_boxed_parsers_share_a_type() {
        let data = [2];
        let cursor = SliceCursor::new(&data);
        let parsers: Vec<BoxedParser<'_, SliceCursor<'_, i32>, i32>> = vec![
            is_token(1).boxed(),
            is_token(2).map(|v: i32| v * 10).boxed(),
        ];

        assert!(parsers[0].parse(cursor).is_failure());
        assert_eq!(parsers[1].parse(cursor).value(), Some(&20));
    }
}
