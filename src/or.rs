use crate::error::MemocombError;
use crate::expected::ExpectedSet;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that tries candidates in order and returns the first success
///
/// Every candidate starts from the same cursor. Later candidates are not run
/// once one succeeds. If all of them fail, the failure carries the rejectors of
/// every candidate, so it can be reported as "expected one of {...}".
///
/// Candidates must share one type; box them with
/// [`BoxedExt::boxed`](crate::parser::BoxedExt::boxed) to mix differently
/// built parsers.
pub struct OneOf<P> {
    candidates: Vec<P>,
}

impl<P> OneOf<P> {
    pub fn new(candidates: impl IntoIterator<Item = P>) -> Result<Self, MemocombError> {
        let candidates: Vec<P> = candidates.into_iter().collect();
        if candidates.is_empty() {
            return Err(MemocombError::NoAlternatives);
        }
        Ok(OneOf { candidates })
    }

    /// Number of candidates; never zero
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

impl<P> Parser for OneOf<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output> {
        let mut rejected_by = ExpectedSet::new();
        for candidate in &self.candidates {
            match candidate.parse(cursor) {
                Outcome::Failure {
                    rejected_by: rejected,
                    ..
                } => rejected_by.extend(rejected),
                success => return success,
            }
        }
        Outcome::failure(cursor, rejected_by)
    }
}

/// Convenience function to create a OneOf parser
pub fn one_of<P: Parser>(candidates: impl IntoIterator<Item = P>) -> Result<OneOf<P>, MemocombError> {
    OneOf::new(candidates)
}

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Behaves like a [`OneOf`] of two candidates, but the candidates may have
/// different types as long as they agree on cursor and output.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> Outcome<Self::Cursor, Self::Output> {
        let mut rejected_by = match self.parser1.parse(cursor) {
            Outcome::Failure { rejected_by, .. } => rejected_by,
            success => return success,
        };
        match self.parser2.parse(cursor) {
            Outcome::Failure {
                rejected_by: rejected,
                ..
            } => {
                rejected_by.extend(rejected);
                Outcome::failure(cursor, rejected_by)
            }
            success => success,
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
