use crate::cursor::Cursor;
use crate::expected::Expected;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Comparer used by [`is_token`]: plain equality
pub type TokenEq<T> = fn(&T, &T) -> bool;

fn token_eq<T: PartialEq>(current: &T, target: &T) -> bool {
    current == target
}

/// Parser that matches a single token against an expected one
///
/// The comparer is called as `compare(current, expected)`. On a match the
/// value is the token read from the input, which need not be identical to the
/// expected token under a custom comparer.
pub struct IsToken<C: Cursor, F> {
    expected: C::Element,
    compare: F,
    _cursor: PhantomData<fn() -> C>,
}

impl<C: Cursor> IsToken<C, TokenEq<C::Element>> {
    pub fn new(expected: C::Element) -> Self {
        IsToken {
            expected,
            compare: token_eq::<C::Element>,
            _cursor: PhantomData,
        }
    }
}

impl<C, F> IsToken<C, F>
where
    C: Cursor,
    F: Fn(&C::Element, &C::Element) -> bool,
{
    pub fn with_comparer(expected: C::Element, compare: F) -> Self {
        IsToken {
            expected,
            compare,
            _cursor: PhantomData,
        }
    }

    pub fn expected(&self) -> &C::Element {
        &self.expected
    }
}

impl<C, F> Parser for IsToken<C, F>
where
    C: Cursor,
    F: Fn(&C::Element, &C::Element) -> bool,
{
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> Outcome<C, Self::Output> {
        if cursor.eos() {
            return Outcome::rejected(cursor, Expected::Token(self.expected.clone()));
        }
        match cursor.value() {
            Ok(current) if (self.compare)(&current, &self.expected) => {
                Outcome::success(cursor, cursor.next(), current)
            }
            _ => Outcome::rejected(cursor, Expected::Token(self.expected.clone())),
        }
    }
}

/// Convenience function to create an IsToken parser comparing by equality
pub fn is_token<C: Cursor>(expected: C::Element) -> IsToken<C, TokenEq<C::Element>> {
    IsToken::new(expected)
}

/// Convenience function to create an IsToken parser with a custom comparer
pub fn is_token_by<C, F>(expected: C::Element, compare: F) -> IsToken<C, F>
where
    C: Cursor,
    F: Fn(&C::Element, &C::Element) -> bool,
{
    IsToken::with_comparer(expected, compare)
}
