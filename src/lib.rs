//! # memocomb - Parser Combinators over Replayable Token Streams
//!
//! memocomb builds recursive-descent parsers over any token type by composing
//! small parsers: match a token, match the end of input, project a value,
//! concatenate, repeat, and choose between alternatives.
//!
//! Parsers read from a [`Cursor`]. The [`Stream`](cursors::Stream) cursor
//! wraps a forward-only producer (an iterator, a character source, a reader)
//! and remembers every token it pulls, so backtracking alternatives and
//! repetitions can re-read any earlier position without pulling the producer
//! twice.
//!
//! - **No panics**: parse failures are ordinary [`Outcome::Failure`] values
//! - **Diagnostics**: failures carry the set of tokens that would have been
//!   accepted, ready to print as "expected one of {...}"
//! - **Composability**: small parsers combine into larger ones using combinators
//!
//! ```
//! use memocomb::cursors::Stream;
//! use memocomb::{Parser, RepeatExt, ThenExt, end_of_input, is_token};
//!
//! // a+ followed by b, then end of input
//! let parser = is_token('a')
//!     .one_or_more()
//!     .then(|_: &Vec<char>| is_token('b'), |a: Vec<char>, _| a.len())
//!     .then(|_: &usize| end_of_input(), |count: usize, _| count);
//!
//! let stream = Stream::from_chars("aaab");
//! assert_eq!(parser.parse(stream.cursor()).value(), Some(&3));
//!
//! let stream = Stream::from_chars("aac");
//! let outcome = parser.parse(stream.cursor());
//! assert_eq!(outcome.describe_failure().unwrap(), "expected 'b' at position 0");
//! ```

pub mod and;
pub mod cursor;
pub mod cursors;
pub mod end;
pub mod error;
pub mod expected;
pub mod lazy;
pub mod map;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod repeat;
pub mod then;
pub mod token;

pub use and::{AndExt, and};
pub use cursor::Cursor;
pub use cursors::{SliceCursor, Stream, StreamCursor};
pub use end::{EndOfInput, end_of_input};
pub use error::MemocombError;
pub use expected::{Expected, ExpectedSet};
pub use lazy::{Lazy, lazy};
pub use map::{Map, MapExt, map};
pub use or::{OneOf, Or, OrExt, one_of, or};
pub use outcome::{Outcome, ParseFailure};
pub use parser::{BoxedExt, BoxedParser, Parser};
pub use repeat::{Repeat, RepeatExt, one_or_more, repeat, zero_or_more};
pub use then::{Then, ThenExt, then};
pub use token::{IsToken, is_token, is_token_by};
