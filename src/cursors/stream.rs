//! Replayable cursors over single-pass token producers.
//!
//! A [`Stream`] owns a forward-only producer (any [`Iterator`]) together with
//! an arena of every token drawn from it so far. [`StreamCursor`]s are plain
//! indices into that arena, so any number of parse attempts can read from the
//! same logical position while the producer itself is pulled at most once per
//! position.
//!
//! ```
//! use memocomb::cursors::Stream;
//! use memocomb::{Cursor, Parser, is_token, zero_or_more};
//!
//! let stream = Stream::from_chars("aab");
//! let outcome = zero_or_more(is_token('a')).parse(stream.cursor());
//!
//! assert_eq!(outcome.value(), Some(&vec!['a', 'a']));
//! assert_eq!(outcome.remaining().value().unwrap(), 'b');
//! ```

use crate::cursor::Cursor;
use crate::error::MemocombError;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufReader, Read};
use std::str::Chars;

struct StreamState<I: Iterator> {
    source: I,
    /// Every token pulled so far; position `i` lives at `tokens[i]`
    tokens: Vec<I::Item>,
    exhausted: bool,
}

/// Memo arena over a forward-only token producer
pub struct Stream<I: Iterator> {
    state: RefCell<StreamState<I>>,
}

impl<I: Iterator> Stream<I> {
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        Stream {
            state: RefCell::new(StreamState {
                source: source.into_iter(),
                tokens: Vec::new(),
                exhausted: false,
            }),
        }
    }

    /// Cursor at position zero
    pub fn cursor(&self) -> StreamCursor<'_, I> {
        StreamCursor {
            stream: self,
            position: 0,
        }
    }

    /// Number of tokens drawn from the producer so far
    pub fn pulled(&self) -> usize {
        self.state.borrow().tokens.len()
    }

    /// Whether the producer has reported its end
    pub fn is_exhausted(&self) -> bool {
        self.state.borrow().exhausted
    }

    /// Make sure `position` is resolved, pulling from the producer only for
    /// positions never seen before. Returns whether a token exists there.
    fn resolve(&self, position: usize) -> bool {
        let mut state = self.state.borrow_mut();
        while state.tokens.len() <= position && !state.exhausted {
            match state.source.next() {
                Some(token) => state.tokens.push(token),
                None => state.exhausted = true,
            }
        }
        position < state.tokens.len()
    }

    fn token(&self, position: usize) -> Option<I::Item>
    where
        I::Item: Clone,
    {
        if !self.resolve(position) {
            return None;
        }
        self.state.borrow().tokens.get(position).cloned()
    }
}

impl<'a> Stream<Chars<'a>> {
    /// Character source over a string
    pub fn from_chars(text: &'a str) -> Self {
        Stream::new(text.chars())
    }
}

/// Byte producer over an [`io::Read`] that ends at the first I/O error
pub struct ReadBytes<R> {
    bytes: io::Bytes<BufReader<R>>,
    error: Option<io::Error>,
}

impl<R: Read> Iterator for ReadBytes<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }
        match self.bytes.next()? {
            Ok(byte) => Some(byte),
            Err(error) => {
                self.error = Some(error);
                None
            }
        }
    }
}

impl<R: Read> Stream<ReadBytes<R>> {
    /// Byte source over a reader
    ///
    /// The reader is buffered internally. An I/O error ends the stream; its
    /// kind is available from [`Stream::io_error`] afterwards.
    pub fn from_reader(reader: R) -> Self {
        Stream::new(ReadBytes {
            bytes: BufReader::new(reader).bytes(),
            error: None,
        })
    }

    pub fn io_error(&self) -> Option<io::ErrorKind> {
        self.state
            .borrow()
            .source
            .error
            .as_ref()
            .map(io::Error::kind)
    }
}

impl<I: Iterator> fmt::Debug for Stream<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Stream")
            .field("pulled", &state.tokens.len())
            .field("exhausted", &state.exhausted)
            .finish_non_exhaustive()
    }
}

/// Position in a [`Stream`]
pub struct StreamCursor<'s, I: Iterator> {
    stream: &'s Stream<I>,
    position: usize,
}

impl<'s, I: Iterator> StreamCursor<'s, I> {
    pub fn stream(&self) -> &'s Stream<I> {
        self.stream
    }
}

impl<I: Iterator> Clone for StreamCursor<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Iterator> Copy for StreamCursor<'_, I> {}

impl<I: Iterator> PartialEq for StreamCursor<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.stream, other.stream) && self.position == other.position
    }
}

impl<I: Iterator> fmt::Debug for StreamCursor<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl<I> Cursor for StreamCursor<'_, I>
where
    I: Iterator,
    I::Item: Clone + PartialEq + fmt::Debug,
{
    type Element = I::Item;

    fn value(&self) -> Result<Self::Element, MemocombError> {
        self.stream
            .token(self.position)
            .ok_or(MemocombError::CannotReadValueAtEof {
                position: self.position,
            })
    }

    fn eos(&self) -> bool {
        !self.stream.resolve(self.position)
    }

    fn next(self) -> Self {
        if self.eos() {
            return self;
        }
        StreamCursor {
            stream: self.stream,
            position: self.position + 1,
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}
