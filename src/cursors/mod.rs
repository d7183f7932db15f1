//! Cursor implementations: replayable streams over single-pass producers and
//! zero-copy slices.

pub mod slice;
pub mod stream;

pub use slice::SliceCursor;
pub use stream::{ReadBytes, Stream, StreamCursor};
