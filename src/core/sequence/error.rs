/*!

Sequence access failures. All are local, synchronous, and non-retryable:
retrying with the same arguments fails the same way.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub enum SequenceError {
  /// An element of an empty sequence was requested.
  Empty {
    operation: &'static str,
  },
  /// A position past the end was requested.
  OutOfBounds {
    index: usize,
    len  : usize,
  },
}

impl Display for SequenceError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      SequenceError::Empty { operation } => {
        write!(f, "`{}` called on an empty sequence", operation)
      }

      SequenceError::OutOfBounds { index, len } => {
        write!(f, "position {} is out of bounds for a sequence of {} elements", index, len)
      }

    }
  }
}

impl Debug for SequenceError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for SequenceError {}
