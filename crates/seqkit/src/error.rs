// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::ops::Range;

/// The error type for range-based sequence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested range does not lie within the sequence.
    OutOfRange(RangeError),
    /// The source range of a copy does not lie within the source sequence.
    SourceOutOfRange(RangeError),
    /// The destination range of a copy does not lie within the destination sequence.
    DestinationOutOfRange(RangeError),
}

/// Details about a range that does not fit into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeError {
    /// The first index of the requested range.
    pub start: usize,
    /// The number of elements requested.
    pub count: usize,
    /// The length of the sequence the range was checked against.
    pub len: usize,
}

impl RangeError {
    /// Validates `[start, start + count)` against a sequence of length `len`.
    ///
    /// An overflowing `start + count` is out of range as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seqkit::error::RangeError;
    /// assert_eq!(RangeError::check(1, 2, 3), Ok(1..3));
    /// assert!(RangeError::check(2, 2, 3).is_err());
    /// assert!(RangeError::check(usize::MAX, 2, 3).is_err());
    /// ```
    #[inline]
    pub fn check(start: usize, count: usize, len: usize) -> Result<Range<usize>, Self> {
        match start.checked_add(count) {
            Some(end) if end <= len => Ok(start..end),
            _ => Err(Self { start, count, len }),
        }
    }
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "range starting at {} with {} elements exceeds length {}",
            self.start, self.count, self.len
        )
    }
}

impl std::error::Error for RangeError {}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(e) => write!(f, "Out of range: {}", e),
            Self::SourceOutOfRange(e) => write!(f, "Source out of range: {}", e),
            Self::DestinationOutOfRange(e) => write!(f, "Destination out of range: {}", e),
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfRange(e) | Self::SourceOutOfRange(e) | Self::DestinationOutOfRange(e) => {
                Some(e)
            }
        }
    }
}

impl From<RangeError> for SequenceError {
    fn from(e: RangeError) -> Self {
        Self::OutOfRange(e)
    }
}
