//! Fixed-capacity output buffers with a write cursor.

/// Location of a span inside an [`OutputBuffer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteRange {
    pub offset: usize,
    pub len: usize,
}

impl ByteRange {
    pub const EMPTY: ByteRange = ByteRange { offset: 0, len: 0 };

    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest range covering `start..end`.
    pub(crate) fn between(start: usize, end: usize) -> Self {
        Self {
            offset: start,
            len: end.saturating_sub(start),
        }
    }
}

/// Append-only text buffer that never grows past its capacity.
///
/// Writes are all-or-nothing: a chunk that does not fit is refused whole
/// and the cursor stays where it was.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: String,
    capacity: usize,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: String::with_capacity(capacity),
            capacity,
        }
    }

    pub fn try_push(&mut self, chunk: &str) -> Option<ByteRange> {
        if chunk.len() > self.remaining() {
            return None;
        }
        let offset = self.data.len();
        self.data.push_str(chunk);
        Some(ByteRange {
            offset,
            len: chunk.len(),
        })
    }

    /// Text behind `range`; empty when the range is out of bounds.
    pub fn slice(&self, range: ByteRange) -> &str {
        self.data.get(range.offset..range.end()).unwrap_or("")
    }

    /// Rewind the cursor to zero.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Current cursor position.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}
