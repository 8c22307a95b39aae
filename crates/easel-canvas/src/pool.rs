//! Fixed-capacity bump arena for draw-command text.
//!
//! Text-bearing commands store a [`TextRef`] (offset + length) instead of
//! owning a `String`. The pool never grows past the capacity it was
//! created with and is only ever reset as a whole.

/// Location of a string inside a [`StringPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRef {
    pub offset: u32,
    pub len: u32,
}

#[derive(Debug, Clone)]
pub struct StringPool {
    bytes: Vec<u8>,
    capacity: usize,
}

impl StringPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Copy `text` into the pool. Returns `None` when it does not fit.
    pub fn alloc(&mut self, text: &str) -> Option<TextRef> {
        let offset = self.bytes.len();
        if text.len() > self.capacity - offset {
            return None;
        }
        let offset = u32::try_from(offset).ok()?;
        let len = u32::try_from(text.len()).ok()?;
        self.bytes.extend_from_slice(text.as_bytes());
        Some(TextRef { offset, len })
    }

    /// Text behind `text_ref`; empty when the reference is out of bounds.
    pub fn get(&self, text_ref: TextRef) -> &str {
        let start = text_ref.offset as usize;
        let end = start.saturating_add(text_ref.len as usize);
        self.bytes
            .get(start..end)
            .and_then(|b| std::str::from_utf8(b).ok())
            .unwrap_or("")
    }

    /// Drop every allocation; the next one starts at offset zero.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    pub fn used(&self) -> usize {
        self.bytes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }
}
