//! Codec bridge between a tool-calling response and the canvas.
//!
//! [`extract_response`] walks the `content` array of a Messages API
//! response body. Each `tool_use`-shaped block is re-encoded into one
//! canvas wire line and each text block is appended to the display text,
//! both into caller-owned [`OutputBuffer`]s. Individual bad blocks are
//! skipped; only a body without a `content` array fails the whole
//! response.

mod buffer;
mod encode;
mod extract;


pub use buffer::{ByteRange, OutputBuffer};
pub use encode::encode_invocation;
pub use extract::{extract_response, ExtractReport};

/// Content blocks examined per response unless configured otherwise.
pub const DEFAULT_MAX_CONTENT_BLOCKS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("response has no content array")]
    MissingContent,
}
