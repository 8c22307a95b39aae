//! Staged result shapes and the buffers they point into.

use easel_canvas::{LoadReport, SYSTEM_PROMPT};

use crate::codec::{ByteRange, OutputBuffer};
use crate::tools::draw_tools;
use crate::ToolDefinition;

/// What kind of answer a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// Plain conversation; no tools are offered.
    Chat,
    /// The model draws with the canvas tools.
    #[default]
    Draw,
}

impl RequestMode {
    pub fn name(self) -> &'static str {
        match self {
            RequestMode::Chat => "chat",
            RequestMode::Draw => "draw",
        }
    }

    pub(crate) fn tools(self) -> &'static [ToolDefinition] {
        match self {
            RequestMode::Chat => &[],
            RequestMode::Draw => draw_tools(),
        }
    }

    /// System prompt that replaces the session's own for this mode.
    pub(crate) fn system_prompt(self) -> Option<&'static str> {
        match self {
            RequestMode::Chat => None,
            RequestMode::Draw => Some(SYSTEM_PROMPT),
        }
    }
}

/// The single result a worker publishes. Ranges point into the
/// [`StagingBuffers`] handed back alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingResult {
    /// Chat reply text.
    Success(ByteRange),
    /// The request failed; the message is shown as-is.
    Error(&'static str),
    /// Drawing: newline-delimited wire lines plus accompanying text.
    Canvas { wires: ByteRange, text: ByteRange },
}

/// Fixed-capacity output buffers allocated once by the UI thread.
#[derive(Debug, Clone)]
pub struct StagingBuffers {
    pub wires: OutputBuffer,
    pub text: OutputBuffer,
}

impl StagingBuffers {
    pub fn new(wire_bytes: usize, text_bytes: usize) -> Self {
        Self {
            wires: OutputBuffer::with_capacity(wire_bytes),
            text: OutputBuffer::with_capacity(text_bytes),
        }
    }

    pub fn clear(&mut self) {
        self.wires.clear();
        self.text.clear();
    }
}

/// What the UI shows after a staged result has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Reply(String),
    Drawing { text: String, report: LoadReport },
    Failed(&'static str),
}
