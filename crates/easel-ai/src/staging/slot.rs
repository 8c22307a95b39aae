//! The UI-thread side of the staging protocol.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::sync::Arc;

use easel_canvas::CanvasBuffer;
use tokio::runtime::Handle;
use tracing::{debug, error, info};

use crate::session::Session;
use crate::AiClient;

use super::result::{Applied, PendingResult, RequestMode, StagingBuffers};
use super::worker::{run_request, Staged};

/// Callback the worker fires once after publishing its result, so the UI
/// loop knows to call [`StagingSlot::poll`].
pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Idle,
    AwaitingResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("a request is already in flight")]
    Busy,
}

/// Shown when the worker task dies before it can publish.
const WORKER_FAILED: &str = "The request failed unexpectedly.";

struct InFlight {
    prompt: String,
    mode: RequestMode,
}

/// Owner of the single in-flight request.
pub struct StagingSlot {
    client: Arc<dyn AiClient>,
    runtime: Handle,
    waker: Waker,
    tx: SyncSender<Staged>,
    rx: Receiver<Staged>,
    /// Present while idle; moved into the worker while a request runs.
    buffers: Option<StagingBuffers>,
    in_flight: Option<InFlight>,
    max_content_blocks: usize,
    /// Wire and text capacities, used to rebuild buffers lost with a worker.
    buffer_bytes: (usize, usize),
}

impl StagingSlot {
    pub fn new(
        client: Arc<dyn AiClient>,
        runtime: Handle,
        buffers: StagingBuffers,
        max_content_blocks: usize,
        waker: Waker,
    ) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        let buffer_bytes = (buffers.wires.capacity(), buffers.text.capacity());
        Self {
            client,
            runtime,
            waker,
            tx,
            rx,
            buffers: Some(buffers),
            in_flight: None,
            max_content_blocks,
            buffer_bytes,
        }
    }

    pub fn state(&self) -> SlotState {
        if self.in_flight.is_some() {
            SlotState::AwaitingResult
        } else {
            SlotState::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state() == SlotState::AwaitingResult
    }

    /// Start a request for `prompt`. The session is only read here; the
    /// turn is committed by [`poll`](Self::poll) once the result applies.
    pub fn submit(
        &mut self,
        prompt: impl Into<String>,
        mode: RequestMode,
        session: &Session,
    ) -> Result<(), DispatchError> {
        if self.in_flight.is_some() {
            return Err(DispatchError::Busy);
        }
        let Some(mut buffers) = self.buffers.take() else {
            return Err(DispatchError::Busy);
        };
        buffers.clear();

        let prompt = prompt.into();
        let messages = session.request_messages(&prompt, mode.system_prompt());
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let waker = Arc::clone(&self.waker);
        let max_blocks = self.max_content_blocks;
        let (wire_bytes, text_bytes) = self.buffer_bytes;
        let runtime = self.runtime.clone();

        info!(mode = mode.name(), history = messages.len(), "request submitted");
        self.in_flight = Some(InFlight { prompt, mode });

        self.runtime.spawn(async move {
            let task = runtime.spawn(run_request(client, messages, mode, buffers, max_blocks));
            let staged = match task.await {
                Ok(staged) => staged,
                Err(e) => {
                    error!(error = %e, mode = mode.name(), "request worker died");
                    Staged {
                        result: PendingResult::Error(WORKER_FAILED),
                        buffers: StagingBuffers::new(wire_bytes, text_bytes),
                        usage: None,
                    }
                }
            };
            match tx.try_send(staged) {
                Ok(()) => waker(),
                Err(TrySendError::Full(_)) => error!("staging slot already holds a result"),
                Err(TrySendError::Disconnected(_)) => debug!("staging slot dropped before publish"),
            }
        });
        Ok(())
    }

    /// Apply a published result, if there is one, and return to idle.
    ///
    /// A failed request leaves both the canvas and the session untouched.
    pub fn poll(&mut self, canvas: &mut CanvasBuffer, session: &mut Session) -> Option<Applied> {
        let staged = match self.rx.try_recv() {
            Ok(staged) => staged,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => return None,
        };
        let Some(in_flight) = self.in_flight.take() else {
            error!("result published with no request in flight");
            self.buffers = Some(staged.buffers);
            return None;
        };

        let applied = apply(&staged, in_flight, canvas, session);
        if let Some(usage) = staged.usage {
            session.record_usage(&usage);
        }
        self.buffers = Some(staged.buffers);
        Some(applied)
    }
}

fn apply(
    staged: &Staged,
    in_flight: InFlight,
    canvas: &mut CanvasBuffer,
    session: &mut Session,
) -> Applied {
    let buffers = &staged.buffers;
    match staged.result {
        PendingResult::Error(message) => Applied::Failed(message),
        PendingResult::Success(range) => {
            let reply = buffers.text.slice(range).to_string();
            session.record_turn(in_flight.prompt, reply.as_str());
            Applied::Reply(reply)
        }
        PendingResult::Canvas { wires, text } => {
            canvas.clear();
            let report = canvas.load_wire_lines(buffers.wires.slice(wires));
            let text = buffers.text.slice(text).to_string();
            info!(
                mode = in_flight.mode.name(),
                accepted = report.accepted,
                rejected = report.rejected,
                dropped = report.dropped,
                "drawing applied"
            );
            session.record_turn(in_flight.prompt, drawing_transcript(&text, canvas));
            Applied::Drawing { text, report }
        }
    }
}

/// Assistant history entry for a drawing: the text followed by the wire
/// lines that are now on the canvas.
fn drawing_transcript(text: &str, canvas: &CanvasBuffer) -> String {
    let wires = canvas.to_wire_lines();
    if text.is_empty() {
        format!("[drawing]\n{wires}")
    } else {
        format!("{text}\n[drawing]\n{wires}")
    }
}
