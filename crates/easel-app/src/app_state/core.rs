//! EaselApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use easel_ai::{
    AiClient, ClaudeClient, ClaudeConfig, RequestMode, Session, StagingBuffers, StagingSlot,
    Waker,
};
use easel_canvas::{CanvasBuffer, CanvasLimits};
use easel_common::EaselError;
use easel_config::schema::{AiConfig, DefaultMode, EaselConfig};
use tracing::{info, warn};

use crate::cli::Args;

use super::theme::ThemePair;
use super::types::UiEvent;

/// Top-level application state.
pub struct EaselApp {
    pub(super) config: EaselConfig,

    // Drawing
    pub(super) canvas: CanvasBuffer,
    pub(super) themes: ThemePair,
    pub(super) export_path: PathBuf,

    // Conversation
    pub(super) session: Session,
    pub(super) mode: RequestMode,
    /// `None` when no API credentials are available.
    pub(super) slot: Option<StagingSlot>,

    // Event plumbing
    pub(super) event_tx: Sender<UiEvent>,
    pub(super) event_rx: Receiver<UiEvent>,
    pub(super) tokio_runtime: tokio::runtime::Runtime,

    pub(super) input_closed: bool,
    pub(super) should_exit: bool,
}

impl EaselApp {
    pub fn new(config: EaselConfig, args: &Args) -> Result<Self, EaselError> {
        let client = match connect(&config.ai) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("AI unavailable, drawing requests disabled: {e}");
                None
            }
        };
        Self::with_client(config, args, client)
    }

    pub(super) fn with_client(
        config: EaselConfig,
        args: &Args,
        client: Option<Arc<dyn AiClient>>,
    ) -> Result<Self, EaselError> {
        let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| EaselError::Other(format!("failed to create tokio runtime: {e}")))?;

        let (event_tx, event_rx) = mpsc::channel();

        let themes = ThemePair::from_config(&config, args.theme.as_deref());
        let canvas = CanvasBuffer::new(
            CanvasLimits {
                max_commands: config.canvas.max_commands as usize,
                string_pool_bytes: config.canvas.string_pool_bytes as usize,
            },
            Arc::clone(themes.active()),
        );

        let provider = client.as_ref().map_or("claude", |c| c.provider()).to_string();
        let session = Session::new(provider).with_max_history(config.ai.max_history as usize);

        let slot = client.map(|client| {
            let tx = event_tx.clone();
            let waker: Waker = Arc::new(move || {
                let _ = tx.send(UiEvent::ResultReady);
            });
            StagingSlot::new(
                client,
                tokio_runtime.handle().clone(),
                StagingBuffers::new(
                    config.canvas.wire_buffer_bytes as usize,
                    config.canvas.text_buffer_bytes as usize,
                ),
                config.canvas.max_content_blocks as usize,
                waker,
            )
        });

        let mode = match args.mode {
            Some(mode) => mode.into(),
            None => match config.ai.default_mode {
                DefaultMode::Chat => RequestMode::Chat,
                DefaultMode::Draw => RequestMode::Draw,
            },
        };

        let export_path = args
            .export
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.canvas.export_path));

        info!(
            theme = themes.active().name(),
            mode = mode.name(),
            max_commands = canvas.capacity(),
            "app initialized"
        );

        Ok(Self {
            config,
            canvas,
            themes,
            export_path,
            session,
            mode,
            slot,
            event_tx,
            event_rx,
            tokio_runtime,
            input_closed: false,
            should_exit: false,
        })
    }

    pub(super) fn is_busy(&self) -> bool {
        self.slot.as_ref().is_some_and(StagingSlot::is_busy)
    }
}

/// Build the Claude client from the environment and `[ai]` settings.
fn connect(ai: &AiConfig) -> Result<Arc<dyn AiClient>, easel_ai::AiError> {
    let config = ClaudeConfig::from_env()?
        .with_model(&ai.model)
        .with_max_tokens(ai.max_tokens)
        .with_temperature(ai.temperature)
        .with_timeout_secs(u64::from(ai.timeout_secs));
    info!(model = %config.model, auth = ?config.auth_method, "Claude client configured");
    Ok(Arc::new(ClaudeClient::new(config)?))
}
