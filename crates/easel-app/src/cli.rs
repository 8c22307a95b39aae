use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use easel_ai::RequestMode;

/// Easel: chat with an assistant that answers by drawing.
#[derive(Parser, Debug)]
#[command(name = "easel", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Theme to start with, overriding `[theme] name`.
    #[arg(long)]
    pub theme: Option<String>,

    /// Request mode to start in, overriding `[ai] default_mode`.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Where the canvas SVG is written, overriding `[canvas] export_path`.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Chat,
    Draw,
}

impl From<ModeArg> for RequestMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Chat => RequestMode::Chat,
            ModeArg::Draw => RequestMode::Draw,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

/// Turn a bare level name into an `easel=<level>` directive; anything
/// else is passed through as a filter directive.
pub fn log_directive(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error") => format!("easel={l}"),
        _ => level.to_string(),
    }
}
