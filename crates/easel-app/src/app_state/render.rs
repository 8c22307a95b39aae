//! Output: messages, applied results and SVG export.

use std::io::Write;
use std::path::Path;

use easel_ai::Applied;
use easel_common::EaselError;
use tracing::{info, warn};

use super::core::EaselApp;

impl EaselApp {
    pub(super) fn say(&self, message: &str) {
        println!("{message}");
    }

    pub(super) fn prompt(&self) {
        print!("[{}] > ", self.mode.name());
        let _ = std::io::stdout().flush();
    }

    pub(super) fn print_banner(&self) {
        let status = match self.slot {
            Some(_) => self.config.ai.model.as_str(),
            None => "offline",
        };
        self.say(&format!(
            "Easel v{} ({status}) - theme {} - canvas exported to {}",
            env!("CARGO_PKG_VERSION"),
            self.themes.active().name(),
            self.export_path.display()
        ));
        self.say("Type /help for commands.");
    }

    pub(super) fn show_applied(&self, applied: Applied) {
        match applied {
            Applied::Reply(text) => self.say(&text),
            Applied::Drawing { text, report } => {
                if !text.is_empty() {
                    self.say(&text);
                }
                let mut line = format!("canvas: {} commands", report.accepted);
                if report.rejected > 0 {
                    line.push_str(&format!(", {} rejected", report.rejected));
                }
                if report.dropped > 0 {
                    line.push_str(&format!(", {} dropped (canvas full)", report.dropped));
                }
                self.say(&line);
                self.export_canvas();
            }
            Applied::Failed(message) => self.say(&format!("error: {message}")),
        }
    }

    /// Re-render the canvas to the configured export path.
    pub(super) fn export_canvas(&self) {
        self.export_to(&self.export_path(), false);
    }

    pub(super) fn export_to(&self, path: &Path, announce: bool) {
        match write_svg(path, &self.canvas.to_svg()) {
            Ok(()) => {
                info!(path = %path.display(), commands = self.canvas.len(), "canvas exported");
                if announce {
                    self.say(&format!("exported to {}", path.display()));
                }
            }
            Err(e) => {
                warn!(path = %path.display(), "canvas export failed: {e}");
                self.say(&format!("export failed: {e}"));
            }
        }
    }
}

fn write_svg(path: &Path, svg: &str) -> Result<(), EaselError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    Ok(())
}
