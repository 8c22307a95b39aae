//! Input handling and slash commands.

use std::path::PathBuf;

use easel_ai::{DispatchError, RequestMode, Session};
use tracing::info;

use super::core::EaselApp;
use super::types::{SlashCommand, HELP};

impl EaselApp {
    pub(super) fn handle_input(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        match SlashCommand::parse(line) {
            Some(Ok(command)) => self.run_command(command),
            Some(Err(message)) => self.say(&message),
            None => self.send(line),
        }
    }

    pub(super) fn run_command(&mut self, command: SlashCommand) {
        match command {
            SlashCommand::Draw(prompt) => self.switch_mode(RequestMode::Draw, prompt),
            SlashCommand::Chat(prompt) => self.switch_mode(RequestMode::Chat, prompt),
            SlashCommand::Theme => {
                let theme = self.themes.toggle();
                self.say(&format!("theme: {}", theme.name()));
                self.canvas.set_theme(theme);
                self.export_canvas();
            }
            SlashCommand::Clear => {
                if self.is_busy() {
                    self.say("wait for the current request to finish first");
                    return;
                }
                self.canvas.clear();
                self.session.clear();
                self.say("canvas and conversation cleared");
                self.export_canvas();
            }
            SlashCommand::Export(path) => {
                if let Some(path) = path {
                    self.export_path = path;
                }
                self.export_to(&self.export_path.clone(), true);
            }
            SlashCommand::Usage => {
                let report = usage_report(&self.session);
                self.say(&report);
            }
            SlashCommand::Help => self.say(HELP),
            SlashCommand::Quit => {
                info!("quit requested");
                self.should_exit = true;
            }
        }
    }

    fn switch_mode(&mut self, mode: RequestMode, prompt: Option<String>) {
        if self.mode != mode {
            self.mode = mode;
            self.say(&format!("mode: {}", mode.name()));
        }
        if let Some(prompt) = prompt {
            self.send(&prompt);
        }
    }

    /// Submit `prompt` in the current mode.
    pub(super) fn send(&mut self, prompt: &str) {
        let Some(slot) = self.slot.as_mut() else {
            self.say("AI is not configured: set ANTHROPIC_API_KEY or CLAUDE_CODE_OAUTH_TOKEN");
            return;
        };
        match slot.submit(prompt, self.mode, &self.session) {
            Ok(()) => {
                let verb = match self.mode {
                    RequestMode::Draw => "drawing",
                    RequestMode::Chat => "thinking",
                };
                self.say(&format!("{verb}..."));
            }
            Err(DispatchError::Busy) => {
                self.say("still working on the previous request, please wait");
            }
        }
    }

    /// Current export target.
    pub(super) fn export_path(&self) -> PathBuf {
        self.export_path.clone()
    }
}

/// Text shown by `/usage`: the overall summary, then the active provider's
/// share and the most recent call.
pub(super) fn usage_report(session: &Session) -> String {
    let tracker = session.tracker();
    let mut report = tracker.summary();
    if let Some(usage) = tracker.for_provider(session.provider()) {
        report.push_str(&format!(
            "\n{}: {} tokens",
            session.provider(),
            usage.total_tokens()
        ));
    }
    if let Some(last) = tracker.last() {
        report.push_str(&format!(
            "\nlast request: {} input + {} output",
            last.input_tokens, last.output_tokens
        ));
    }
    report
}
