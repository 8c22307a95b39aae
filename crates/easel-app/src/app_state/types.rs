//! Internal types for the app state module.

use std::path::PathBuf;

/// Events delivered to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum UiEvent {
    /// A line typed by the user.
    Input(String),
    /// The worker published a staged result.
    ResultReady,
    /// Standard input reached end of file.
    InputClosed,
}

/// A `/`-prefixed command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SlashCommand {
    /// Switch to draw mode, optionally sending a prompt right away.
    Draw(Option<String>),
    /// Switch to chat mode, optionally sending a prompt right away.
    Chat(Option<String>),
    Theme,
    Clear,
    Export(Option<PathBuf>),
    Usage,
    Help,
    Quit,
}

impl SlashCommand {
    /// Parse a line starting with `/`. Returns `None` for anything else.
    pub(super) fn parse(line: &str) -> Option<Result<Self, String>> {
        let rest = line.trim().strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let arg = (!arg.is_empty()).then(|| arg.to_string());

        let command = match name.to_ascii_lowercase().as_str() {
            "draw" => SlashCommand::Draw(arg),
            "chat" => SlashCommand::Chat(arg),
            "theme" => SlashCommand::Theme,
            "clear" => SlashCommand::Clear,
            "export" => SlashCommand::Export(arg.map(PathBuf::from)),
            "usage" => SlashCommand::Usage,
            "help" | "?" => SlashCommand::Help,
            "quit" | "exit" | "q" => SlashCommand::Quit,
            other => return Some(Err(format!("unknown command: /{other} (try /help)"))),
        };
        Some(Ok(command))
    }
}

pub(super) const HELP: &str = "\
Type a message and press Enter to send it.
  /draw [prompt]   switch to draw mode (and send prompt)
  /chat [prompt]   switch to chat mode (and send prompt)
  /theme           toggle between the primary and alternate theme
  /clear           clear the canvas and the conversation
  /export [path]   write the canvas as SVG
  /usage           show token usage
  /help            show this help
  /quit            exit";
