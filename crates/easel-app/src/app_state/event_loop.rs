//! The UI loop: one thread, one channel.

use std::io::BufRead;

use easel_common::EaselError;
use tracing::{debug, info};

use super::core::EaselApp;
use super::types::UiEvent;

impl EaselApp {
    /// Read stdin on a helper thread and process events until `/quit` or
    /// end of input.
    pub fn run(mut self) -> Result<(), EaselError> {
        let tx = self.event_tx.clone();
        std::thread::Builder::new()
            .name("easel-stdin".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else { break };
                    if tx.send(UiEvent::Input(line)).is_err() {
                        return;
                    }
                }
                let _ = tx.send(UiEvent::InputClosed);
            })?;

        self.print_banner();
        self.prompt();

        while !self.should_exit {
            let Ok(event) = self.event_rx.recv() else {
                break;
            };
            self.handle_event(event);
        }

        info!(
            requests = self.session.tracker().call_count(),
            tokens = self.session.tracker().total_tokens(),
            "session finished"
        );
        self.tokio_runtime
            .shutdown_timeout(std::time::Duration::from_secs(2));
        Ok(())
    }

    pub(super) fn handle_event(&mut self, event: UiEvent) {
        debug!(?event, "ui event");
        match event {
            UiEvent::Input(line) => {
                self.handle_input(&line);
                if !self.should_exit && !self.is_busy() {
                    self.prompt();
                }
            }
            UiEvent::ResultReady => {
                self.apply_pending();
                if self.input_closed {
                    self.should_exit = !self.is_busy();
                } else {
                    self.prompt();
                }
            }
            UiEvent::InputClosed => {
                self.input_closed = true;
                // let an in-flight request finish before leaving
                self.should_exit = !self.is_busy();
            }
        }
    }

    /// Drain the staging slot, if a result is waiting.
    pub(super) fn apply_pending(&mut self) {
        let Some(slot) = self.slot.as_mut() else {
            return;
        };
        if let Some(applied) = slot.poll(&mut self.canvas, &mut self.session) {
            self.show_applied(applied);
        }
    }
}
