//! Top-level application state.
//!
//! `EaselApp` owns the canvas, the session and the staging slot, and runs
//! a line-oriented event loop: a stdin reader thread and the request
//! worker both post [`UiEvent`](types::UiEvent)s into one channel, and the
//! loop thread is the only place any of that state is mutated.

mod commands;
mod core;
mod event_loop;
mod render;
mod theme;
mod types;


pub use self::core::EaselApp;
