//! Single-pending-result staging between the network worker and the UI.
//!
//! The UI thread owns a [`StagingSlot`]. `submit` moves the pre-allocated
//! [`StagingBuffers`] into a worker task on the app's tokio runtime; the
//! worker fills them, publishes exactly one [`PendingResult`] over a
//! capacity-one channel and fires the [`Waker`]. The UI thread then calls
//! `poll`, which applies the result to the canvas and session and only
//! afterwards returns the slot to idle. A second `submit` while a result
//! is outstanding is refused with [`DispatchError::Busy`].

mod result;
mod slot;
mod worker;


pub use result::{Applied, PendingResult, RequestMode, StagingBuffers};
pub use slot::{DispatchError, SlotState, StagingSlot, Waker};
