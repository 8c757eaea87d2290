//! Headless testing helpers.
//!
//! Use the [`EditorPilot`] to drive a [`MarkupSyncEngine`](crate::editor::MarkupSyncEngine)
//! over an in-memory buffer the way a user at a keyboard would, then inspect
//! the buffer, the live object and the status.

pub mod pilot;

pub use pilot::EditorPilot;
