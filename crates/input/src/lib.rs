//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events into [`crate::types::SimAction`]s;
//! applying them is the session's job.

pub mod map;

pub use tui_cells_types as types;

pub use map::{handle_key_event, should_quit};
