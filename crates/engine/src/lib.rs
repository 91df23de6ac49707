//! Session engine - the interactive state machine around one automaton.
//!
//! Input layers translate keys into [`types::SimAction`]s and feed them to a
//! [`Session`]; the main loop calls [`Session::tick`] with elapsed wall time and
//! renderers read [`Session::automaton`] between ticks. Nothing here touches a
//! terminal, so the whole flow is unit-testable.

pub mod session;

pub use tui_cells_core as core;
pub use tui_cells_types as types;

pub use session::{ActionOutcome, Session};
