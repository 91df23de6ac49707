//! tui-cells (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tui_cells::{core, engine, input, term, types}` and hosts the command line
//! definition shared by the binary and the integration tests.

pub mod cli;

pub use tui_cells_core as core;
pub use tui_cells_engine as engine;
pub use tui_cells_input as input;
pub use tui_cells_term as term;
pub use tui_cells_types as types;
