//! Terminal rendering for the cell automaton.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GridView`] paints a [`Session`](tui_cells_engine::Session) into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes it with crossterm, sending
//! only the cells that changed since the previous frame.
//!
//! Compact mode packs two grid rows into one terminal row with the upper half
//! block. Bordered mode gives each cell two columns and a thin separator.

pub mod fb;
pub mod grid_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_cells_core as core;
pub use tui_cells_engine as engine;
pub use tui_cells_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use grid_view::{health_color, GridView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
