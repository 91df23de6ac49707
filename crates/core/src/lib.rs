//! Core automaton module - pure, deterministic, and testable
//!
//! This module contains the cell rule, the double-buffered grid and the rule
//! configuration. It has **no dependencies** on terminal, input or UI code, making it:
//!
//! - **Deterministic**: the same grid, config and seed always produce the same generations
//! - **Testable**: every instance owns its own buffers, config and RNG
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: flat row-major buffer of cell health values
//! - [`config`]: thresholds, effect tables and the six-line text format
//! - [`automaton`]: neighbourhood rule and the synchronous stepper
//! - [`rng`]: injectable random sources
//! - [`pattern`]: `[x,y]=hp` seed files
//! - [`error`]: file and parse errors
//!
//! # Rule
//!
//! A cell is **active** when its health is at least `active_threshold`. Each tick:
//!
//! - **Personal effect**: every active neighbour in slot `k` adds `live_personal_effect[k]`
//!   (if the cell itself is active) or `dead_personal_effect[k]`
//! - **Crowd effect**: the number `n` of active neighbours adds `live_crowd_effect[n]`
//!   or `dead_crowd_effect[n]`
//! - **Clamp**: the result is clamped into `[0, max_health]`
//!
//! Neighbours outside the grid are inactive; there is no wrapping.
//!
//! # Example
//!
//! ```
//! use tui_cells_core::{Automaton, RuleConfig};
//!
//! let mut config = RuleConfig {
//!     max_health: 10,
//!     active_threshold: 5,
//!     ..RuleConfig::default()
//! };
//! config.live_crowd_effect[0] = -1;
//!
//! let mut automaton = Automaton::new(3, 3, config);
//! automaton.set(1, 1, 10);
//! automaton.tick();
//!
//! assert_eq!(automaton.get(1, 1), Some(9));
//! assert_eq!(automaton.get(0, 0), Some(0));
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod rng;

pub use tui_cells_types as types;

// Re-export commonly used types for convenience
pub use automaton::Automaton;
pub use config::RuleConfig;
pub use error::CoreError;
pub use grid::HealthGrid;
pub use pattern::{apply_pattern, load_pattern, parse_pattern, PatternCell, PatternReport};
pub use rng::{RandomSource, SimpleRng};
