//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (automaton core, session, terminal rendering).
//!
//! # Grid Dimensions
//!
//! - **Default size**: 250x250 cells
//! - **Coordinates**: (x, y), x grows to the right, y grows "up" in neighbour terms
//!   (slot 0 is `(-1, +1)`)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Interval between generations |
//! | `MAX_CATCH_UP_STEPS` | 4 | Generations a single session tick may replay after a stall |
//! | `PAUSED_REDRAW_MS` | 250 | Minimum redraw interval while nothing changes |
//!
//! # Neighbour Slots
//!
//! ```text
//! +---+---+---+
//! | 0 | 1 | 2 |
//! +---+---+---+
//! | 3 | X | 4 |
//! +---+---+---+
//! | 5 | 6 | 7 |
//! +---+---+---+
//! ```
//!
//! Personal effect tables are indexed by slot, so this order is part of the rule.
//!
//! # Examples
//!
//! ```
//! use tui_cells_types::{SimAction, PanDirection, NEIGHBOR_OFFSETS, NEIGHBOR_COUNT};
//!
//! let action = SimAction::from_str("togglePause").unwrap();
//! assert_eq!(action, SimAction::TogglePause);
//! assert_eq!(SimAction::Pan(PanDirection::Left).as_str(), "panLeft");
//!
//! assert_eq!(NEIGHBOR_OFFSETS.len(), NEIGHBOR_COUNT);
//! assert_eq!(NEIGHBOR_OFFSETS[0], (-1, 1));
//! ```

/// Default grid width and height in cells
pub const GRID_SIZE: usize = 250;

/// Number of neighbours around a cell
pub const NEIGHBOR_COUNT: usize = 8;

/// Length of the crowd effect tables (active neighbour counts 0..=8)
pub const CROWD_TABLE_LEN: usize = NEIGHBOR_COUNT + 1;

/// Neighbour offsets `(dx, dy)` by slot.
pub const NEIGHBOR_OFFSETS: [(i32, i32); NEIGHBOR_COUNT] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Interval between generations in milliseconds
pub const TICK_MS: u32 = 100;

/// Cap on generations replayed by one session tick
pub const MAX_CATCH_UP_STEPS: u32 = 4;

/// Redraw interval while the frame is static (paused)
pub const PAUSED_REDRAW_MS: u64 = 250;

/// File written by the save action when no other path is given
pub const DEFAULT_SAVE_PATH: &str = "config.txt";

/// Random config: `max_health` is drawn from `[MIN, MAX)`
pub const RANDOM_MAX_HEALTH_MIN: i32 = 10;
pub const RANDOM_MAX_HEALTH_MAX: i32 = 200;

/// Random config: `active_threshold` is drawn from `[MIN, max_health)`
pub const RANDOM_THRESHOLD_MIN: i32 = 5;

/// Cells the camera moves per pan action
pub const PAN_STEP: usize = 8;

/// Camera pan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Unit step `(dx, dy)` in screen terms (down is +y)
    pub fn step(&self) -> (i32, i32) {
        match self {
            PanDirection::Left => (-1, 0),
            PanDirection::Right => (1, 0),
            PanDirection::Up => (0, -1),
            PanDirection::Down => (0, 1),
        }
    }
}

/// User-level actions applied to a running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimAction {
    /// Stop or resume ticking
    TogglePause,
    /// Re-randomize every cell (only honoured while paused)
    Randomize,
    /// Write the rule config to the save path
    SaveConfig,
    /// Re-read the rule config from the path it was loaded from
    ReloadConfig,
    /// Draw a fresh random rule config and re-randomize the grid
    RegenerateConfig,
    /// Toggle drawing cell borders
    ToggleBorders,
    /// Move the camera
    Pan(PanDirection),
    /// Leave the program
    Quit,
}

impl SimAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_cells_types::{PanDirection, SimAction};
    ///
    /// assert_eq!(SimAction::from_str("randomize"), Some(SimAction::Randomize));
    /// assert_eq!(SimAction::from_str("SAVECONFIG"), Some(SimAction::SaveConfig));
    /// assert_eq!(SimAction::from_str("panUp"), Some(SimAction::Pan(PanDirection::Up)));
    /// assert_eq!(SimAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "togglepause" => Some(SimAction::TogglePause),
            "randomize" => Some(SimAction::Randomize),
            "saveconfig" => Some(SimAction::SaveConfig),
            "reloadconfig" => Some(SimAction::ReloadConfig),
            "regenerateconfig" => Some(SimAction::RegenerateConfig),
            "toggleborders" => Some(SimAction::ToggleBorders),
            "panleft" => Some(SimAction::Pan(PanDirection::Left)),
            "panright" => Some(SimAction::Pan(PanDirection::Right)),
            "panup" => Some(SimAction::Pan(PanDirection::Up)),
            "pandown" => Some(SimAction::Pan(PanDirection::Down)),
            "quit" => Some(SimAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SimAction::TogglePause => "togglePause",
            SimAction::Randomize => "randomize",
            SimAction::SaveConfig => "saveConfig",
            SimAction::ReloadConfig => "reloadConfig",
            SimAction::RegenerateConfig => "regenerateConfig",
            SimAction::ToggleBorders => "toggleBorders",
            SimAction::Pan(PanDirection::Left) => "panLeft",
            SimAction::Pan(PanDirection::Right) => "panRight",
            SimAction::Pan(PanDirection::Up) => "panUp",
            SimAction::Pan(PanDirection::Down) => "panDown",
            SimAction::Quit => "quit",
        }
    }
}
