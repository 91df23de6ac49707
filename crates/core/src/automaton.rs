//! Automaton module - double-buffered health grid and its update rule
//!
//! Each tick reads only `current` and writes only `next`, then the two owned
//! buffers trade places. A rule evaluation can therefore never observe a value
//! produced in the same generation.

use crate::config::RuleConfig;
use crate::grid::HealthGrid;
use crate::rng::RandomSource;
use crate::types::{GRID_SIZE, NEIGHBOR_OFFSETS};

/// Generalised Game of Life with health-valued cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    current: HealthGrid,
    next: HealthGrid,
    config: RuleConfig,
    generation: u64,
}

impl Automaton {
    /// Create a `width` x `height` automaton with every cell at 0
    pub fn new(width: usize, height: usize, config: RuleConfig) -> Self {
        Self {
            current: HealthGrid::new(width, height),
            next: HealthGrid::new(width, height),
            config,
            generation: 0,
        }
    }

    /// Create a `GRID_SIZE` x `GRID_SIZE` automaton
    pub fn with_default_size(config: RuleConfig) -> Self {
        Self::new(GRID_SIZE, GRID_SIZE, config)
    }

    /// Clear both buffers, store `config` and restart the generation count.
    pub fn reset(&mut self, config: RuleConfig) {
        let (w, h) = (self.width(), self.height());
        self.current.reset(w, h);
        self.next.reset(w, h);
        self.config = config;
        self.generation = 0;
    }

    /// Swap in a new rule, clamping existing cells into its health range.
    pub fn replace_config(&mut self, config: RuleConfig) {
        self.config = config;
        let ceiling = config.health_ceiling();
        for cell in self.current.cells_mut() {
            *cell = (*cell).clamp(0, ceiling);
        }
    }

    /// Draw every cell uniformly from `[0, max_health]`.
    pub fn randomize<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let ceiling = self.config.health_ceiling();
        for cell in self.current.cells_mut() {
            *cell = rng.range_inclusive(0, ceiling);
        }
    }

    /// Set every cell to 0
    pub fn clear(&mut self) {
        self.current.fill(0);
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// The buffer renderers should read between ticks
    pub fn current(&self) -> &HealthGrid {
        &self.current
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Number of completed ticks since construction or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Health at (x, y), `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<i32> {
        self.current.get(x, y)
    }

    /// Write a cell, clamped to `[0, max_health]`. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, health: i32) -> bool {
        let ceiling = self.config.health_ceiling();
        self.current.set(x, y, health.clamp(0, ceiling))
    }

    /// Whether (x, y) holds an active cell. Out-of-bounds is inactive.
    pub fn is_active(&self, x: i32, y: i32) -> bool {
        is_active(&self.current, &self.config, x, y)
    }

    /// Active cells among the 8 neighbours of (x, y)
    pub fn neighbor_active_count(&self, x: i32, y: i32) -> usize {
        scan_neighbors(&self.current, &self.config, x, y).count
    }

    /// Sum of the personal effects of every active neighbour slot
    pub fn personal_delta(&self, x: i32, y: i32) -> i32 {
        scan_neighbors(&self.current, &self.config, x, y).personal
    }

    /// Crowd effect for (x, y) given its active neighbour `count` (0..=8)
    pub fn crowd_delta(&self, x: i32, y: i32, count: usize) -> i32 {
        self.config.crowd_effect(self.is_active(x, y), count)
    }

    /// Total health change (x, y) would receive this tick
    pub fn delta(&self, x: i32, y: i32) -> i32 {
        cell_delta(&self.current, &self.config, x, y)
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        let ceiling = self.config.health_ceiling();
        let width = self.current.width();

        for (i, out) in self.next.cells_mut().iter_mut().enumerate() {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            let now = self.current.cells()[i];
            let delta = cell_delta(&self.current, &self.config, x, y);
            *out = now.saturating_add(delta).clamp(0, ceiling);
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        log::trace!("generation {}", self.generation);
    }
}

#[inline(always)]
fn is_active(grid: &HealthGrid, config: &RuleConfig, x: i32, y: i32) -> bool {
    grid.get(x, y).is_some_and(|h| config.is_active_health(h))
}

/// Result of one pass over the 8 neighbours of a cell.
struct Neighborhood {
    live: bool,
    count: usize,
    personal: i32,
}

#[inline]
fn scan_neighbors(grid: &HealthGrid, config: &RuleConfig, x: i32, y: i32) -> Neighborhood {
    let live = is_active(grid, config, x, y);
    let mut count = 0usize;
    let mut personal = 0i32;
    for (slot, &(dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        if is_active(grid, config, x + dx, y + dy) {
            count += 1;
            personal = personal.saturating_add(config.personal_effect(live, slot));
        }
    }
    Neighborhood {
        live,
        count,
        personal,
    }
}

#[inline]
fn cell_delta(grid: &HealthGrid, config: &RuleConfig, x: i32, y: i32) -> i32 {
    let n = scan_neighbors(grid, config, x, y);
    n.personal.saturating_add(config.crowd_effect(n.live, n.count))
}
