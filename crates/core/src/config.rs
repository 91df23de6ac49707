//! Rule configuration and its six-line text format.
//!
//! ```text
//! max_health
//! active_threshold
//! live_crowd_effect      (9 ints)
//! live_personal_effect   (8 ints)
//! dead_crowd_effect      (9 ints)
//! dead_personal_effect   (8 ints)
//! ```
//!
//! Parsing is token based: any whitespace (including newlines) separates values.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::rng::RandomSource;
use crate::types::{
    CROWD_TABLE_LEN, NEIGHBOR_COUNT, RANDOM_MAX_HEALTH_MAX, RANDOM_MAX_HEALTH_MIN,
    RANDOM_THRESHOLD_MIN,
};

/// Thresholds and effect tables of the health rule.
///
/// Crowd tables are indexed by active-neighbour count (0..=8), personal tables
/// by neighbour slot (0..8). A cell uses the `live_*` tables when it is itself
/// active and the `dead_*` tables otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleConfig {
    pub max_health: i32,
    pub active_threshold: i32,
    pub live_crowd_effect: [i32; CROWD_TABLE_LEN],
    pub live_personal_effect: [i32; NEIGHBOR_COUNT],
    pub dead_crowd_effect: [i32; CROWD_TABLE_LEN],
    pub dead_personal_effect: [i32; NEIGHBOR_COUNT],
}

impl Default for RuleConfig {
    /// A static rule: every delta is zero.
    fn default() -> Self {
        Self {
            max_health: 100,
            active_threshold: 50,
            live_crowd_effect: [0; CROWD_TABLE_LEN],
            live_personal_effect: [0; NEIGHBOR_COUNT],
            dead_crowd_effect: [0; CROWD_TABLE_LEN],
            dead_personal_effect: [0; NEIGHBOR_COUNT],
        }
    }
}

impl RuleConfig {
    /// Draw a random rule.
    ///
    /// `max_health` is in `[10, 200)`, `active_threshold` in `[5, max_health)`
    /// and every table entry in `[-max_health/2, max_health/2)`.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let max_health = rng.range(RANDOM_MAX_HEALTH_MIN, RANDOM_MAX_HEALTH_MAX);
        let active_threshold = rng.range(RANDOM_THRESHOLD_MIN, max_health);
        let max_change = max_health / 2;

        let mut config = Self {
            max_health,
            active_threshold,
            ..Self::default()
        };
        for i in 0..NEIGHBOR_COUNT {
            config.live_crowd_effect[i] = rng.range(-max_change, max_change);
            config.live_personal_effect[i] = rng.range(-max_change, max_change);
            config.dead_crowd_effect[i] = rng.range(-max_change, max_change);
            config.dead_personal_effect[i] = rng.range(-max_change, max_change);
        }
        config.live_crowd_effect[NEIGHBOR_COUNT] = rng.range(-max_change, max_change);
        config.dead_crowd_effect[NEIGHBOR_COUNT] = rng.range(-max_change, max_change);
        config
    }

    /// Upper clamp bound for cell health. Never negative.
    #[inline]
    pub fn health_ceiling(&self) -> i32 {
        self.max_health.max(0)
    }

    /// Whether a health value counts as active
    #[inline]
    pub fn is_active_health(&self, health: i32) -> bool {
        health >= self.active_threshold
    }

    /// Crowd effect for a cell that is (`live`) or is not active
    #[inline]
    pub fn crowd_effect(&self, live: bool, count: usize) -> i32 {
        if live {
            self.live_crowd_effect[count]
        } else {
            self.dead_crowd_effect[count]
        }
    }

    /// Personal effect of an active neighbour in `slot`
    #[inline]
    pub fn personal_effect(&self, live: bool, slot: usize) -> i32 {
        if live {
            self.live_personal_effect[slot]
        } else {
            self.dead_personal_effect[slot]
        }
    }

    /// Parse the six-line text format.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let mut tokens = Tokens::new(text);
        let max_health = tokens.next_i32("max_health")?;
        let active_threshold = tokens.next_i32("active_threshold")?;
        let live_crowd_effect = tokens.next_table("live_crowd_effect")?;
        let live_personal_effect = tokens.next_table("live_personal_effect")?;
        let dead_crowd_effect = tokens.next_table("dead_crowd_effect")?;
        let dead_personal_effect = tokens.next_table("dead_personal_effect")?;
        tokens.finish()?;

        Ok(Self {
            max_health,
            active_threshold,
            live_crowd_effect,
            live_personal_effect,
            dead_crowd_effect,
            dead_personal_effect,
        })
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let config = Self::parse(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the six-line text format to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| CoreError::io(path, e))?;
        log::info!("Wrote config to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.max_health)?;
        writeln!(f, "{}", self.active_threshold)?;
        write_table(f, &self.live_crowd_effect)?;
        write_table(f, &self.live_personal_effect)?;
        write_table(f, &self.dead_crowd_effect)?;
        write_table(f, &self.dead_personal_effect)
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, table: &[i32]) -> fmt::Result {
    for (i, v) in table.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str("\n")
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_named(&mut self, field: impl FnOnce() -> String) -> Result<i32, CoreError> {
        let Some(token) = self.inner.next() else {
            return Err(CoreError::MissingValue { field: field() });
        };
        token.parse::<i32>().map_err(|_| CoreError::InvalidValue {
            field: field(),
            token: token.to_string(),
        })
    }

    fn next_i32(&mut self, field: &str) -> Result<i32, CoreError> {
        self.next_named(|| field.to_string())
    }

    fn next_table<const N: usize>(&mut self, name: &str) -> Result<[i32; N], CoreError> {
        let mut table = [0; N];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = self.next_named(|| format!("{name}[{i}]"))?;
        }
        Ok(table)
    }

    fn finish(mut self) -> Result<(), CoreError> {
        match self.inner.next() {
            Some(token) => Err(CoreError::TrailingData {
                token: token.to_string(),
            }),
            None => Ok(()),
        }
    }
}
