use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::core::{Automaton, CoreError, RandomSource, RuleConfig};
use crate::types::{PanDirection, SimAction, DEFAULT_SAVE_PATH, MAX_CATCH_UP_STEPS, PAN_STEP, TICK_MS};

/// What happened when an action was applied.
#[derive(Debug)]
pub enum ActionOutcome {
    /// State changed
    Applied,
    /// Action had no effect in the current state (e.g. randomize while running)
    Ignored,
    /// Caller should leave the main loop
    Quit,
    /// A file operation failed; session state is unchanged
    Failed(CoreError),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

/// One running simulation: automaton, RNG, pause/border flags, pacing and camera.
#[derive(Debug)]
pub struct Session<R: RandomSource> {
    automaton: Automaton,
    rng: R,
    paused: bool,
    show_borders: bool,
    /// Where the rule config came from (reload target)
    config_path: Option<PathBuf>,
    save_path: PathBuf,
    tick_interval_ms: u32,
    tick_accum_ms: u32,
    camera: (usize, usize),
    status: Option<String>,
}

impl<R: RandomSource> Session<R> {
    pub fn new(automaton: Automaton, rng: R) -> Self {
        Self {
            automaton,
            rng,
            paused: false,
            show_borders: false,
            config_path: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            tick_interval_ms: TICK_MS,
            tick_accum_ms: 0,
            camera: (0, 0),
            status: None,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Interval between generations; 0 is treated as 1ms.
    pub fn with_tick_interval_ms(mut self, interval_ms: u32) -> Self {
        self.tick_interval_ms = interval_ms.max(1);
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn automaton_mut(&mut self) -> &mut Automaton {
        &mut self.automaton
    }

    pub fn config(&self) -> &RuleConfig {
        self.automaton.config()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn show_borders(&self) -> bool {
        self.show_borders
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Top-left grid cell of the visible window
    pub fn camera(&self) -> (usize, usize) {
        self.camera
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Last user-facing message (save/reload results)
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Time left until the next generation is due
    pub fn ms_until_next_tick(&self) -> u32 {
        self.tick_interval_ms.saturating_sub(self.tick_accum_ms)
    }

    /// Advance the clock by `elapsed_ms`, stepping once per elapsed interval.
    ///
    /// Returns the number of generations advanced. At most `MAX_CATCH_UP_STEPS`
    /// run per call; any further backlog is dropped.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if self.paused {
            return 0;
        }

        self.tick_accum_ms = self.tick_accum_ms.saturating_add(elapsed_ms);
        let mut steps = 0;
        while self.tick_accum_ms >= self.tick_interval_ms && steps < MAX_CATCH_UP_STEPS {
            self.automaton.tick();
            self.tick_accum_ms -= self.tick_interval_ms;
            steps += 1;
        }
        if self.tick_accum_ms >= self.tick_interval_ms {
            log::debug!("dropping {}ms of tick backlog", self.tick_accum_ms);
            self.tick_accum_ms %= self.tick_interval_ms;
        }
        steps
    }

    /// Apply a user action
    pub fn apply_action(&mut self, action: SimAction) -> ActionOutcome {
        log::debug!("action {}", action.as_str());
        match action {
            SimAction::TogglePause => {
                self.paused = !self.paused;
                self.tick_accum_ms = 0;
                ActionOutcome::Applied
            }
            SimAction::Randomize => {
                if !self.paused {
                    return ActionOutcome::Ignored;
                }
                self.automaton.randomize(&mut self.rng);
                ActionOutcome::Applied
            }
            SimAction::SaveConfig => self.save_config(),
            SimAction::ReloadConfig => self.reload_config(),
            SimAction::RegenerateConfig => {
                let config = RuleConfig::random(&mut self.rng);
                log::info!("Regenerated config:\n{config}");
                self.automaton.reset(config);
                self.automaton.randomize(&mut self.rng);
                self.status = Some("new random rule".to_string());
                ActionOutcome::Applied
            }
            SimAction::ToggleBorders => {
                self.show_borders = !self.show_borders;
                ActionOutcome::Applied
            }
            SimAction::Pan(dir) => self.pan(dir),
            SimAction::Quit => ActionOutcome::Quit,
        }
    }

    fn save_config(&mut self) -> ActionOutcome {
        match self.automaton.config().save(&self.save_path) {
            Ok(()) => {
                self.status = Some(format!("saved {}", self.save_path.display()));
                ActionOutcome::Applied
            }
            Err(e) => {
                log::warn!("Saving config failed: {e}");
                self.status = Some(format!("save failed: {e}"));
                ActionOutcome::Failed(e)
            }
        }
    }

    fn reload_config(&mut self) -> ActionOutcome {
        let Some(path) = self.config_path.as_deref() else {
            return ActionOutcome::Ignored;
        };
        match RuleConfig::load(path) {
            Ok(config) => {
                self.automaton.replace_config(config);
                self.status = Some(format!("reloaded {}", path.display()));
                ActionOutcome::Applied
            }
            Err(e) => {
                log::warn!("Reloading config failed, keeping current rule: {e}");
                self.status = Some(format!("reload failed: {e}"));
                ActionOutcome::Failed(e)
            }
        }
    }

    fn pan(&mut self, dir: PanDirection) -> ActionOutcome {
        let (dx, dy) = dir.step();
        let max_x = self.automaton.width().saturating_sub(1);
        let max_y = self.automaton.height().saturating_sub(1);
        let next = (
            shift(self.camera.0, dx, max_x),
            shift(self.camera.1, dy, max_y),
        );
        if next == self.camera {
            return ActionOutcome::Ignored;
        }
        self.camera = next;
        ActionOutcome::Applied
    }

    /// Cheap digest of everything a renderer shows; used to skip redundant frames.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.automaton.generation().hash(&mut h);
        self.paused.hash(&mut h);
        self.show_borders.hash(&mut h);
        self.camera.hash(&mut h);
        self.status.hash(&mut h);
        self.automaton.config().hash(&mut h);
        // Randomize keeps the generation; fold in the grid itself.
        self.automaton.current().hash(&mut h);
        h.finish()
    }
}

fn shift(pos: usize, dir: i32, max: usize) -> usize {
    match dir {
        d if d < 0 => pos.saturating_sub(PAN_STEP),
        d if d > 0 => pos.saturating_add(PAN_STEP).min(max),
        _ => pos,
    }
}
