//! Terminal runner (default binary).
//!
//! Loads or generates a rule, seeds the grid, then alternates between input,
//! pacing and rendering until the user quits.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_cells::cli::Cli;
use tui_cells::core::{load_pattern, Automaton, RuleConfig};
use tui_cells::engine::{ActionOutcome, Session};
use tui_cells::input::{handle_key_event, should_quit};
use tui_cells::term::{FrameBuffer, GridView, RenderThrottle, TerminalRenderer, Viewport};
use tui_cells::types::PAUSED_REDRAW_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();

    cli.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = match &cli.config {
        Some(path) => RuleConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => {
            let config = RuleConfig::random(&mut rng);
            log::info!("Generated config:\n{config}");
            config
        }
    };

    if cli.print_config {
        print!("{config}");
        return Ok(());
    }

    let mut automaton = Automaton::new(cli.size, cli.size, config);
    automaton.randomize(&mut rng);
    if let Some(path) = &cli.pattern {
        load_pattern(&mut automaton, path)
            .with_context(|| format!("failed to load pattern {}", path.display()))?;
    }

    let mut session = Session::new(automaton, rng)
        .with_config_path(cli.reload_path())
        .with_save_path(cli.save_path.clone())
        .with_tick_interval_ms(cli.tick_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        log::error!("failed to restore terminal: {e}");
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session<StdRng>) -> Result<()> {
    let view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(PAUSED_REDRAW_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, || session.fingerprint(), session.paused()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(session, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the next generation is due.
        let timeout = if session.paused() {
            Duration::from_millis(PAUSED_REDRAW_MS)
        } else {
            Duration::from_millis(session.ms_until_next_tick() as u64)
                .saturating_sub(last_tick.elapsed())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if let ActionOutcome::Quit = session.apply_action(action) {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick. Only whole milliseconds are handed over; the rest stays on the clock.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);
        let steps = session.tick(elapsed_ms);
        if steps > 1 {
            log::debug!("caught up {steps} generations");
        }
    }
}
