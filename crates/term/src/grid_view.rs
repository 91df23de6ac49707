//! GridView: maps a session's automaton into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the visible grid window, then (when the terminal is
//! wide enough) an info panel. The bottom row is a status line.

use crate::core::{Automaton, RandomSource};
use crate::engine::Session;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Narrowest grid window kept when deciding whether the panel fits.
const MIN_GRID_COLS: u16 = 16;

const BORDER_GLYPH: char = '▏';
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);

const KEY_HINTS: [&str; 8] = [
    "p     pause",
    "r     randomize",
    "s     save rule",
    "l     reload rule",
    "n     new rule",
    "b     borders",
    "arrows pan",
    "q     quit",
];

/// Map health to a blue intensity: 0 is black, `max_health` is full blue.
pub fn health_color(health: i32, max_health: i32) -> Rgb {
    if max_health <= 0 || health <= 0 {
        return Rgb::BLACK;
    }
    let h = health.min(max_health) as i64;
    let saturation = (255 * h / max_health as i64) as u8;
    Rgb::new(0, 0, saturation)
}

/// A lightweight terminal renderer for the automaton.
pub struct GridView {
    /// Info panel width in terminal columns.
    panel_w: u16,
}

impl Default for GridView {
    fn default() -> Self {
        Self { panel_w: 22 }
    }
}

impl GridView {
    pub fn new(panel_w: u16) -> Self {
        Self { panel_w }
    }

    /// Columns used by the grid window for a given viewport width.
    pub fn grid_columns(&self, viewport: Viewport) -> u16 {
        if self.panel_fits(viewport) {
            viewport.width - self.panel_w
        } else {
            viewport.width
        }
    }

    fn panel_fits(&self, viewport: Viewport) -> bool {
        self.panel_w > 0 && viewport.width >= self.panel_w.saturating_add(MIN_GRID_COLS)
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into<R: RandomSource>(
        &self,
        session: &Session<R>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        if viewport.height == 0 || viewport.width == 0 {
            return;
        }

        let grid_rows = viewport.height - 1;
        let grid_cols = self.grid_columns(viewport);
        let automaton = session.automaton();

        if session.show_borders() {
            draw_bordered(fb, automaton, session.camera(), grid_cols, grid_rows);
        } else {
            draw_compact(fb, automaton, session.camera(), grid_cols, grid_rows);
        }

        if self.panel_fits(viewport) {
            self.draw_panel(fb, session, grid_cols + 1, grid_rows);
        }

        draw_status(fb, session, viewport.height - 1);

        if session.paused() {
            draw_overlay_text(fb, grid_cols, grid_rows, " PAUSED ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: RandomSource>(&self, session: &Session<R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_panel<R: RandomSource>(
        &self,
        fb: &mut FrameBuffer,
        session: &Session<R>,
        x: u16,
        rows: u16,
    ) {
        let label = CellStyle::default().bold();
        let value = CellStyle::colors(Rgb::new(200, 200, 200), Rgb::BLACK);
        let automaton = session.automaton();
        let config = automaton.config();
        let (cam_x, cam_y) = session.camera();

        let lines = [
            PanelLine::Label("GENERATION"),
            PanelLine::Unsigned(automaton.generation()),
            PanelLine::Blank,
            PanelLine::Label("STATE"),
            PanelLine::Text(if session.paused() { "PAUSED" } else { "RUNNING" }),
            PanelLine::Blank,
            PanelLine::Label("MAX HEALTH"),
            PanelLine::Signed(config.max_health as i64),
            PanelLine::Label("THRESHOLD"),
            PanelLine::Signed(config.active_threshold as i64),
            PanelLine::Blank,
            PanelLine::Label("GRID"),
            PanelLine::Pair(automaton.width() as u64, 'x', automaton.height() as u64),
            PanelLine::Label("CAMERA"),
            PanelLine::Pair(cam_x as u64, ',', cam_y as u64),
            PanelLine::Blank,
            PanelLine::Label("KEYS"),
        ];
        let hints = KEY_HINTS.iter().map(|&h| PanelLine::Hint(h));

        for (y, line) in lines.into_iter().chain(hints).enumerate() {
            if y >= rows as usize {
                break;
            }
            let y = y as u16;
            match line {
                PanelLine::Label(text) => {
                    fb.put_str(x, y, text, label);
                }
                PanelLine::Text(text) => {
                    fb.put_str(x, y, text, value);
                }
                PanelLine::Hint(text) => {
                    fb.put_str(x, y, text, value.dim());
                }
                PanelLine::Unsigned(v) => {
                    fb.put_u64(x, y, v, value);
                }
                PanelLine::Signed(v) => {
                    fb.put_i64(x, y, v, value);
                }
                PanelLine::Pair(a, sep, b) => {
                    let cx = fb.put_u64(x, y, a, value);
                    fb.put_char(cx, y, sep, value);
                    fb.put_u64(cx.saturating_add(1), y, b, value);
                }
                PanelLine::Blank => {}
            }
        }
    }
}

enum PanelLine<'a> {
    Label(&'a str),
    Text(&'a str),
    Hint(&'a str),
    Unsigned(u64),
    Signed(i64),
    Pair(u64, char, u64),
    Blank,
}

/// Two grid rows per terminal row using the upper half block.
fn draw_compact(
    fb: &mut FrameBuffer,
    automaton: &Automaton,
    camera: (usize, usize),
    cols: u16,
    rows: u16,
) {
    let max_health = automaton.config().max_health;
    for row in 0..rows {
        let gy = camera.1 + 2 * row as usize;
        for col in 0..cols {
            let gx = camera.0 + col as usize;
            let Some(top) = automaton.get(gx as i32, gy as i32) else {
                break;
            };
            let bottom = automaton
                .get(gx as i32, gy as i32 + 1)
                .map(|h| health_color(h, max_health))
                .unwrap_or(Rgb::BLACK);
            fb.put_half_block(col, row, health_color(top, max_health), bottom);
        }
    }
}

/// One grid cell per two columns, each cell led by a thin separator.
fn draw_bordered(
    fb: &mut FrameBuffer,
    automaton: &Automaton,
    camera: (usize, usize),
    cols: u16,
    rows: u16,
) {
    let max_health = automaton.config().max_health;
    for row in 0..rows {
        let gy = camera.1 + row as usize;
        for cell_x in 0..cols / 2 {
            let gx = camera.0 + cell_x as usize;
            let Some(health) = automaton.get(gx as i32, gy as i32) else {
                break;
            };
            let color = health_color(health, max_health);
            let px = cell_x * 2;
            fb.put_char(px, row, BORDER_GLYPH, CellStyle::colors(BORDER_FG, color));
            fb.put_char(px + 1, row, ' ', CellStyle::colors(BORDER_FG, color));
        }
    }
}

fn draw_status<R: RandomSource>(fb: &mut FrameBuffer, session: &Session<R>, y: u16) {
    let style = CellStyle::colors(Rgb::BLACK, Rgb::new(200, 200, 200));
    fb.fill_rect(0, y, fb.width(), 1, ' ', style);

    let mut cx = fb.put_str(0, y, " gen ", style);
    cx = fb.put_u64(cx, y, session.automaton().generation(), style);
    cx = fb.put_str(cx, y, if session.paused() { "  PAUSED" } else { "  RUNNING" }, style);
    if let Some(msg) = session.status() {
        cx = fb.put_str(cx, y, "  | ", style);
        fb.put_str(cx, y, msg, style.bold());
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, cols: u16, rows: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = cols.saturating_sub(text_w) / 2;
    let y = rows / 2;
    let style = CellStyle::colors(Rgb::WHITE, Rgb::BLACK).bold();
    fb.put_str(x, y, text, style);
}
