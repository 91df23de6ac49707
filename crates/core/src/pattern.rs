//! Pattern files: seed individual cells from `[x,y]=hp` records.
//!
//! ```text
//! # glider-ish seed
//! [10,10]=80
//! [11,10]=80   anything after the record is ignored
//! [12,10]=80hp  so is a suffix glued to the health value
//! ```

use std::fs;
use std::path::Path;

use crate::automaton::Automaton;
use crate::error::CoreError;

/// One `[x,y]=hp` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternCell {
    pub x: i32,
    pub y: i32,
    pub health: i32,
}

/// Result of applying a pattern to an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternReport {
    /// Records written into the grid
    pub applied: usize,
    /// Records outside the grid
    pub skipped: usize,
}

/// Parse pattern text. Blank lines and `#` comments are skipped.
pub fn parse_pattern(text: &str) -> Result<Vec<PatternCell>, CoreError> {
    let mut cells = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_record(trimmed) {
            Some(cell) => cells.push(cell),
            None => {
                return Err(CoreError::InvalidPattern {
                    line: i + 1,
                    text: line.to_string(),
                })
            }
        }
    }
    Ok(cells)
}

fn parse_record(line: &str) -> Option<PatternCell> {
    let rest = line.strip_prefix('[')?;
    let (coords, rest) = rest.split_once(']')?;
    let (x, y) = coords.split_once(',')?;
    let rest = rest.trim_start().strip_prefix('=')?;

    Some(PatternCell {
        x: x.trim().parse().ok()?,
        y: y.trim().parse().ok()?,
        health: leading_int(rest.trim_start())?,
    })
}

/// Parse the optionally signed integer prefix of `s`, ignoring what follows.
fn leading_int(s: &str) -> Option<i32> {
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Write parsed records into `automaton`, clamping health.
pub fn apply_pattern(automaton: &mut Automaton, cells: &[PatternCell]) -> PatternReport {
    let mut report = PatternReport::default();
    for cell in cells {
        if automaton.set(cell.x, cell.y, cell.health) {
            report.applied += 1;
        } else {
            log::warn!(
                "Pattern cell [{},{}] is outside the {}x{} grid",
                cell.x,
                cell.y,
                automaton.width(),
                automaton.height()
            );
            report.skipped += 1;
        }
    }
    report
}

/// Read a pattern file and apply it. Nothing is written if parsing fails.
pub fn load_pattern(
    automaton: &mut Automaton,
    path: impl AsRef<Path>,
) -> Result<PatternReport, CoreError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    let cells = parse_pattern(&text)?;
    let report = apply_pattern(automaton, &cells);
    log::info!(
        "Loaded pattern from {}: {} cells applied, {} skipped",
        path.display(),
        report.applied,
        report.skipped
    );
    Ok(report)
}
