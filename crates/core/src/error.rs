use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the automaton core.
///
/// None of these are raised by the rule or the stepper; they come from
/// reading and writing config and pattern files.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text ended before this field.
    #[error("config is missing a value for {field}")]
    MissingValue {
        /// Field name, e.g. `live_crowd_effect[3]`.
        field: String,
    },

    /// A config token could not be parsed as an integer.
    #[error("config value for {field} is not an integer: {token:?}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Offending token.
        token: String,
    },

    /// Config text continues after the last table.
    #[error("unexpected trailing config data: {token:?}")]
    TrailingData {
        /// First extra token.
        token: String,
    },

    /// A pattern line is neither a record, a comment, nor blank.
    #[error("pattern line {line} is not a `[x,y]=hp` record: {text:?}")]
    InvalidPattern {
        /// 1-based line number.
        line: usize,
        /// The line as read.
        text: String,
    },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}
