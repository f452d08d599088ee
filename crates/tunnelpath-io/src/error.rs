use std::fmt;
use std::io;

use tunnelpath_core::BoardError;
use tunnelpath_search::ModelError;

/// Errors that can occur while reading a problem file or writing results.
#[derive(Debug)]
pub enum ProblemError {
    Io(io::Error),
    /// The file ended before the named header line.
    MissingLine(&'static str),
    UnknownAlgorithm(String),
    /// The order line does not start with `clockwise` or `counter-clockwise`.
    UnknownOrder(String),
    /// The order line names something other than `old-first` or `new-first`.
    UnknownTieBreak(String),
    /// The dimension line is not `<rows>x<cols>` with both positive.
    BadDimensions(String),
    /// A board line is narrower than the declared column count.
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The file has fewer board lines than declared.
    MissingRows { expected: usize, found: usize },
    Board(BoardError),
    Model(ModelError),
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "problem: {e}"),
            Self::MissingLine(what) => write!(f, "problem: missing {what} line"),
            Self::UnknownAlgorithm(s) => write!(f, "problem: unknown algorithm \u{201c}{s}\u{201d}"),
            Self::UnknownOrder(s) => write!(f, "problem: unknown expansion order \u{201c}{s}\u{201d}"),
            Self::UnknownTieBreak(s) => write!(f, "problem: unknown tie-break \u{201c}{s}\u{201d}"),
            Self::BadDimensions(s) => write!(f, "problem: bad dimensions \u{201c}{s}\u{201d}"),
            Self::ShortRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "problem: board line {row} has {found} symbols, expected {expected}"
            ),
            Self::MissingRows { expected, found } => {
                write!(f, "problem: expected {expected} board lines, found {found}")
            }
            Self::Board(e) => write!(f, "problem: {e}"),
            Self::Model(e) => write!(f, "problem: {e}"),
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Board(e) => Some(e),
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProblemError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<BoardError> for ProblemError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<ModelError> for ProblemError {
    fn from(e: ModelError) -> Self {
        // Board problems read the same whichever layer found them.
        match e {
            ModelError::Board(b) => Self::Board(b),
            other => Self::Model(other),
        }
    }
}
