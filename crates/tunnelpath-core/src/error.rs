use std::fmt;

use crate::geom::Point;

/// Errors that can occur when building a [`Board`](crate::Board) or deriving
/// its start, goal and tunnel table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board has no cells.
    Empty,
    /// Line `line` (0-based) does not have the width of the first line.
    InconsistentSize { line: usize },
    /// A character that is not a terrain symbol.
    InvalidSymbol { ch: char, pos: Point },
    MissingStart,
    MissingGoal,
    DuplicateStart { first: Point, second: Point },
    DuplicateGoal { first: Point, second: Point },
    /// A tunnel digit that appears only once.
    UnmatchedTunnel { digit: u8, pos: Point },
    /// A tunnel digit that appears more than twice.
    OvercrowdedTunnel { digit: u8, pos: Point },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board: no cells"),
            Self::InconsistentSize { line } => {
                write!(f, "board: line {line} has an inconsistent width")
            }
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "board: invalid symbol \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "board: start location not found"),
            Self::MissingGoal => write!(f, "board: goal location not found"),
            Self::DuplicateStart { first, second } => {
                write!(f, "board: multiple starts at {first} and {second}")
            }
            Self::DuplicateGoal { first, second } => {
                write!(f, "board: multiple goals at {first} and {second}")
            }
            Self::UnmatchedTunnel { digit, pos } => {
                write!(f, "board: tunnel {digit} at {pos} has no other end")
            }
            Self::OvercrowdedTunnel { digit, pos } => {
                write!(f, "board: tunnel {digit} has a third entrance at {pos}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
