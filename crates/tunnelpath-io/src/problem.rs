//! Problem files.
//!
//! A problem file holds five header lines followed by the board:
//!
//! ```text
//! A*
//! clockwise old-first
//! with time
//! no open
//! 3x7
//! S1-----
//! ######-
//! G-----1
//! ```
//!
//! Board lines longer than the declared width are cut; lines after the
//! declared height are ignored.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tunnelpath_core::Board;
use tunnelpath_search::{Algorithm, GridModel, Rotation, SearchConfig, TieBreak};

use crate::error::ProblemError;
use crate::report::Report;

const WITH_TIME: &str = "with time";
const WITH_OPEN: &str = "with open";

/// File-format word for an expansion order.
pub fn rotation_word(r: Rotation) -> &'static str {
    match r {
        Rotation::Clockwise => "clockwise",
        Rotation::CounterClockwise => "counter-clockwise",
    }
}

/// File-format word for a tie-break rule.
pub fn tie_break_word(t: TieBreak) -> &'static str {
    match t {
        TieBreak::OldFirst => "old-first",
        TieBreak::NewFirst => "new-first",
    }
}

/// Parse the order line: a rotation, optionally followed by a tie-break.
pub fn parse_order(line: &str) -> Result<(Rotation, TieBreak), ProblemError> {
    let mut words = line.split_whitespace();
    let rotation = match words.next() {
        Some("clockwise") => Rotation::Clockwise,
        Some("counter-clockwise") => Rotation::CounterClockwise,
        _ => return Err(ProblemError::UnknownOrder(line.to_string())),
    };
    let tie_break = match words.next() {
        None => TieBreak::default(),
        Some("old-first") => TieBreak::OldFirst,
        Some("new-first") => TieBreak::NewFirst,
        Some(other) => return Err(ProblemError::UnknownTieBreak(other.to_string())),
    };
    Ok((rotation, tie_break))
}

/// Parse a `<rows>x<cols>` line.
pub fn parse_dimensions(line: &str) -> Result<(usize, usize), ProblemError> {
    let bad = || ProblemError::BadDimensions(line.to_string());
    let (rows, cols) = line.trim().split_once('x').ok_or_else(bad)?;
    let rows: usize = rows.trim().parse().map_err(|_| bad())?;
    let cols: usize = cols.trim().parse().map_err(|_| bad())?;
    if rows == 0 || cols == 0 {
        return Err(bad());
    }
    Ok((rows, cols))
}

/// Read `rows` board lines of at least `cols` symbols each and build the
/// board from their first `cols` symbols.
pub fn parse_board<'a, I>(lines: I, rows: usize, cols: usize) -> Result<Board, ProblemError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut grid = Vec::with_capacity(rows);
    for line in lines.into_iter().take(rows) {
        let line = line.trim_end_matches('\r');
        let found = line.chars().count();
        if found < cols {
            return Err(ProblemError::ShortRow {
                row: grid.len(),
                expected: cols,
                found,
            });
        }
        if found > cols {
            log::debug!("board line {} cut to {cols} symbols", grid.len());
        }
        grid.push(line.chars().take(cols).collect::<String>());
    }
    if grid.len() < rows {
        return Err(ProblemError::MissingRows {
            expected: rows,
            found: grid.len(),
        });
    }
    Ok(Board::from_rows(grid)?)
}

/// A fully parsed problem: what to run, how, and on which map.
#[derive(Debug, Clone)]
pub struct Problem {
    pub algorithm: Algorithm,
    pub config: SearchConfig,
    /// Append the wall-clock time to the report.
    pub with_time: bool,
    pub model: GridModel,
}

impl Problem {
    pub fn parse(s: &str) -> Result<Self, ProblemError> {
        let mut lines = s.lines();
        let mut header = |what: &'static str| {
            lines
                .next()
                .map(str::trim_end)
                .ok_or(ProblemError::MissingLine(what))
        };

        let name = header("algorithm")?;
        let algorithm: Algorithm = name
            .trim()
            .parse()
            .map_err(|_| ProblemError::UnknownAlgorithm(name.to_string()))?;
        let (rotation, tie_break) = parse_order(header("order")?)?;
        let with_time = header("timing")?.trim() == WITH_TIME;
        let with_open = header("open trace")?.trim() == WITH_OPEN;
        let (rows, cols) = parse_dimensions(header("dimensions")?)?;

        let board = parse_board(lines, rows, cols)?;
        let model = GridModel::from_board(board)?;
        let config = SearchConfig::new(rotation, tie_break).with_trace(with_open);
        log::debug!(
            "problem: {algorithm} on {rows}x{cols}, {} {}",
            rotation_word(rotation),
            tie_break_word(tie_break)
        );

        Ok(Self {
            algorithm,
            config,
            with_time,
            model,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Run the problem's algorithm, timing it if asked to.
    pub fn run(&self) -> Report {
        let started = Instant::now();
        let outcome = self.algorithm.run(&self.model, self.config);
        let elapsed = self.with_time.then(|| started.elapsed());
        Report { outcome, elapsed }
    }
}
