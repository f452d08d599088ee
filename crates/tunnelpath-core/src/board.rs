//! The [`Board`] type: an immutable-after-construction grid of [`Terrain`].
//!
//! Boards are parsed from text, one line per row, one symbol per cell.
//! Row 0 is the first line.

use std::fmt;

use crate::error::BoardError;
use crate::geom::{Point, Range};
use crate::terrain::{Terrain, TerrainCounts};

/// A rectangular grid of terrain cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Terrain>,
    bounds: Range,
}

impl Board {
    /// Create a board from row-major cells.
    ///
    /// `cells.len()` must equal `width * height` and both must be positive.
    pub fn new(width: i32, height: i32, cells: Vec<Terrain>) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::Empty);
        }
        if cells.len() != (width as usize) * (height as usize) {
            return Err(BoardError::InconsistentSize {
                line: cells.len() / width as usize,
            });
        }
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width, height),
        })
    }

    /// Create a board filled with a single terrain.
    pub fn filled(width: i32, height: i32, t: Terrain) -> Result<Self, BoardError> {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self::new(width, height, vec![t; len])
    }

    /// Parse a board from text.
    ///
    /// Every line must have the same width. Trailing newlines are ignored,
    /// as is a `'\r'` at the end of a line.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        Self::from_rows(s.trim_end_matches(['\n', '\r']).lines())
    }

    /// Build a board from individual rows.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<i32> = None;
        let mut height: i32 = 0;

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref().trim_end_matches('\r');
            let mut x: i32 = 0;
            for ch in row.chars() {
                let pos = Point::new(x, y as i32);
                let t = Terrain::from_char(ch).ok_or(BoardError::InvalidSymbol { ch, pos })?;
                cells.push(t);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => return Err(BoardError::InconsistentSize { line: y }),
                Some(_) => {}
            }
            height += 1;
        }

        Self::new(width.unwrap_or(0), height, cells)
    }

    /// The bounding range of the board, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// Terrain at `p`, or `None` if `p` is off the board.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Terrain> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Overwrite the terrain at `p`. Does nothing if `p` is off the board.
    pub fn set(&mut self, p: Point, t: Terrain) {
        if !self.bounds.contains(p) {
            return;
        }
        let i = self.index(p);
        self.cells[i] = t;
    }

    /// Row-major iterator over `(Point, Terrain)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Occurrence counts of every terrain kind.
    pub fn counts(&self) -> TerrainCounts {
        self.cells.iter().copied().collect()
    }

    /// First cell holding `t`, in row-major order.
    pub fn find(&self, t: Terrain) -> Option<Point> {
        self.iter().find(|&(_, c)| c == t).map(|(p, _)| p)
    }

    /// Locate the unique start and goal cells.
    pub fn endpoints(&self) -> Result<(Point, Point), BoardError> {
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;
        for (p, t) in self.iter() {
            match t {
                Terrain::Start => match start {
                    Some(first) => return Err(BoardError::DuplicateStart { first, second: p }),
                    None => start = Some(p),
                },
                Terrain::Goal => match goal {
                    Some(first) => return Err(BoardError::DuplicateGoal { first, second: p }),
                    None => goal = Some(p),
                },
                _ => {}
            }
        }
        let start = start.ok_or(BoardError::MissingStart)?;
        let goal = goal.ok_or(BoardError::MissingGoal)?;
        Ok((start, goal))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width() as usize;
        for (i, row) in self.cells.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{t}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S-#-
-~#^
--*G
";

    #[test]
    fn parse_and_size() {
        let b = Board::parse(ROOM).unwrap();
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 3);
        assert_eq!(b.len(), 12);
        assert_eq!(b.at(Point::new(0, 0)), Some(Terrain::Start));
        assert_eq!(b.at(Point::new(1, 1)), Some(Terrain::Pond));
        assert_eq!(b.at(Point::new(3, 2)), Some(Terrain::Goal));
        assert_eq!(b.at(Point::new(4, 0)), None);
        assert_eq!(b.at(Point::new(0, -1)), None);
    }

    #[test]
    fn display_round_trip() {
        let b = Board::parse(ROOM).unwrap();
        assert_eq!(b.to_string(), ROOM.trim_end());
    }

    #[test]
    fn crlf_lines_are_accepted() {
        let b = Board::parse("S-\r\n-G\r\n").unwrap();
        assert_eq!(b.width(), 2);
        assert_eq!(b.at(Point::new(1, 1)), Some(Terrain::Goal));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            Board::parse("S--\n-G\n"),
            Err(BoardError::InconsistentSize { line: 1 })
        );
    }

    #[test]
    fn invalid_symbol_is_rejected() {
        assert_eq!(
            Board::parse("S-\n.G"),
            Err(BoardError::InvalidSymbol {
                ch: '.',
                pos: Point::new(0, 1)
            })
        );
    }

    #[test]
    fn empty_board_is_rejected() {
        assert_eq!(Board::parse(""), Err(BoardError::Empty));
    }

    #[test]
    fn endpoints() {
        let b = Board::parse(ROOM).unwrap();
        assert_eq!(b.endpoints(), Ok((Point::new(0, 0), Point::new(3, 2))));

        let b = Board::parse("S-G\nG--").unwrap();
        assert_eq!(
            b.endpoints(),
            Err(BoardError::DuplicateGoal {
                first: Point::new(2, 0),
                second: Point::new(0, 1)
            })
        );
        let b = Board::parse("--G").unwrap();
        assert_eq!(b.endpoints(), Err(BoardError::MissingStart));
    }

    #[test]
    fn counts_and_set() {
        let mut b = Board::parse(ROOM).unwrap();
        let c = b.counts();
        assert_eq!(c.wall, 2);
        assert_eq!(c.floor, 5);
        assert_eq!(c.open_cells(), 10);
        b.set(Point::new(1, 0), Terrain::Wall);
        b.set(Point::new(9, 9), Terrain::Wall);
        assert_eq!(b.counts().wall, 3);
        assert_eq!(b.find(Terrain::Supply), Some(Point::new(2, 2)));
    }
}
