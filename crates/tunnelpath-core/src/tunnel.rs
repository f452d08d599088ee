//! Paired tunnel entrances.

use crate::board::Board;
use crate::error::BoardError;
use crate::geom::Point;
use crate::terrain::Terrain;

/// Number of distinct tunnel digits.
pub const TUNNEL_DIGITS: usize = 10;

/// Maps each tunnel digit to its two entrances.
///
/// Each digit is used by at most one pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TunnelTable {
    pairs: [Option<(Point, Point)>; TUNNEL_DIGITS],
}

impl TunnelTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the tunnel pairs present on `board`.
    ///
    /// Every digit on the board must appear exactly twice.
    pub fn from_board(board: &Board) -> Result<Self, BoardError> {
        let mut seen: [Vec<Point>; TUNNEL_DIGITS] = Default::default();
        for (p, t) in board.iter() {
            if let Terrain::Tunnel(d) = t {
                let ends = &mut seen[d as usize];
                if ends.len() == 2 {
                    return Err(BoardError::OvercrowdedTunnel { digit: d, pos: p });
                }
                ends.push(p);
            }
        }

        let mut table = Self::new();
        for (d, ends) in seen.iter().enumerate() {
            match ends.as_slice() {
                [] => {}
                [a, b] => table.insert(d as u8, *a, *b),
                [a, ..] => {
                    return Err(BoardError::UnmatchedTunnel {
                        digit: d as u8,
                        pos: *a,
                    });
                }
            }
        }
        Ok(table)
    }

    /// Register (or replace) the pair for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in `0..=9`.
    pub fn insert(&mut self, digit: u8, a: Point, b: Point) {
        self.pairs[digit as usize] = Some((a, b));
    }

    /// The two entrances of `digit`, if it is in use.
    pub fn pair(&self, digit: u8) -> Option<(Point, Point)> {
        self.pairs.get(digit as usize).copied().flatten()
    }

    /// Given one entrance of `digit`, return the other one.
    pub fn other_end(&self, digit: u8, p: Point) -> Option<Point> {
        let (a, b) = self.pair(digit)?;
        if p == a {
            Some(b)
        } else if p == b {
            Some(a)
        } else {
            None
        }
    }

    /// All pairs in digit order.
    pub fn pairs(&self) -> impl Iterator<Item = (u8, Point, Point)> + '_ {
        self.pairs
            .iter()
            .enumerate()
            .filter_map(|(d, pair)| pair.map(|(a, b)| (d as u8, a, b)))
    }

    /// All entrances in digit order, both ends of each pair.
    pub fn entrances(&self) -> impl Iterator<Item = (u8, Point)> + '_ {
        self.pairs().flat_map(|(d, a, b)| [(d, a), (d, b)])
    }

    /// Number of pairs in use.
    pub fn len(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_discovered() {
        let b = Board::parse("S1-2\n-2-1\n---G").unwrap();
        let t = TunnelTable::from_board(&b).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.pair(1), Some((Point::new(1, 0), Point::new(3, 1))));
        assert_eq!(t.pair(2), Some((Point::new(3, 0), Point::new(1, 1))));
        assert_eq!(t.pair(3), None);
        assert_eq!(t.other_end(1, Point::new(3, 1)), Some(Point::new(1, 0)));
        assert_eq!(t.other_end(1, Point::new(0, 0)), None);
        let ends: Vec<u8> = t.entrances().map(|(d, _)| d).collect();
        assert_eq!(ends, vec![1, 1, 2, 2]);
    }

    #[test]
    fn lonely_digit_is_rejected() {
        let b = Board::parse("S-3G").unwrap();
        assert_eq!(
            TunnelTable::from_board(&b),
            Err(BoardError::UnmatchedTunnel {
                digit: 3,
                pos: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn third_entrance_is_rejected() {
        let b = Board::parse("S555G").unwrap();
        assert_eq!(
            TunnelTable::from_board(&b),
            Err(BoardError::OvercrowdedTunnel {
                digit: 5,
                pos: Point::new(3, 0)
            })
        );
    }

    #[test]
    fn no_tunnels() {
        let b = Board::parse("S-G").unwrap();
        let t = TunnelTable::from_board(&b).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.entrances().count(), 0);
    }
}
