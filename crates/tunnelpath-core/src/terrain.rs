//! Terrain symbols and per-board terrain statistics.

use std::fmt;

/// A single board cell.
///
/// Each variant corresponds to one map-file symbol; see [`Terrain::from_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// `-`
    Floor,
    /// `S`
    Start,
    /// `G`
    Goal,
    /// `#`
    Wall,
    /// `*`, sets the supply flag when entered.
    Supply,
    /// `~`, only passable while supplied.
    Pond,
    /// `^`, expensive, more so diagonally.
    Ice,
    /// `0`..=`9`, one end of a paired tunnel.
    Tunnel(u8),
}

impl Terrain {
    /// Parse a map symbol. Returns `None` for unknown symbols.
    pub fn from_char(ch: char) -> Option<Self> {
        let t = match ch {
            '-' => Self::Floor,
            'S' => Self::Start,
            'G' => Self::Goal,
            '#' => Self::Wall,
            '*' => Self::Supply,
            '~' => Self::Pond,
            '^' => Self::Ice,
            '0'..='9' => Self::Tunnel(ch as u8 - b'0'),
            _ => return None,
        };
        Some(t)
    }

    /// The map symbol of this terrain.
    pub fn to_char(self) -> char {
        match self {
            Self::Floor => '-',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Wall => '#',
            Self::Supply => '*',
            Self::Pond => '~',
            Self::Ice => '^',
            Self::Tunnel(d) => char::from(b'0' + d.min(9)),
        }
    }

    /// Tunnel digit, if this is a tunnel entrance.
    #[inline]
    pub fn tunnel(self) -> Option<u8> {
        match self {
            Self::Tunnel(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Occurrence counts of every terrain kind on a board.
///
/// Tunnel entrances are counted per digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerrainCounts {
    pub floor: usize,
    pub start: usize,
    pub goal: usize,
    pub wall: usize,
    pub supply: usize,
    pub pond: usize,
    pub ice: usize,
    pub tunnels: [usize; 10],
}

impl TerrainCounts {
    /// Count one more cell of kind `t`.
    pub fn add(&mut self, t: Terrain) {
        match t {
            Terrain::Floor => self.floor += 1,
            Terrain::Start => self.start += 1,
            Terrain::Goal => self.goal += 1,
            Terrain::Wall => self.wall += 1,
            Terrain::Supply => self.supply += 1,
            Terrain::Pond => self.pond += 1,
            Terrain::Ice => self.ice += 1,
            Terrain::Tunnel(d) => self.tunnels[d as usize] += 1,
        }
    }

    /// Number of occurrences of `t`.
    pub fn get(&self, t: Terrain) -> usize {
        match t {
            Terrain::Floor => self.floor,
            Terrain::Start => self.start,
            Terrain::Goal => self.goal,
            Terrain::Wall => self.wall,
            Terrain::Supply => self.supply,
            Terrain::Pond => self.pond,
            Terrain::Ice => self.ice,
            Terrain::Tunnel(d) => self.tunnels[d as usize],
        }
    }

    /// Total number of tunnel entrances, all digits together.
    pub fn tunnel_total(&self) -> usize {
        self.tunnels.iter().sum()
    }

    /// Number of cells that are not walls.
    pub fn open_cells(&self) -> usize {
        self.floor
            + self.start
            + self.goal
            + self.supply
            + self.pond
            + self.ice
            + self.tunnel_total()
    }
}

impl FromIterator<Terrain> for TerrainCounts {
    fn from_iter<I: IntoIterator<Item = Terrain>>(iter: I) -> Self {
        let mut counts = Self::default();
        for t in iter {
            counts.add(t);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for ch in "-SG#*~^0123456789".chars() {
            let t = Terrain::from_char(ch).unwrap();
            assert_eq!(t.to_char(), ch);
        }
        assert_eq!(Terrain::from_char('7'), Some(Terrain::Tunnel(7)));
        assert_eq!(Terrain::from_char('.'), None);
        assert_eq!(Terrain::from_char('s'), None);
    }

    #[test]
    fn counts_from_symbols() {
        let counts: TerrainCounts = "S--#~~^11G"
            .chars()
            .filter_map(Terrain::from_char)
            .collect();
        assert_eq!(counts.floor, 2);
        assert_eq!(counts.wall, 1);
        assert_eq!(counts.pond, 2);
        assert_eq!(counts.get(Terrain::Tunnel(1)), 2);
        assert_eq!(counts.tunnel_total(), 2);
        assert_eq!(counts.open_cells(), 9);
    }
}
