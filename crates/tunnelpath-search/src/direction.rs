use std::fmt;

use tunnelpath_core::Point;

/// One of the nine moves available from a cell: the eight compass steps plus
/// the zero-displacement tunnel pseudo-move [`Direction::Enter`].
///
/// `Up` is toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    RightDown,
    Down,
    LeftDown,
    Left,
    LeftUp,
    Up,
    RightUp,
    Enter,
}

impl Direction {
    /// Displacement of the move. [`Direction::Enter`] has none.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Right => Point::new(1, 0),
            Self::RightDown => Point::new(1, 1),
            Self::Down => Point::new(0, 1),
            Self::LeftDown => Point::new(-1, 1),
            Self::Left => Point::new(-1, 0),
            Self::LeftUp => Point::new(-1, -1),
            Self::Up => Point::new(0, -1),
            Self::RightUp => Point::new(1, -1),
            Self::Enter => Point::ZERO,
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::RightDown | Self::LeftDown | Self::LeftUp | Self::RightUp
        )
    }

    /// The move that exactly undoes this one. The tunnel move has none.
    pub const fn reverse(self) -> Option<Self> {
        let r = match self {
            Self::Right => Self::Left,
            Self::RightDown => Self::LeftUp,
            Self::Down => Self::Up,
            Self::LeftDown => Self::RightUp,
            Self::Left => Self::Right,
            Self::LeftUp => Self::RightDown,
            Self::Up => Self::Down,
            Self::RightUp => Self::LeftDown,
            Self::Enter => return None,
        };
        Some(r)
    }

    /// Path token used in reports.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Right => "R",
            Self::RightDown => "RD",
            Self::Down => "D",
            Self::LeftDown => "LD",
            Self::Left => "L",
            Self::LeftUp => "LU",
            Self::Up => "U",
            Self::RightUp => "RU",
            Self::Enter => "Ent",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Rotational order in which the compass moves are tried, starting from
/// [`Direction::Right`]. The tunnel move always comes last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    const CLOCKWISE: [Direction; 9] = [
        Direction::Right,
        Direction::RightDown,
        Direction::Down,
        Direction::LeftDown,
        Direction::Left,
        Direction::LeftUp,
        Direction::Up,
        Direction::RightUp,
        Direction::Enter,
    ];

    const COUNTER_CLOCKWISE: [Direction; 9] = [
        Direction::Right,
        Direction::RightUp,
        Direction::Up,
        Direction::LeftUp,
        Direction::Left,
        Direction::LeftDown,
        Direction::Down,
        Direction::RightDown,
        Direction::Enter,
    ];

    /// The full expansion order for this rotation.
    #[inline]
    pub const fn order(self) -> &'static [Direction; 9] {
        match self {
            Self::Clockwise => &Self::CLOCKWISE,
            Self::CounterClockwise => &Self::COUNTER_CLOCKWISE,
        }
    }
}
