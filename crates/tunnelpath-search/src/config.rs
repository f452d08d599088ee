use crate::direction::Rotation;

/// Which of two equally promising nodes is preferred.
///
/// Serial numbers grow with creation order, so `OldFirst` favors the lower
/// serial and `NewFirst` the higher one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    OldFirst,
    #[default]
    NewFirst,
}

impl TieBreak {
    /// Compare two serials so that the preferred one is `Less`.
    #[inline]
    pub fn compare(self, a: u64, b: u64) -> std::cmp::Ordering {
        match self {
            Self::OldFirst => a.cmp(&b),
            Self::NewFirst => b.cmp(&a),
        }
    }
}

/// Per-run options. Passed by value into every algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub rotation: Rotation,
    pub tie_break: TieBreak,
    /// Log the open list before every expansion (target `tunnelpath::open`).
    pub trace_open: bool,
}

impl SearchConfig {
    pub fn new(rotation: Rotation, tie_break: TieBreak) -> Self {
        Self {
            rotation,
            tie_break,
            trace_open: false,
        }
    }

    pub fn with_trace(mut self, trace_open: bool) -> Self {
        self.trace_open = trace_open;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn tie_break_prefers_the_configured_serial() {
        assert_eq!(TieBreak::OldFirst.compare(3, 7), Ordering::Less);
        assert_eq!(TieBreak::NewFirst.compare(3, 7), Ordering::Greater);
        assert_eq!(TieBreak::NewFirst.compare(5, 5), Ordering::Equal);
    }

    #[test]
    fn default_is_clockwise_new_first() {
        let c = SearchConfig::default();
        assert_eq!(c.rotation, Rotation::Clockwise);
        assert_eq!(c.tie_break, TieBreak::NewFirst);
        assert!(!c.trace_open);
        assert!(c.with_trace(true).trace_open);
    }
}
