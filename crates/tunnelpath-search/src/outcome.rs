use std::fmt;

use crate::direction::Direction;

/// What a search run reports back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Moves from start to goal, or `None` if no path was found.
    pub path: Option<Vec<Direction>>,
    pub nodes_generated: u64,
    pub max_frontier: usize,
    /// Cost of `path`; `None` means infinite.
    pub cost: Option<i32>,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Tokens joined by `-`, or `no path`.
    pub fn path_string(&self) -> String {
        match &self.path {
            Some(p) => p.iter().map(|d| d.token()).collect::<Vec<_>>().join("-"),
            None => "no path".to_string(),
        }
    }

    /// The cost, or `inf`.
    pub fn cost_string(&self) -> String {
        match self.cost {
            Some(c) => c.to_string(),
            None => "inf".to_string(),
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (cost {}, {} generated, max frontier {})",
            self.path_string(),
            self.cost_string(),
            self.nodes_generated,
            self.max_frontier
        )
    }
}
