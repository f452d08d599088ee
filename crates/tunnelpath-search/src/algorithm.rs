use std::fmt;
use std::str::FromStr;

use crate::config::SearchConfig;
use crate::model::GridModel;
use crate::outcome::SearchOutcome;
use crate::searcher::Searcher;

/// The five search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfid,
    AStar,
    IdaStar,
    Dfbnb,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfid,
        Algorithm::AStar,
        Algorithm::IdaStar,
        Algorithm::Dfbnb,
    ];

    /// Name as written in problem files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfid => "DFID",
            Self::AStar => "A*",
            Self::IdaStar => "IDA*",
            Self::Dfbnb => "DFBnB",
        }
    }

    /// Whether the tie-break setting changes how this algorithm runs.
    pub const fn uses_tie_break(self) -> bool {
        matches!(self, Self::AStar | Self::Dfbnb)
    }

    /// Whether the returned path is guaranteed to be the cheapest.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::AStar | Self::IdaStar | Self::Dfbnb)
    }

    /// Run this algorithm once over `model`.
    pub fn run(self, model: &GridModel, config: SearchConfig) -> SearchOutcome {
        log::debug!(
            "{}: start {} goal {} ({:?}, {:?})",
            self,
            model.start(),
            model.goal(),
            config.rotation,
            config.tie_break
        );
        let searcher = Searcher::new(model, config);
        match self {
            Self::Bfs => searcher.bfs(),
            Self::Dfid => searcher.dfid(),
            Self::AStar => searcher.astar(),
            Self::IdaStar => searcher.idastar(),
            Self::Dfbnb => searcher.dfbnb(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name did not match any algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm {:?}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
