//! State-space search over tunnel grids.
//!
//! This crate turns a [`tunnelpath_core::Board`] into a [`GridModel`] (costs,
//! legal moves, a tunnel-aware heuristic) and searches it with one of five
//! strategies:
//!
//! - **BFS**: fewest moves, goal tested on generation ([`Searcher::bfs`])
//! - **DFID**: depth-first iterative deepening ([`Searcher::dfid`])
//! - **A\***: optimal, goal tested on expansion ([`Searcher::astar`])
//! - **IDA\***: iterative-deepening A* ([`Searcher::idastar`])
//! - **DFBnB**: depth-first branch and bound ([`Searcher::dfbnb`])
//!
//! [`Algorithm::run`] picks one by name. Every run owns its node arena,
//! serial counter and open index; nothing is shared between runs.
//!
//! # Frontier disciplines
//!
//! | Algorithm | [`Frontier`] | Closed set |
//! |---|---|---|
//! | BFS | [`FifoFrontier`] | permanent |
//! | A* | [`PriorityFrontier`] | permanent |
//! | IDA*, DFBnB | [`StackFrontier`] | two-phase [`Tag`] |
//! | DFID | recursion | current path only |

mod algorithm;
mod astar;
mod bfs;
mod config;
mod dfbnb;
mod dfid;
mod direction;
mod distance;
mod frontier;
mod heuristic;
mod idastar;
mod model;
mod node;
mod outcome;
mod searcher;

#[cfg(test)]
mod properties;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use config::{SearchConfig, TieBreak};
pub use direction::{Direction, Rotation};
pub use distance::chebyshev;
pub use frontier::{FifoFrontier, Frontier, OPEN_TARGET, OpenIndex, PriorityFrontier, StackFrontier};
pub use heuristic::HeuristicTable;
pub use model::{
    BASE_COST, GOAL_COST, GOAL_SURCHARGE, GridModel, ICE_COST, ICE_DIAGONAL_COST, ModelError,
    POND_COST, TUNNEL_COST,
};
pub use node::{NO_PARENT, NodeArena, SerialCounter, StateKey, StateNode, Tag, Transition};
pub use outcome::SearchOutcome;
pub use searcher::Searcher;
