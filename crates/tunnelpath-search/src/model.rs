//! The state-space model: board, tunnels, goal, costs, legal moves and the
//! heuristic.

use std::fmt;

use tunnelpath_core::{Board, BoardError, Point, Terrain, TerrainCounts, TunnelTable};

use crate::direction::Direction;
use crate::heuristic::HeuristicTable;
use crate::node::{StateNode, Transition};

/// Cost of entering floor, start, supply and tunnel tiles.
pub const BASE_COST: i32 = 1;
/// Cost of entering the goal tile.
pub const GOAL_COST: i32 = 5;
pub const ICE_COST: i32 = 5;
pub const ICE_DIAGONAL_COST: i32 = 10;
/// Cost of entering a pond while supplied.
pub const POND_COST: i32 = 3;
/// Cost of the tunnel pseudo-move.
pub const TUNNEL_COST: i32 = 2;
/// The last step always enters the goal, which the relaxed distance counts
/// as a single base-cost step.
pub const GOAL_SURCHARGE: i32 = GOAL_COST - BASE_COST;

/// Errors detected while assembling a [`GridModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    Board(BoardError),
    /// The start coordinates are off the board.
    OutOfBounds(Point),
    /// The start coordinates do not hold the start symbol.
    StartMismatch(Point),
    /// The goal coordinates do not hold the goal symbol.
    GoalMismatch(Point),
    /// The tunnel table and the digits on the board disagree.
    TunnelMismatch { digit: u8 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "{e}"),
            Self::OutOfBounds(p) => write!(f, "model: {p} is outside the board"),
            Self::StartMismatch(p) => write!(f, "model: no start symbol at {p}"),
            Self::GoalMismatch(p) => write!(f, "model: no goal symbol at {p}"),
            Self::TunnelMismatch { digit } => {
                write!(f, "model: tunnel {digit} does not match the board")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for ModelError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

/// Static description of one search problem.
///
/// Built once, never mutated during search.
#[derive(Debug, Clone)]
pub struct GridModel {
    board: Board,
    tunnels: TunnelTable,
    start: Point,
    goal: Point,
    counts: TerrainCounts,
    heuristic: HeuristicTable,
}

impl GridModel {
    /// Assemble a model, checking that `start`, `goal` and `tunnels` agree
    /// with the board.
    pub fn new(
        board: Board,
        tunnels: TunnelTable,
        start: Point,
        goal: Point,
    ) -> Result<Self, ModelError> {
        for p in [start, goal] {
            if !board.contains(p) {
                return Err(ModelError::OutOfBounds(p));
            }
        }
        if board.at(start) != Some(Terrain::Start) {
            return Err(ModelError::StartMismatch(start));
        }
        if board.at(goal) != Some(Terrain::Goal) {
            return Err(ModelError::GoalMismatch(goal));
        }
        for (digit, a, b) in tunnels.pairs() {
            let here = Some(Terrain::Tunnel(digit));
            if a == b || board.at(a) != here || board.at(b) != here {
                return Err(ModelError::TunnelMismatch { digit });
            }
        }
        for (p, t) in board.iter() {
            if let Terrain::Tunnel(digit) = t {
                if tunnels.other_end(digit, p).is_none() {
                    return Err(ModelError::TunnelMismatch { digit });
                }
            }
        }

        let counts = board.counts();
        let heuristic = HeuristicTable::compute(goal, &tunnels);
        Ok(Self {
            board,
            tunnels,
            start,
            goal,
            counts,
            heuristic,
        })
    }

    /// Derive start, goal and tunnels from the board itself.
    pub fn from_board(board: Board) -> Result<Self, ModelError> {
        let (start, goal) = board.endpoints()?;
        let tunnels = TunnelTable::from_board(&board)?;
        Self::new(board, tunnels, start, goal)
    }

    /// Parse a bare board and derive everything else from it.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        Self::from_board(Board::parse(s)?)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn tunnels(&self) -> &TunnelTable {
        &self.tunnels
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn counts(&self) -> &TerrainCounts {
        &self.counts
    }

    /// Number of distinct state keys: every cell, supplied or not.
    #[inline]
    pub fn state_count(&self) -> usize {
        2 * self.board.len()
    }

    /// Cost of entering a tile, or `None` if it cannot be entered.
    ///
    /// Does not include the tunnel teleport, which is a move of its own.
    pub fn cost(terrain: Terrain, diagonal: bool, supplied: bool) -> Option<i32> {
        match terrain {
            Terrain::Wall => None,
            Terrain::Pond if supplied => Some(POND_COST),
            Terrain::Pond => None,
            Terrain::Ice if diagonal => Some(ICE_DIAGONAL_COST),
            Terrain::Ice => Some(ICE_COST),
            Terrain::Goal => Some(GOAL_COST),
            Terrain::Floor | Terrain::Start | Terrain::Supply | Terrain::Tunnel(_) => {
                Some(BASE_COST)
            }
        }
    }

    /// The root of every search.
    pub fn start_node(&self) -> StateNode {
        StateNode::start(self.start, Terrain::Start)
    }

    #[inline]
    pub fn is_goal(&self, p: Point) -> bool {
        p == self.goal
    }

    /// Apply one move to `node`. Returns `None` if the move is illegal.
    ///
    /// A compass move is illegal when it leaves the board, enters a wall,
    /// enters a pond without supplies, or exactly reverses the previous move
    /// while not standing on a supply cache. The tunnel move is legal only on
    /// a tunnel tile reached by a compass move.
    pub fn step(&self, node: &StateNode, dir: Direction) -> Option<Transition> {
        if dir == Direction::Enter {
            return self.teleport(node);
        }
        if let Some(prev) = node.dir {
            if prev.reverse() == Some(dir) && node.terrain != Terrain::Supply {
                return None;
            }
        }
        let pos = node.pos + dir.delta();
        let terrain = self.board.at(pos)?;
        let cost = Self::cost(terrain, dir.is_diagonal(), node.supplied)?;
        Some(Transition {
            pos,
            cost: node.cost + cost,
            supplied: node.supplied || terrain == Terrain::Supply,
            dir,
            terrain,
        })
    }

    fn teleport(&self, node: &StateNode) -> Option<Transition> {
        let digit = node.terrain.tunnel()?;
        if node.arrived_by_tunnel() {
            return None;
        }
        let pos = self.tunnels.other_end(digit, node.pos)?;
        Some(Transition {
            pos,
            cost: node.cost + TUNNEL_COST,
            supplied: node.supplied,
            dir: Direction::Enter,
            terrain: node.terrain,
        })
    }

    /// Append every legal move from `node`, in `order`, into `buf`. The
    /// caller clears `buf` before calling.
    pub fn successors(&self, node: &StateNode, order: &[Direction], buf: &mut Vec<Transition>) {
        buf.extend(order.iter().filter_map(|&d| self.step(node, d)));
    }

    /// Admissible, consistent estimate of the remaining cost from `p`.
    pub fn heuristic(&self, p: Point) -> i32 {
        if self.is_goal(p) {
            return 0;
        }
        self.heuristic.relaxed_distance(p) + GOAL_SURCHARGE
    }

    /// `f = g + h` of a node.
    #[inline]
    pub fn f(&self, node: &StateNode) -> i32 {
        node.cost + self.heuristic(node.pos)
    }

    /// `f = g + h` of a transition.
    #[inline]
    pub fn f_of(&self, t: &Transition) -> i32 {
        t.cost + self.heuristic(t.pos)
    }

    /// Upper bound on the cost of any path that never revisits a state key.
    ///
    /// Every key is entered at most once, and entering a key costs at most
    /// the most expensive way into its cell; there are two keys per cell.
    pub fn max_f_bound(&self) -> i32 {
        let c = &self.counts;
        let tunnel_entry = TUNNEL_COST.max(BASE_COST);
        let per_phase = (c.floor + c.start + c.supply) as i32 * BASE_COST
            + c.tunnel_total() as i32 * tunnel_entry
            + c.pond as i32 * POND_COST
            + c.ice as i32 * ICE_DIAGONAL_COST
            + c.goal as i32 * GOAL_COST;
        2 * per_phase
    }
}
