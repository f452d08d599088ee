use std::fmt;
use std::ops::{Index, IndexMut};

use tunnelpath_core::{Point, Terrain};

use crate::direction::Direction;

/// Sentinel parent index of the start node.
pub const NO_PARENT: usize = usize::MAX;

/// Canonical identity of a search state.
///
/// Two nodes with the same key are the same state no matter how they were
/// reached; algorithms reconcile them by cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub pos: Point,
    pub supplied: bool,
}

/// Expansion phase of a node.
///
/// BFS and A* only use `InFrontier` and `Finished`. The stack-based searches
/// re-push a node once its children are on the stack (`AwaitingChildren`)
/// and retire it when it is popped a second time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tag {
    #[default]
    Unvisited,
    InFrontier,
    AwaitingChildren,
    /// Expanded for good, or superseded by a cheaper duplicate.
    Finished,
}

/// The result of a legal move, before it is turned into a [`StateNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub pos: Point,
    /// Cumulative cost from the start.
    pub cost: i32,
    pub supplied: bool,
    pub dir: Direction,
    pub terrain: Terrain,
}

impl Transition {
    #[inline]
    pub fn key(&self) -> StateKey {
        StateKey {
            pos: self.pos,
            supplied: self.supplied,
        }
    }
}

/// A node of the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateNode {
    pub pos: Point,
    pub cost: i32,
    pub supplied: bool,
    /// The move that produced this node; `None` for the start node.
    pub dir: Option<Direction>,
    /// Arena index of the parent, [`NO_PARENT`] for the start node.
    pub parent: usize,
    /// Creation order; only used to break ties.
    pub serial: u64,
    pub terrain: Terrain,
    pub tag: Tag,
}

impl StateNode {
    /// The root node at `pos`. It does not consume a serial.
    pub fn start(pos: Point, terrain: Terrain) -> Self {
        Self {
            pos,
            cost: 0,
            supplied: terrain == Terrain::Supply,
            dir: None,
            parent: NO_PARENT,
            serial: 0,
            terrain,
            tag: Tag::Unvisited,
        }
    }

    pub fn from_transition(t: Transition, parent: usize, serial: u64) -> Self {
        Self {
            pos: t.pos,
            cost: t.cost,
            supplied: t.supplied,
            dir: Some(t.dir),
            parent,
            serial,
            terrain: t.terrain,
            tag: Tag::Unvisited,
        }
    }

    #[inline]
    pub fn key(&self) -> StateKey {
        StateKey {
            pos: self.pos,
            supplied: self.supplied,
        }
    }

    /// Whether the last move was a teleport.
    #[inline]
    pub fn arrived_by_tunnel(&self) -> bool {
        self.dir == Some(Direction::Enter)
    }
}

impl fmt::Display for StateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sup = if self.supplied { "sup" } else { "not" };
        let phase = match self.tag {
            Tag::AwaitingChildren => "out",
            _ => "in",
        };
        write!(
            f,
            "[{},{} | {} | {} | {} | {}]",
            self.pos.x, self.pos.y, self.terrain, self.cost, sup, phase
        )
    }
}

/// Run-scoped creation counter.
///
/// The start node has serial 0; every generated node takes the next one, so
/// the number of issued serials is the number of generated nodes.
#[derive(Debug, Clone)]
pub struct SerialCounter {
    next: u64,
}

impl Default for SerialCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    #[inline]
    pub fn issue(&mut self) -> u64 {
        let s = self.next;
        self.next += 1;
        s
    }

    /// Number of serials issued so far.
    #[inline]
    pub fn generated(&self) -> u64 {
        self.next - 1
    }
}

/// Growable node store. Parents are referenced by index, so ancestor chains
/// are shared and never copied.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<StateNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its index.
    #[inline]
    pub fn push(&mut self, node: StateNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Drop every node created after the first `len`. Only valid when no
    /// surviving node has a parent at or beyond `len`.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Moves from the root to `id`, in order.
    pub fn path(&self, id: usize) -> Vec<Direction> {
        let mut path = Vec::new();
        let mut ci = id;
        while ci != NO_PARENT {
            let n = &self.nodes[ci];
            if let Some(d) = n.dir {
                path.push(d);
            }
            ci = n.parent;
        }
        path.reverse();
        path
    }

    /// Indices from `id` back to the root.
    pub fn ancestry(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(id), |&i| {
            let p = self.nodes[i].parent;
            (p != NO_PARENT).then_some(p)
        })
    }
}

impl Index<usize> for NodeArena {
    type Output = StateNode;

    #[inline]
    fn index(&self, id: usize) -> &StateNode {
        &self.nodes[id]
    }
}

impl IndexMut<usize> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: usize) -> &mut StateNode {
        &mut self.nodes[id]
    }
}
