//! Open-list plumbing shared by the search algorithms.
//!
//! Every algorithm pairs one [`Frontier`] (the order in which nodes come
//! back out) with an [`OpenIndex`] (which state keys are currently open, for
//! duplicate detection and the space watermark).

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::config::TieBreak;
use crate::node::{NodeArena, StateKey, StateNode};

/// Log target of the open-list trace.
pub const OPEN_TARGET: &str = "tunnelpath::open";

/// The discipline that decides which open node is expanded next.
///
/// Entries may go stale when the node they refer to is updated or retired;
/// `pop` hands back the cost the node had when it was queued so the caller
/// can tell.
pub trait Frontier {
    fn push(&mut self, id: usize, node: &StateNode, f: i32);

    /// Next arena index and its cost at push time.
    fn pop(&mut self) -> Option<(usize, i32)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<(usize, i32)>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: usize, node: &StateNode, _f: i32) {
        self.queue.push_back((id, node.cost));
    }

    fn pop(&mut self) -> Option<(usize, i32)> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<(usize, i32)>,
}

impl StackFrontier {
    /// Reverse the entries pushed since the stack had `len` entries, so the
    /// first of them is popped first.
    pub fn reverse_from(&mut self, len: usize) {
        if len < self.stack.len() {
            self.stack[len..].reverse();
        }
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, id: usize, node: &StateNode, _f: i32) {
        self.stack.push((id, node.cost));
    }

    fn pop(&mut self) -> Option<(usize, i32)> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// Heap entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// lower `f` compares greater, and among equal `f` the serial preferred by
/// the tie-break compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ranked {
    f: i32,
    serial: u64,
    cost: i32,
    id: usize,
    tie_break: TieBreak,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.tie_break.compare(other.serial, self.serial))
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest `f` first, ties settled by serial number.
#[derive(Debug)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Ranked>,
    tie_break: TieBreak,
}

impl PriorityFrontier {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: usize, node: &StateNode, f: i32) {
        self.heap.push(Ranked {
            f,
            serial: node.serial,
            cost: node.cost,
            id,
            tie_break: self.tie_break,
        });
    }

    fn pop(&mut self) -> Option<(usize, i32)> {
        self.heap.pop().map(|r| (r.id, r.cost))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// State key → arena index of the open node holding it, plus the largest
/// size the index ever reached.
#[derive(Debug, Default)]
pub struct OpenIndex {
    map: HashMap<StateKey, usize>,
    max_len: usize,
}

impl OpenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key` to `id`, replacing any previous holder.
    pub fn insert(&mut self, key: StateKey, id: usize) {
        self.map.insert(key, id);
        self.max_len = self.max_len.max(self.map.len());
    }

    #[inline]
    pub fn get(&self, key: &StateKey) -> Option<usize> {
        self.map.get(key).copied()
    }

    #[inline]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &StateKey) -> Option<usize> {
        self.map.remove(key)
    }

    /// Remove `key` only if it still maps to `id`; a cheaper duplicate may
    /// have taken its place.
    pub fn release(&mut self, key: StateKey, id: usize) -> bool {
        match self.map.entry(key) {
            Entry::Occupied(e) if *e.get() == id => {
                e.remove();
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Forget the contents but keep the watermark.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Render the open nodes in creation order.
    pub fn describe(&self, arena: &NodeArena) -> String {
        let mut ids: Vec<usize> = self.map.values().copied().collect();
        ids.sort_by_key(|&id| (arena[id].serial, id));
        let mut out = format!("open {}:", ids.len());
        for id in ids {
            out.push(' ');
            out.push_str(&arena[id].to_string());
        }
        out
    }

    /// Emit the open list on [`OPEN_TARGET`].
    pub fn trace(&self, arena: &NodeArena) {
        if log::log_enabled!(target: OPEN_TARGET, log::Level::Info) {
            log::info!(target: OPEN_TARGET, "{}", self.describe(arena));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::node::Transition;
    use tunnelpath_core::{Point, Terrain};

    fn node(x: i32, cost: i32, serial: u64) -> StateNode {
        StateNode::from_transition(
            Transition {
                pos: Point::new(x, 0),
                cost,
                supplied: false,
                dir: Direction::Right,
                terrain: Terrain::Floor,
            },
            0,
            serial,
        )
    }

    #[test]
    fn fifo_and_stack_order() {
        let mut q = FifoFrontier::default();
        let mut s = StackFrontier::default();
        for (id, n) in [node(1, 1, 1), node(2, 2, 2), node(3, 3, 3)].iter().enumerate() {
            q.push(id, n, 0);
            s.push(id, n, 0);
        }
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some((0, 1)));
        assert_eq!(s.pop(), Some((2, 3)));
        s.push(5, &node(5, 5, 5), 0);
        s.reverse_from(0);
        assert_eq!(s.pop(), Some((0, 1)));
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn priority_orders_by_f_then_serial() {
        let nodes = [node(1, 4, 1), node(2, 2, 2), node(3, 3, 3), node(4, 9, 4)];
        let fs = [7, 5, 5, 1];
        for (tie, expect) in [
            (TieBreak::OldFirst, vec![3, 1, 2, 0]),
            (TieBreak::NewFirst, vec![3, 2, 1, 0]),
        ] {
            let mut p = PriorityFrontier::new(tie);
            for (id, n) in nodes.iter().enumerate() {
                p.push(id, n, fs[id]);
            }
            let order: Vec<usize> = std::iter::from_fn(|| p.pop()).map(|(id, _)| id).collect();
            assert_eq!(order, expect);
        }
    }

    #[test]
    fn index_watermark_and_release() {
        let mut idx = OpenIndex::new();
        let a = StateKey {
            pos: Point::new(1, 0),
            supplied: false,
        };
        let b = StateKey {
            pos: Point::new(1, 0),
            supplied: true,
        };
        idx.insert(a, 0);
        idx.insert(b, 1);
        idx.insert(a, 2);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.max_len(), 2);
        assert!(!idx.release(a, 0));
        assert!(idx.release(a, 2));
        assert!(!idx.contains(&a));
        idx.clear();
        assert!(idx.is_empty());
        assert_eq!(idx.max_len(), 2);
    }

    #[test]
    fn describe_lists_in_creation_order() {
        let mut arena = NodeArena::new();
        let late = arena.push(node(5, 2, 7));
        let early = arena.push(node(3, 1, 2));
        let mut idx = OpenIndex::new();
        idx.insert(arena[late].key(), late);
        idx.insert(arena[early].key(), early);
        assert_eq!(
            idx.describe(&arena),
            "open 2: [3,0 | - | 1 | not | in] [5,0 | - | 2 | not | in]"
        );
    }
}
