//! The run-scoped search context shared by every algorithm.
//!
//! Each algorithm lives in its own file as an `impl Searcher` block; they all
//! draw nodes from the same arena, serial counter and open index.

use crate::config::SearchConfig;
use crate::frontier::{Frontier, OpenIndex};
use crate::model::GridModel;
use crate::node::{NodeArena, SerialCounter, StateNode, Tag, Transition};
use crate::outcome::SearchOutcome;

/// Mutable state of one search run over a [`GridModel`].
///
/// A `Searcher` is consumed by the algorithm it runs; nothing is shared
/// between runs.
pub struct Searcher<'m> {
    pub(crate) model: &'m GridModel,
    pub(crate) config: SearchConfig,
    pub(crate) arena: NodeArena,
    pub(crate) serials: SerialCounter,
    pub(crate) open: OpenIndex,
    /// Reusable successor buffer.
    pub(crate) buf: Vec<Transition>,
}

impl<'m> Searcher<'m> {
    pub fn new(model: &'m GridModel, config: SearchConfig) -> Self {
        Self {
            model,
            config,
            arena: NodeArena::new(),
            serials: SerialCounter::new(),
            open: OpenIndex::new(),
            buf: Vec::with_capacity(9),
        }
    }

    #[inline]
    pub fn model(&self) -> &GridModel {
        self.model
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Store the start node as open and return its index.
    pub(crate) fn root(&mut self) -> usize {
        let mut start = self.model.start_node();
        start.tag = Tag::InFrontier;
        let key = start.key();
        let id = self.arena.push(start);
        self.open.insert(key, id);
        id
    }

    /// Turn a transition into a stored node with a fresh serial.
    pub(crate) fn materialize(&mut self, t: Transition, parent: usize) -> usize {
        let serial = self.serials.issue();
        self.place(t, parent, serial)
    }

    /// Store a transition whose serial was issued earlier.
    pub(crate) fn place(&mut self, t: Transition, parent: usize, serial: u64) -> usize {
        let mut node = StateNode::from_transition(t, parent, serial);
        node.tag = Tag::InFrontier;
        self.arena.push(node)
    }

    /// Fill `buf` with the legal moves from `id` in the configured order.
    pub(crate) fn expand(&mut self, id: usize, buf: &mut Vec<Transition>) {
        buf.clear();
        self.model
            .successors(&self.arena[id], self.config.rotation.order(), buf);
    }

    /// Pop the next entry whose node is still live: not retired and still at
    /// the cost it was queued with.
    pub(crate) fn pop_live<F: Frontier>(&self, frontier: &mut F) -> Option<usize> {
        while let Some((id, cost)) = frontier.pop() {
            let n = &self.arena[id];
            if n.tag != Tag::Finished && n.cost == cost {
                return Some(id);
            }
        }
        None
    }

    pub(crate) fn trace_open(&self) {
        if self.config.trace_open {
            self.open.trace(&self.arena);
        }
    }

    /// Build the result for a run that ended at `goal` (or found nothing).
    pub(crate) fn finish(&self, name: &str, goal: Option<usize>) -> SearchOutcome {
        let outcome = SearchOutcome {
            path: goal.map(|id| self.arena.path(id)),
            nodes_generated: self.serials.generated(),
            max_frontier: self.open.max_len(),
            cost: goal.map(|id| self.arena[id].cost),
        };
        log::debug!("{name}: {outcome}");
        outcome
    }
}
