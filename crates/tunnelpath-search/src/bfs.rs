use std::collections::HashSet;

use crate::frontier::{FifoFrontier, Frontier};
use crate::node::Tag;
use crate::outcome::SearchOutcome;
use crate::searcher::Searcher;

impl Searcher<'_> {
    /// Breadth-first search.
    ///
    /// Nodes are expanded in generation order and the goal is tested when a
    /// node is generated, so the returned path has the fewest moves, not
    /// necessarily the lowest cost. A state key is never generated twice.
    pub fn bfs(mut self) -> SearchOutcome {
        let mut queue = FifoFrontier::default();
        let mut closed = HashSet::new();

        let root = self.root();
        queue.push(root, &self.arena[root], 0);

        let mut buf = std::mem::take(&mut self.buf);
        let found = 'search: loop {
            self.trace_open();
            let Some(ci) = self.pop_live(&mut queue) else {
                break 'search None;
            };
            let key = self.arena[ci].key();
            self.open.release(key, ci);
            self.arena[ci].tag = Tag::Finished;
            closed.insert(key);

            self.expand(ci, &mut buf);
            for &t in buf.iter() {
                let nk = t.key();
                if closed.contains(&nk) || self.open.contains(&nk) {
                    continue;
                }
                let ni = self.materialize(t, ci);
                if self.model.is_goal(t.pos) {
                    break 'search Some(ni);
                }
                self.open.insert(nk, ni);
                queue.push(ni, &self.arena[ni], 0);
            }
        };
        self.buf = buf;

        self.finish("BFS", found)
    }
}
