use std::collections::HashSet;

use crate::frontier::{Frontier, PriorityFrontier};
use crate::node::Tag;
use crate::outcome::SearchOutcome;
use crate::searcher::Searcher;

impl Searcher<'_> {
    /// A* search.
    ///
    /// The open node with the lowest `f` is expanded first, ties going to the
    /// configured serial order. The goal test happens on expansion, so the
    /// returned path is optimal. A cheaper route to an open state updates
    /// that node in place and re-queues it; expanded states are never
    /// reopened, which the consistent heuristic makes safe.
    pub fn astar(mut self) -> SearchOutcome {
        let mut queue = PriorityFrontier::new(self.config.tie_break);
        let mut closed = HashSet::new();

        let root = self.root();
        let f = self.model.f(&self.arena[root]);
        queue.push(root, &self.arena[root], f);

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

            if self.model.is_goal(self.arena[ci].pos) {
                break 'search Some(ci);
            }

            self.expand(ci, &mut buf);
            for &t in buf.iter() {
                let nk = t.key();
                if closed.contains(&nk) {
                    continue;
                }
                if let Some(ni) = self.open.get(&nk) {
                    // Same key, same heuristic: comparing costs compares f.
                    let n = &mut self.arena[ni];
                    if t.cost >= n.cost {
                        continue;
                    }
                    n.cost = t.cost;
                    n.parent = ci;
                    n.dir = Some(t.dir);
                    n.terrain = t.terrain;
                    let f = self.model.f_of(&t);
                    queue.push(ni, &self.arena[ni], f);
                    continue;
                }
                let ni = self.materialize(t, ci);
                self.open.insert(nk, ni);
                let f = self.model.f_of(&t);
                queue.push(ni, &self.arena[ni], f);
            }
        };
        self.buf = buf;

        self.finish("A*", found)
    }
}
