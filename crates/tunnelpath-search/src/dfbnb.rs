use crate::frontier::{Frontier, StackFrontier};
use crate::node::{Tag, Transition};
use crate::outcome::SearchOutcome;
use crate::searcher::Searcher;

/// A generated child waiting to be ranked against its siblings.
struct Candidate {
    t: Transition,
    f: i32,
    serial: u64,
}

impl Searcher<'_> {
    /// Depth-first branch and bound.
    ///
    /// Starts from a bound no real path can exceed and runs one stack-based
    /// depth-first search. Children are ranked by `f` and then by the
    /// configured serial order; a child whose `f` reaches the bound is
    /// dropped together with every sibling ranked after it. A goal child
    /// lowers the bound to its cost and becomes the best path so far. The
    /// search ends when the stack is empty.
    pub fn dfbnb(mut self) -> SearchOutcome {
        // Strict bound: a path costing exactly max_f_bound must still fit.
        let mut bound = self.model.max_f_bound() + 1;
        let tie_break = self.config.tie_break;
        let mut best = None;

        let mut stack = StackFrontier::default();
        let root = self.root();
        stack.push(root, &self.arena[root], 0);

        let mut buf = std::mem::take(&mut self.buf);
        let mut ranked: Vec<Candidate> = Vec::with_capacity(9);
        let mut kept: Vec<usize> = Vec::with_capacity(9);
        while let Some(ci) = self.pop_live(&mut stack) {
            if self.arena[ci].tag == Tag::AwaitingChildren {
                self.arena[ci].tag = Tag::Finished;
                let key = self.arena[ci].key();
                self.open.release(key, ci);
                continue;
            }

            self.trace_open();
            self.arena[ci].tag = Tag::AwaitingChildren;
            stack.push(ci, &self.arena[ci], 0);

            self.expand(ci, &mut buf);
            ranked.clear();
            for &t in buf.iter() {
                ranked.push(Candidate {
                    t,
                    f: self.model.f_of(&t),
                    serial: self.serials.issue(),
                });
            }
            ranked.sort_by(|a, b| a.f.cmp(&b.f).then(tie_break.compare(a.serial, b.serial)));

            kept.clear();
            for c in &ranked {
                if c.f >= bound {
                    break;
                }
                if self.model.is_goal(c.t.pos) {
                    bound = c.f;
                    let gi = self.place(c.t, ci, c.serial);
                    self.arena[gi].tag = Tag::Finished;
                    best = Some(gi);
                    log::trace!("DFBnB: bound lowered to {bound}");
                    break;
                }
                let nk = c.t.key();
                if let Some(ei) = self.open.get(&nk) {
                    let existing = &mut self.arena[ei];
                    if existing.tag == Tag::AwaitingChildren || existing.cost <= c.t.cost {
                        continue;
                    }
                    existing.tag = Tag::Finished;
                }
                let ni = self.place(c.t, ci, c.serial);
                self.open.insert(nk, ni);
                kept.push(ni);
            }
            // Best-ranked child on top.
            for &ni in kept.iter().rev() {
                stack.push(ni, &self.arena[ni], 0);
            }
        }
        self.buf = buf;

        self.finish("DFBnB", best)
    }
}
