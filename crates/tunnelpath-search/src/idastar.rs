use crate::frontier::{Frontier, StackFrontier};
use crate::node::Tag;
use crate::outcome::SearchOutcome;
use crate::searcher::Searcher;

/// How one bounded round ended.
enum Round {
    Found(usize),
    /// Nothing found; the smallest `f` that exceeded the threshold.
    Raise(i32),
    /// Nothing was pruned, so a higher threshold cannot help.
    Exhausted,
}

impl Searcher<'_> {
    /// Iterative-deepening A*.
    ///
    /// Each round is a stack-based depth-first search that only admits
    /// nodes with `f` no greater than the threshold; the next threshold is
    /// the smallest `f` that was cut off. The first threshold is the start
    /// node's heuristic. A goal generated within the threshold is returned
    /// at once. Node counts and the space watermark accumulate over rounds.
    pub fn idastar(mut self) -> SearchOutcome {
        let bound = self.model.max_f_bound();
        let mut threshold = self.model.heuristic(self.model.start());
        let mut stack = StackFrontier::default();

        let found = loop {
            log::debug!("IDA*: threshold {threshold}");
            match self.idastar_round(threshold, &mut stack) {
                Round::Found(id) => break Some(id),
                Round::Exhausted => break None,
                Round::Raise(next) if next > bound => break None,
                Round::Raise(next) => threshold = next,
            }
        };

        self.finish("IDA*", found)
    }

    fn idastar_round(&mut self, threshold: i32, stack: &mut StackFrontier) -> Round {
        self.arena.clear();
        self.open.clear();
        stack.clear();

        let root = self.root();
        stack.push(root, &self.arena[root], 0);
        let mut min_f = i32::MAX;

        let mut buf = std::mem::take(&mut self.buf);
        let found = 'round: loop {
            let Some(ci) = self.pop_live(stack) else {
                break 'round None;
            };
            if self.arena[ci].tag == Tag::AwaitingChildren {
                // Second pop: the whole subtree is done.
                self.arena[ci].tag = Tag::Finished;
                let key = self.arena[ci].key();
                self.open.release(key, ci);
                continue;
            }

            self.trace_open();
            self.arena[ci].tag = Tag::AwaitingChildren;
            stack.push(ci, &self.arena[ci], 0);

            let mark = stack.len();
            self.expand(ci, &mut buf);
            for &t in buf.iter() {
                let serial = self.serials.issue();
                let f = self.model.f_of(&t);
                if f > threshold {
                    min_f = min_f.min(f);
                    continue;
                }
                let nk = t.key();
                if let Some(ei) = self.open.get(&nk) {
                    let existing = &mut self.arena[ei];
                    if existing.tag == Tag::AwaitingChildren || existing.cost <= t.cost {
                        continue;
                    }
                    existing.tag = Tag::Finished;
                }
                let ni = self.place(t, ci, serial);
                if self.model.is_goal(t.pos) {
                    break 'round Some(ni);
                }
                self.open.insert(nk, ni);
                stack.push(ni, &self.arena[ni], 0);
            }
            // Children were pushed in expansion order; pop them in it too.
            stack.reverse_from(mark);
        };
        self.buf = buf;

        match found {
            Some(id) => Round::Found(id),
            None if min_f == i32::MAX => Round::Exhausted,
            None => Round::Raise(min_f),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SearchConfig;
    use crate::model::GridModel;
    use crate::searcher::Searcher;

    fn run(map: &str) -> crate::SearchOutcome {
        let m = GridModel::parse(map).unwrap();
        Searcher::new(&m, SearchConfig::default()).idastar()
    }

    #[test]
    fn open_board() {
        let o = run("S----\n-----\n-----\n-----\n----G");
        assert_eq!(o.path_string(), "RD-RD-RD-RD");
        assert_eq!(o.cost, Some(8));
    }

    #[test]
    fn takes_the_tunnel_shortcut() {
        let o = run("S1-----\n######-\nG-----1");
        assert_eq!(o.path_string(), "R-Ent-L-L-L-L-L-L");
        assert_eq!(o.cost, Some(13));
    }

    #[test]
    fn tunnel_corridor() {
        let o = run("S1~1G");
        assert_eq!(o.path_string(), "R-Ent-R");
        assert_eq!(o.cost, Some(8));
        assert_eq!(o.nodes_generated, 3);
        assert_eq!(o.max_frontier, 3);
    }

    #[test]
    fn raises_threshold_past_ice() {
        // h(start) = 6, optimum 11: at least one raise.
        let o = run("S^-\n^^^\n--G");
        assert_eq!(o.path_string(), "D-RD-R");
        assert_eq!(o.cost, Some(11));
    }

    #[test]
    fn no_path() {
        for map in ["S#G", "S-~-G", "S-#\n###\n#-G"] {
            let o = run(map);
            assert!(!o.is_found(), "{map}");
            assert_eq!(o.cost_string(), "inf");
        }
    }
}
