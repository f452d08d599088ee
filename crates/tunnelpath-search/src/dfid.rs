use crate::node::Tag;
use crate::outcome::SearchOutcome;
use crate::searcher::Searcher;

/// Result of one depth-limited probe.
enum Probe {
    Found(usize),
    /// The limit stopped the search somewhere below.
    Cutoff,
    /// Everything below was explored without reaching the limit.
    Fail,
}

impl Searcher<'_> {
    /// Depth-first iterative deepening.
    ///
    /// Runs recursive depth-limited searches with limits 1, 2, ... up to the
    /// number of state keys. Only the current recursion path is kept open,
    /// and a child whose key is already on the path is skipped; states are
    /// otherwise revisited freely across branches and rounds. A round that
    /// never hits its limit ends the search with no path.
    pub fn dfid(mut self) -> SearchOutcome {
        let ceiling = self.model.state_count();
        let mut found = None;

        for limit in 1..=ceiling {
            log::debug!("DFID: depth limit {limit}");
            self.arena.clear();
            self.open.clear();
            let root = self.root();
            match self.probe(root, limit) {
                Probe::Found(id) => {
                    found = Some(id);
                    break;
                }
                Probe::Fail => break,
                Probe::Cutoff => {}
            }
        }

        self.finish("DFID", found)
    }

    fn probe(&mut self, ci: usize, depth: usize) -> Probe {
        self.trace_open();
        self.arena[ci].tag = Tag::AwaitingChildren;

        let mut children = std::mem::take(&mut self.buf);
        self.expand(ci, &mut children);
        let mut result = Probe::Fail;
        for &t in children.iter() {
            let serial = self.serials.issue();
            let nk = t.key();
            if self.open.contains(&nk) {
                continue;
            }
            let mark = self.arena.len();
            let ni = self.place(t, ci, serial);
            if self.model.is_goal(t.pos) {
                result = Probe::Found(ni);
                break;
            }
            if depth <= 1 {
                self.arena.truncate(mark);
                result = Probe::Cutoff;
                continue;
            }

            self.open.insert(nk, ni);
            let below = self.probe(ni, depth - 1);
            self.open.remove(&nk);
            match below {
                Probe::Found(id) => {
                    result = Probe::Found(id);
                    break;
                }
                Probe::Cutoff => result = Probe::Cutoff,
                Probe::Fail => {}
            }
            self.arena.truncate(mark);
        }
        // Nested probes leave `self.buf` empty; hand back the larger buffer.
        if children.capacity() > self.buf.capacity() {
            self.buf = children;
        }
        result
    }
}
