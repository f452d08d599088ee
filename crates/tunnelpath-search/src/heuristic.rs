//! Tunnel-aware distance estimates.
//!
//! The estimate of a cell is the length of the shortest route to the goal in
//! a relaxed world where every step costs 1, walls do not exist, and each
//! tunnel can be crossed for its teleport cost. Only the goal and the tunnel
//! entrances matter in that world, so a Dijkstra run over those few points
//! (complete graph, Chebyshev edge weights) gives every entrance its exact
//! relaxed distance; any other cell then needs one more hop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tunnelpath_core::{Point, TunnelTable};

use crate::distance::chebyshev;
use crate::model::TUNNEL_COST;

/// Queue entry ordered so that `BinaryHeap` pops the smallest distance.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    idx: usize,
    dist: i32,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.dist.cmp(&self.dist).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Relaxed distance to the goal of every tunnel entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicTable {
    goal: Point,
    entrances: Vec<(Point, i32)>,
}

impl HeuristicTable {
    /// Run Dijkstra from `goal` over {goal} ∪ tunnel entrances.
    ///
    /// Edges join every pair of points with weight equal to their Chebyshev
    /// distance, except the two ends of the same tunnel, whose weight is
    /// capped at the teleport cost.
    pub fn compute(goal: Point, tunnels: &TunnelTable) -> Self {
        // Index 0 is the goal.
        let mut points: Vec<(Point, Option<u8>)> = vec![(goal, None)];
        points.extend(tunnels.entrances().map(|(d, p)| (p, Some(d))));

        let mut dist = vec![i32::MAX; points.len()];
        dist[0] = 0;
        let mut open = BinaryHeap::new();
        open.push(Entry { idx: 0, dist: 0 });

        while let Some(Entry { idx: ci, dist: cd }) = open.pop() {
            // Skip stale entries.
            if cd > dist[ci] {
                continue;
            }
            let (cp, cdigit) = points[ci];
            for (ni, &(np, ndigit)) in points.iter().enumerate() {
                if ni == ci {
                    continue;
                }
                let mut w = chebyshev(cp, np);
                if cdigit.is_some() && cdigit == ndigit {
                    w = w.min(TUNNEL_COST);
                }
                let tentative = cd + w;
                if tentative < dist[ni] {
                    dist[ni] = tentative;
                    open.push(Entry {
                        idx: ni,
                        dist: tentative,
                    });
                }
            }
        }

        let entrances = points
            .iter()
            .zip(dist)
            .skip(1)
            .map(|(&(p, _), d)| (p, d))
            .collect();
        Self { goal, entrances }
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Precomputed distance from an entrance to the goal.
    pub fn entrance_distance(&self, p: Point) -> Option<i32> {
        self.entrances.iter().find(|&&(q, _)| q == p).map(|&(_, d)| d)
    }

    /// All entrances with their distances, in tunnel-digit order.
    pub fn entrances(&self) -> &[(Point, i32)] {
        &self.entrances
    }

    /// Relaxed distance from `p` to the goal: straight there, or to some
    /// entrance first and onward from it.
    pub fn relaxed_distance(&self, p: Point) -> i32 {
        self.entrances
            .iter()
            .map(|&(t, d)| chebyshev(p, t) + d)
            .fold(chebyshev(p, self.goal), i32::min)
    }
}
