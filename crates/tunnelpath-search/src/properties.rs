//! Randomised checks of the model and the algorithms against an exhaustive
//! Dijkstra over the full transition system (position, supply flag and
//! incoming move).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tunnelpath_core::{Board, Point, Terrain};

use crate::{
    Algorithm, Direction, GridModel, NO_PARENT, Rotation, SearchConfig, StateNode, TieBreak,
};

type FullState = (Point, bool, Option<Direction>);

fn node(model: &GridModel, s: FullState, cost: i32) -> StateNode {
    StateNode {
        pos: s.0,
        cost,
        supplied: s.1,
        dir: s.2,
        parent: NO_PARENT,
        serial: 0,
        terrain: model.board().at(s.0).unwrap(),
        tag: Default::default(),
    }
}

fn start_state(model: &GridModel) -> FullState {
    let s = model.start_node();
    (s.pos, s.supplied, s.dir)
}

/// Cheapest cost from `from` to the goal, honoring every move rule.
fn cheapest_from(model: &GridModel, from: FullState) -> Option<i32> {
    let mut dist: HashMap<FullState, i32> = HashMap::new();
    let mut states = vec![from];
    let mut heap = BinaryHeap::new();
    dist.insert(from, 0);
    heap.push(Reverse((0, 0usize)));
    while let Some(Reverse((c, i))) = heap.pop() {
        let s = states[i];
        if dist.get(&s).is_some_and(|&d| d < c) {
            continue;
        }
        if model.is_goal(s.0) {
            return Some(c);
        }
        let n = node(model, s, c);
        for &d in Rotation::Clockwise.order() {
            let Some(t) = model.step(&n, d) else {
                continue;
            };
            let ns = (t.pos, t.supplied, Some(t.dir));
            if dist.get(&ns).is_none_or(|&old| t.cost < old) {
                dist.insert(ns, t.cost);
                states.push(ns);
                heap.push(Reverse((t.cost, states.len() - 1)));
            }
        }
    }
    None
}

/// Every full state reachable from the start without passing the goal.
fn reachable(model: &GridModel) -> Vec<FullState> {
    let start = start_state(model);
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut out = Vec::new();
    while let Some(s) = queue.pop_front() {
        out.push(s);
        if model.is_goal(s.0) {
            continue;
        }
        let n = node(model, s, 0);
        for &d in Rotation::Clockwise.order() {
            if let Some(t) = model.step(&n, d) {
                let ns = (t.pos, t.supplied, Some(t.dir));
                if seen.insert(ns) {
                    queue.push_back(ns);
                }
            }
        }
    }
    out
}

/// A small board with every kind of terrain and up to two tunnels.
fn random_model(rng: &mut StdRng) -> GridModel {
    let w = rng.random_range(3..7);
    let h = rng.random_range(2..6);
    let mut board = Board::filled(w, h, Terrain::Floor).unwrap();
    for p in board.bounds().iter() {
        let t = match rng.random_range(0..100) {
            0..15 => Terrain::Wall,
            15..25 => Terrain::Pond,
            25..35 => Terrain::Ice,
            35..40 => Terrain::Supply,
            _ => Terrain::Floor,
        };
        board.set(p, t);
    }

    // Distinct cells for start, goal and tunnel ends.
    let mut cells: Vec<Point> = board.bounds().iter().collect();
    for i in (1..cells.len()).rev() {
        let j = rng.random_range(0..=i);
        cells.swap(i, j);
    }
    board.set(cells[0], Terrain::Start);
    board.set(cells[1], Terrain::Goal);
    let pairs = rng.random_range(0..3usize).min((cells.len() - 2) / 2);
    for k in 0..pairs {
        let digit = rng.random_range(0..10u8);
        if board.iter().any(|(_, t)| t == Terrain::Tunnel(digit)) {
            continue;
        }
        board.set(cells[2 + 2 * k], Terrain::Tunnel(digit));
        board.set(cells[3 + 2 * k], Terrain::Tunnel(digit));
    }
    GridModel::from_board(board).unwrap()
}

/// Replay `path` from the start; returns the cost if every move is legal and
/// the path ends on the goal.
fn replay(model: &GridModel, path: &[Direction]) -> Option<i32> {
    let mut n = model.start_node();
    let mut seen_supply = n.supplied;
    for &d in path {
        let t = model.step(&n, d)?;
        // Supply never runs out.
        assert!(t.supplied || !seen_supply);
        seen_supply = t.supplied;
        // Reversals only off a cache or after a teleport.
        if let (Some(prev), Some(rev)) = (n.dir, d.reverse()) {
            if prev == rev {
                assert!(n.terrain == Terrain::Supply || prev == Direction::Enter);
            }
        }
        n = StateNode::from_transition(t, NO_PARENT, 0);
    }
    model.is_goal(n.pos).then_some(n.cost)
}

const ROUNDS: u64 = 60;

/// DFID revisits states freely, so its running time grows with the number
/// of simple paths; keep it to the smallest boards.
const DFID_MAX_CELLS: usize = 8;

fn algorithms_for(m: &GridModel) -> impl Iterator<Item = Algorithm> + use<> {
    let small = m.board().len() <= DFID_MAX_CELLS;
    Algorithm::ALL
        .into_iter()
        .filter(move |&a| small || a != Algorithm::Dfid)
}

#[test]
fn heuristic_is_admissible() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let m = random_model(&mut rng);
        for s in reachable(&m) {
            if let Some(rest) = cheapest_from(&m, s) {
                assert!(m.heuristic(s.0) <= rest, "h({}) > {rest}\n{}", s.0, m.board());
            }
        }
    }
}

#[test]
fn heuristic_is_consistent() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let m = random_model(&mut rng);
        for s in reachable(&m) {
            let n = node(&m, s, 0);
            for &d in Rotation::Clockwise.order() {
                if let Some(t) = m.step(&n, d) {
                    assert!(
                        m.heuristic(s.0) <= t.cost + m.heuristic(t.pos),
                        "{} -{d}-> {}\n{}",
                        s.0,
                        t.pos,
                        m.board()
                    );
                }
            }
        }
    }
}

#[test]
fn returned_paths_are_valid_and_never_beat_the_optimum() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..ROUNDS {
        let m = random_model(&mut rng);
        let optimum = cheapest_from(&m, start_state(&m));
        for a in algorithms_for(&m) {
            let o = a.run(&m, SearchConfig::default());
            let Some(path) = &o.path else {
                assert_eq!(o.cost, None);
                continue;
            };
            let cost = replay(&m, path);
            assert_eq!(cost, o.cost, "{a}\n{}", m.board());
            let (Some(cost), Some(best)) = (cost, optimum) else {
                panic!("{a} found a path the exhaustive search missed\n{}", m.board());
            };
            assert!(cost >= best, "{a}: {cost} < {best}\n{}", m.board());
            // Paths never repeat a state key.
            let mut n = m.start_node();
            let mut keys = HashSet::from([n.key()]);
            for &d in path {
                let t = m.step(&n, d).unwrap();
                assert!(keys.insert(t.key()), "{a} revisits {:?}", t.key());
                n = StateNode::from_transition(t, NO_PARENT, 0);
            }
            assert!(cost <= m.max_f_bound());
        }
    }
}

#[test]
fn optimal_algorithms_agree_with_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..ROUNDS {
        let m = random_model(&mut rng);
        let optimum = cheapest_from(&m, start_state(&m));
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            for tie in [TieBreak::OldFirst, TieBreak::NewFirst] {
                let config = SearchConfig::new(rotation, tie);
                for a in Algorithm::ALL.into_iter().filter(|a| a.is_optimal()) {
                    let o = a.run(&m, config);
                    assert_eq!(o.cost, optimum, "{a} {config:?}\n{}", m.board());
                }
            }
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..ROUNDS / 3 {
        let m = random_model(&mut rng);
        for a in algorithms_for(&m) {
            for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
                for tie in [TieBreak::OldFirst, TieBreak::NewFirst] {
                    let config = SearchConfig::new(rotation, tie);
                    assert_eq!(a.run(&m, config), a.run(&m, config), "{a}");
                }
            }
        }
    }
}

#[test]
fn open_trace_does_not_change_the_result() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..10 {
        let m = random_model(&mut rng);
        for a in algorithms_for(&m) {
            let plain = a.run(&m, SearchConfig::default());
            let traced = a.run(&m, SearchConfig::default().with_trace(true));
            assert_eq!(plain, traced, "{a}");
        }
    }
}
