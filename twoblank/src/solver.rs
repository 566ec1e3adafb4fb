use crate::puzzle_sliding16x2::neighbors::{Neighbors, board_neighbors};
use crate::puzzle_sliding16x2::state::State;
use crate::puzzle_sliding16x2::successors::successors;
use crate::puzzle_sliding16x2::heuristic::{CellMetric, board_metric, calc_manhattan_heuristic, tile_distance};
use crate::path::{MoveCommand, NO_PREDECESSOR, reconstruct, move_commands};
use crate::stats::SearchStatsCollector;
use crate::error::SolveError;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use log::{debug, trace, warn};

/// Number of moves.
pub type Cost = u16;

/// Lower bound of the number of moves to the goal.
///
/// The search never reopens a board once discovered, which gives optimal
/// solutions only if the heuristic is consistent: for each move, the value
/// changes by at most one. Implementations must keep that property.
pub trait Heuristic {
    fn value_for_state(&self, state: State) -> Cost;
    /// Value after `tile` moved from cell `from` to cell `to` in a state which had `old_value`.
    fn update_value(&self, old_value: Cost, tile: u8, from: u8, to: u8) -> Cost;
}

/// Zero heuristic, turns A* into uniform-cost search.
impl Heuristic for () {
    #[inline(always)] fn value_for_state(&self, _state: State) -> Cost { 0 }
    #[inline(always)] fn update_value(&self, _old_value: Cost, _tile: u8, _from: u8, _to: u8) -> Cost { 0 }
}

/// Sum of Manhattan distances of tiles to their goal cells.
impl Heuristic for CellMetric {
    #[inline(always)] fn value_for_state(&self, state: State) -> Cost {
        calc_manhattan_heuristic(self, state) as Cost
    }

    #[inline(always)] fn update_value(&self, old_value: Cost, tile: u8, from: u8, to: u8) -> Cost {
        old_value
            - tile_distance(self, from, tile) as Cost
            + tile_distance(self, to, tile) as Cost
    }
}

/// Discovered board with its costs and the key of the board it was discovered from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub f: Cost,
    pub g: Cost,
    pub h: Cost,
    pub state: State,
    pub predecessor: u64
}

impl Node {
    pub fn new(state: State, g: Cost, h: Cost, predecessor: u64) -> Self {
        Self { f: g + h, g, h, state, predecessor }
    }
}

/// Nodes with lower `f` are greater, so `BinaryHeap` pops them first.
/// Among equal `f`, deeper nodes go first; remaining ties are broken by the board only to keep the order total.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.state.board.cmp(&other.state.board))
            .then_with(|| self.predecessor.cmp(&other.predecessor))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// Open set: nodes discovered but not expanded yet.
///
/// There is no decrease-key: each board enters the frontier once, with the `g` of its first discovery.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Node>,
    /// Key of board -> key of its predecessor, for every node in `heap`.
    members: FxHashMap<u64, u64>
}

impl Frontier {
    /// Inserts `node` unless a node with the same board is already present.
    pub fn push(&mut self, node: Node) -> bool {
        if self.members.contains_key(&node.state.key()) { return false; }
        self.members.insert(node.state.key(), node.predecessor);
        self.heap.push(node);
        true
    }

    /// Removes and returns the node with minimal `f`.
    pub fn pop(&mut self) -> Option<Node> {
        let node = self.heap.pop()?;
        self.members.remove(&node.state.key());
        Some(node)
    }

    #[inline] pub fn contains(&self, key: u64) -> bool { self.members.contains_key(&key) }

    #[inline] pub fn predecessor(&self, key: u64) -> Option<u64> { self.members.get(&key).copied() }

    #[inline] pub fn len(&self) -> usize { self.heap.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.heap.is_empty() }
}

/// Closed set: key of each expanded board -> key of its predecessor.
#[derive(Default)]
pub struct Visited {
    predecessors: FxHashMap<u64, u64>
}

impl Visited {
    #[inline] pub fn insert(&mut self, key: u64, predecessor: u64) { self.predecessors.insert(key, predecessor); }

    #[inline] pub fn contains(&self, key: u64) -> bool { self.predecessors.contains_key(&key) }

    #[inline] pub fn predecessor(&self, key: u64) -> Option<u64> { self.predecessors.get(&key).copied() }

    #[inline] pub fn len(&self) -> usize { self.predecessors.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.predecessors.is_empty() }
}

/// Shortest sequence of boards from the initial board to the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Boards from the initial one (included) to the goal (included).
    pub path: Vec<State>,
    /// `moves[i]` transforms `path[i]` into `path[i+1]`.
    pub moves: Vec<MoveCommand>
}

impl Solution {
    /// Number of moves.
    #[inline] pub fn len(&self) -> usize { self.moves.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.moves.is_empty() }
}

/// Frontier and visited set of a single search run.
pub struct SearchContext<'s, H: Heuristic> {
    solver: &'s Solver<H>,
    frontier: Frontier,
    visited: Visited,
    start: State
}

impl<'s, H: Heuristic> SearchContext<'s, H> {
    pub fn new(solver: &'s Solver<H>, start: State) -> Self {
        let mut frontier = Frontier::default();
        frontier.push(Node::new(start, 0, solver.heuristic.value_for_state(start), NO_PREDECESSOR));
        Self { solver, frontier, visited: Visited::default(), start }
    }

    /// Expands nodes until the goal is popped from the frontier. Returns the goal node.
    ///
    /// The goal is moved to the visited set as well, so its predecessors can be followed uniformly.
    pub fn run(&mut self, stats: &mut impl SearchStatsCollector) -> Result<Node, SolveError> {
        while let Some(node) = self.frontier.pop() {
            let key = node.state.key();
            if node.state.is_goal() {
                self.visited.insert(key, node.predecessor);
                debug!("goal reached at depth {} after {} expansions, {} nodes left in frontier",
                       node.g, self.visited.len() - 1, self.frontier.len());
                return Ok(node);
            }
            if !stats.expanded() {
                warn!("search limit reached after {} expansions, {} nodes left in frontier",
                      self.visited.len(), self.frontier.len() + 1);
                return Err(SolveError::LimitReached { expanded: self.visited.len() as u64 });
            }
            trace!("expanding f={} g={} h={} [{}]", node.f, node.g, node.h, node.state.line());
            for successor in successors(&self.solver.neighbors, node.state) {
                let successor_key = successor.state.key();
                if self.frontier.contains(successor_key) || self.visited.contains(successor_key) {
                    stats.duplicate();
                    continue;
                }
                // the tile moved from swap.1 into the blank cell swap.0
                let h = self.solver.heuristic.update_value(node.h, successor.tile, successor.swap.1, successor.swap.0);
                self.frontier.push(Node::new(successor.state, node.g + 1, h, key));
                stats.generated();
            }
            self.visited.insert(key, node.predecessor);
        }
        debug!("frontier exhausted after {} expansions", self.visited.len());
        Err(SolveError::Exhausted { expanded: self.visited.len() as u64 })
    }

    /// Walks the predecessors back from `goal` and converts the path to moves.
    pub fn solution(&self, goal: &Node) -> Result<Solution, SolveError> {
        let path = reconstruct(&self.visited, goal.state);
        if path.first() != Some(&self.start) || path.len() != goal.g as usize + 1 {
            return Err(SolveError::DetachedPath);
        }
        let moves = move_commands(&path)?;
        Ok(Solution { path, moves })
    }
}

/// Finds minimum-length sequences of swaps that transform boards into the goal.
pub struct Solver<H: Heuristic = CellMetric> {
    /// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
    pub neighbors: Neighbors,

    pub heuristic: H
}

impl Solver<CellMetric> {
    /// Constructs solver guided by the Manhattan heuristic.
    pub fn new() -> Self { Self::with_heuristic(board_metric()) }
}

impl Default for Solver<CellMetric> {
    fn default() -> Self { Self::new() }
}

impl<H: Heuristic> Solver<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { neighbors: board_neighbors(), heuristic }
    }

    /// Returns the shortest solution of `start` or the reason why it was not found.
    /// Collect statistics during search, `stats` can also stop the search.
    pub fn solve_stats(&self, start: State, stats: &mut impl SearchStatsCollector) -> Result<Solution, SolveError> {
        if !start.is_well_formed() { return Err(SolveError::MalformedStart); }
        debug!("solving [{}], heuristic {}", start.line(), self.heuristic.value_for_state(start));
        let mut context = SearchContext::new(self, start);
        let goal = context.run(stats)?;
        context.solution(&goal)
    }

    /// Returns the shortest solution of `start`.
    #[inline] pub fn solve(&self, start: State) -> Result<Solution, SolveError> {
        self.solve_stats(start, &mut ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::replay;
    use crate::puzzle_sliding16x2::successors::scramble;
    use crate::stats::{Limited, SearchAllStats};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, VecDeque};

    /// Distances from the goal of all states at most `max_depth` moves away, by breadth-first search.
    fn bfs_distances(max_depth: u16) -> HashMap<State, u16> {
        let neighbors = board_neighbors();
        let mut distances = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(State::goal(), 0);
        queue.push_back(State::goal());
        while let Some(state) = queue.pop_front() {
            let d = distances[&state];
            if d == max_depth { continue; }
            for s in successors(&neighbors, state) {
                if !distances.contains_key(&s.state) {
                    distances.insert(s.state, d + 1);
                    queue.push_back(s.state);
                }
            }
        }
        distances
    }

    #[test]
    fn test_node_order() {
        let mut heap = BinaryHeap::new();
        heap.push(Node::new(State::goal(), 3, 4, 0));
        heap.push(Node::new(State::goal(), 1, 2, 0));
        heap.push(Node::new(State::goal(), 2, 1, 0));
        heap.push(Node::new(State::goal(), 0, 9, 0));
        assert_eq!(heap.pop().map(|n| (n.f, n.g)), Some((3, 2)));
        assert_eq!(heap.pop().map(|n| (n.f, n.g)), Some((3, 1)));
        assert_eq!(heap.pop().map(|n| n.f), Some(7));
        assert_eq!(heap.pop().map(|n| n.f), Some(9));
    }

    #[test]
    fn test_frontier_membership() {
        let mut frontier = Frontier::default();
        let a = State::goal().swapped(14, 13);
        assert!(frontier.push(Node::new(State::goal(), 2, 0, a.key())));
        assert!(!frontier.push(Node::new(State::goal(), 0, 0, NO_PREDECESSOR)));
        assert!(frontier.push(Node::new(a, 0, 1, NO_PREDECESSOR)));
        assert_eq!(frontier.len(), 2);
        assert!(frontier.contains(State::GOAL.key()));
        assert_eq!(frontier.predecessor(State::GOAL.key()), Some(a.key()));
        assert_eq!(frontier.pop().map(|n| n.state), Some(a));
        assert!(!frontier.contains(a.key()));
        assert_eq!(frontier.pop().map(|n| n.state), Some(State::goal()));
        assert!(frontier.is_empty());
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_incremental_heuristic_matches_full() {
        let solver = Solver::new();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..100 {
            let state = scramble(&solver.neighbors, &mut rng, 40);
            let h = solver.heuristic.value_for_state(state);
            for s in successors(&solver.neighbors, state) {
                let updated = solver.heuristic.update_value(h, s.tile, s.swap.1, s.swap.0);
                assert_eq!(updated, solver.heuristic.value_for_state(s.state));
                assert!(updated.abs_diff(h) == 1);  // consistency under unit costs
            }
        }
    }

    #[test]
    fn test_goal_is_solved_immediately() {
        let mut stats = SearchAllStats::default();
        let solution = Solver::new().solve_stats(State::goal(), &mut stats).unwrap();
        assert_eq!(solution.path, vec![State::goal()]);
        assert!(solution.is_empty());
        assert_eq!(stats.expanded, 0);
    }

    #[test]
    fn test_optimal_on_bfs_states() {
        let distances = bfs_distances(5);
        let solver = Solver::new();
        for (state, distance) in distances.iter().step_by(37) {
            let solution = solver.solve(*state).unwrap();
            assert_eq!(solution.len(), *distance as usize, "{:?}", state);
            assert_eq!(replay(*state, &solution.moves), State::goal());
        }
    }

    #[test]
    fn test_manhattan_agrees_with_uniform_cost() {
        let manhattan = Solver::new();
        let uniform = Solver::with_heuristic(());
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..5 {
            let state = scramble(&manhattan.neighbors, &mut rng, 6);
            let a = manhattan.solve(state).unwrap();
            let b = uniform.solve(state).unwrap();
            assert_eq!(a.len(), b.len());
            assert!(a.len() <= 6);
        }
    }

    #[test]
    fn test_deterministic_length() {
        let solver = Solver::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let state = scramble(&solver.neighbors, &mut rng, 20);
        let first = solver.solve(state).unwrap();
        for _ in 0..3 {
            assert_eq!(solver.solve(state).unwrap().len(), first.len());
        }
        assert_eq!(replay(state, &first.moves), State::goal());
    }

    #[test]
    fn test_limit_reached() {
        let solver = Solver::with_heuristic(());
        let state = scramble(&solver.neighbors, &mut ChaCha8Rng::seed_from_u64(3), 40);
        let mut limited = Limited::with_limit(10);
        assert_eq!(solver.solve_stats(state, &mut limited), Err(SolveError::LimitReached { expanded: 10 }));
        assert_eq!(limited.stats.expanded, 10);
    }

    #[test]
    fn test_malformed_start() {
        let three_blanks: State = (1..=13).chain([0, 0, 0]).collect();
        assert_eq!(Solver::new().solve(three_blanks), Err(SolveError::MalformedStart));
    }
}
