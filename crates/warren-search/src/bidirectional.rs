//! Bidirectional A* variants.
//!
//! Two full A* searches run toward each other, one rooted at the start and
//! one at the end. The search stops at the first cell expanded by one side
//! that the other side has already visited, and the two predecessor chains
//! are stitched there.
//!
//! Stopping at the first meeting does not guarantee a globally optimal path;
//! this is a known weakness of the naive meeting condition, preserved here
//! for parity with historical benchmark results. Tests treat the cost as an
//! upper bound on the unidirectional A* optimum, not as equal to it.

use std::collections::{BinaryHeap, HashMap, HashSet};

use warren_core::{MazeGrid, Point, Status};

use crate::engine::{SearchOptions, SearchResult};
use crate::frontier::ScoredPoint;
use crate::heuristics::Heuristic;
use crate::reconstruct::{mark_path, stitch};

/// One directed half of a bidirectional search.
struct Side {
    origin: Point,
    goal: Point,
    open: BinaryHeap<ScoredPoint>,
    cost: HashMap<Point, i32>,
    came_from: HashMap<Point, Point>,
    visited: HashSet<Point>,
}

impl Side {
    fn new(origin: Point, goal: Point, h: Heuristic) -> Self {
        let mut open = BinaryHeap::new();
        open.push(ScoredPoint {
            score: h.estimate(origin, goal),
            cost: 0,
            pos: origin,
        });
        Self {
            origin,
            goal,
            open,
            cost: HashMap::from([(origin, 0)]),
            came_from: HashMap::new(),
            visited: HashSet::new(),
        }
    }

    /// Expand a single cell, relaxing its neighbors. Returns the expanded
    /// cell, or `None` once the frontier holds nothing but stale entries.
    fn expand(&mut self, grid: &mut MazeGrid, h: Heuristic, nbuf: &mut Vec<Point>) -> Option<Point> {
        while let Some(ScoredPoint { pos: current, .. }) = self.open.pop() {
            if !self.visited.insert(current) {
                continue;
            }
            grid.mark(current, Status::Visited);

            let current_cost = self.cost[&current];
            grid.neighbors(current, nbuf);
            for &n in nbuf.iter() {
                if self.visited.contains(&n) {
                    continue;
                }
                let tentative = current_cost + grid.weight(n);
                if tentative < self.cost.get(&n).copied().unwrap_or(i32::MAX) {
                    self.cost.insert(n, tentative);
                    self.came_from.insert(n, current);
                    grid.mark(n, Status::Frontier);
                    self.open.push(ScoredPoint {
                        score: tentative + h.estimate(n, self.goal),
                        cost: tentative,
                        pos: n,
                    });
                }
            }
            return Some(current);
        }
        None
    }
}

/// Bidirectional A* alternating one expansion per side.
pub fn bi_astar(
    grid: &mut MazeGrid,
    start: Point,
    end: Point,
    opts: &SearchOptions,
) -> SearchResult {
    run(grid, start, end, opts, false)
}

/// Equalized bidirectional A*: before each step, expand whichever side
/// currently has the smaller frontier, keeping the two searches balanced
/// and reducing total expansions.
pub fn bi_astar_balanced(
    grid: &mut MazeGrid,
    start: Point,
    end: Point,
    opts: &SearchOptions,
) -> SearchResult {
    run(grid, start, end, opts, true)
}

fn run(
    grid: &mut MazeGrid,
    start: Point,
    end: Point,
    opts: &SearchOptions,
    balanced: bool,
) -> SearchResult {
    let h = opts.heuristic;
    let mut fwd = Side::new(start, end, h);
    let mut bwd = Side::new(end, start, h);
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0usize;
    let mut forward_turn = true;

    loop {
        if fwd.open.is_empty() && bwd.open.is_empty() {
            break;
        }
        if opts.exhausted(steps) {
            break;
        }

        let take_fwd = if balanced {
            if fwd.open.is_empty() {
                false
            } else if bwd.open.is_empty() {
                true
            } else {
                fwd.open.len() <= bwd.open.len()
            }
        } else {
            let t = forward_turn;
            forward_turn = !forward_turn;
            t
        };

        let meeting = {
            let (side, other) = if take_fwd {
                (&mut fwd, &mut bwd)
            } else {
                (&mut bwd, &mut fwd)
            };
            match side.expand(grid, h, &mut nbuf) {
                None => None,
                Some(m) => {
                    steps += 1;
                    // Meeting test after every single-cell expansion.
                    (other.visited.contains(&m) || m == other.origin).then_some(m)
                }
            }
        };

        if let Some(m) = meeting {
            log::debug!(
                "bidirectional a* met at {m} after {steps} expansions ({} fwd / {} bwd visited)",
                fwd.visited.len(),
                bwd.visited.len()
            );
            let path = stitch(&fwd.came_from, &bwd.came_from, m);
            mark_path(grid, &path);
            return SearchResult {
                path,
                visited: union_visited(&fwd, &bwd),
            };
        }
    }

    SearchResult {
        path: Vec::new(),
        visited: union_visited(&fwd, &bwd),
    }
}

fn union_visited(fwd: &Side, bwd: &Side) -> HashSet<Point> {
    fwd.visited.union(&bwd.visited).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconstruct::path_cost;
    use crate::testgrid::{assert_contiguous, open_grid, wall};

    #[test]
    fn both_variants_find_valid_paths() {
        for balanced in [false, true] {
            let mut grid = open_grid(9);
            let (start, end) = (grid.start(), grid.end());
            let result = run(&mut grid, start, end, &SearchOptions::default(), balanced);
            assert!(result.found());
            assert_eq!(result.path.first(), Some(&start));
            assert_eq!(result.path.last(), Some(&end));
            assert_contiguous(&grid, &result.path);
            // First-meeting stitching never beats the true optimum.
            assert!(path_cost(&grid, &result.path) >= 12);
        }
    }

    #[test]
    fn path_has_no_duplicate_cells() {
        let mut grid = open_grid(9);
        let (start, end) = (grid.start(), grid.end());
        let result = bi_astar(&mut grid, start, end, &SearchOptions::default());
        let mut seen = HashSet::new();
        for &p in &result.path {
            assert!(seen.insert(p), "duplicate {p} in stitched path");
        }
    }

    #[test]
    fn adjacent_start_and_end_meet_immediately() {
        let mut grid = open_grid(7);
        grid.set_start(Point::new(1, 1));
        grid.set_end(Point::new(2, 1));
        let result = bi_astar(&mut grid, Point::new(1, 1), Point::new(2, 1), &SearchOptions::default());
        assert_eq!(result.path, vec![Point::new(1, 1), Point::new(2, 1)]);
    }

    #[test]
    fn unreachable_end_drains_both_frontiers() {
        for balanced in [false, true] {
            let mut grid = open_grid(7);
            wall(&mut grid, &[Point::new(4, 5), Point::new(5, 4), Point::new(4, 4)]);
            let (start, end) = (grid.start(), grid.end());
            let result = run(&mut grid, start, end, &SearchOptions::default(), balanced);
            assert!(!result.found());
            assert!(result.visited.contains(&start));
            assert!(result.visited.contains(&end));
        }
    }
}
