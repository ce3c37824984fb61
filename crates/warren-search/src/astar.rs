//! A* heuristic best-first search.

use std::collections::{BinaryHeap, HashMap, HashSet};

use warren_core::{MazeGrid, Point, Status};

use crate::engine::{SearchOptions, SearchResult};
use crate::frontier::ScoredPoint;
use crate::reconstruct::{mark_path, unwind};

/// A*: best-first expansion ordered by `cost + heuristic(cell, end)`.
///
/// Optimal whenever the heuristic is admissible; with the default Manhattan
/// estimate on a 4-connected unit-minimum-cost grid it is also consistent,
/// so no cell is ever re-expanded at a lower cost.
pub fn astar(grid: &mut MazeGrid, start: Point, end: Point, opts: &SearchOptions) -> SearchResult {
    let h = opts.heuristic;
    let mut open = BinaryHeap::new();
    open.push(ScoredPoint {
        score: h.estimate(start, end),
        cost: 0,
        pos: start,
    });
    let mut cost: HashMap<Point, i32> = HashMap::from([(start, 0)]);
    let mut visited: HashSet<Point> = HashSet::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0usize;

    while let Some(ScoredPoint { pos: current, .. }) = open.pop() {
        if !visited.insert(current) {
            continue;
        }
        grid.mark(current, Status::Visited);

        if current == end {
            log::debug!(
                "a* reached the end at cost {} after {steps} expansions",
                cost[&end]
            );
            let path = unwind(&came_from, end);
            mark_path(grid, &path);
            return SearchResult { path, visited };
        }

        steps += 1;
        if opts.exhausted(steps) {
            break;
        }

        let current_cost = cost[&current];
        grid.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if visited.contains(&n) {
                continue;
            }
            let tentative = current_cost + grid.weight(n);
            if tentative < cost.get(&n).copied().unwrap_or(i32::MAX) {
                cost.insert(n, tentative);
                came_from.insert(n, current);
                grid.mark(n, Status::Frontier);
                open.push(ScoredPoint {
                    score: tentative + h.estimate(n, end),
                    cost: tentative,
                    pos: n,
                });
            }
        }
    }

    SearchResult {
        path: Vec::new(),
        visited,
    }
}
