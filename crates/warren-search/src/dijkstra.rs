//! Dijkstra uniform-cost search.

use std::collections::{BinaryHeap, HashMap, HashSet};

use warren_core::{MazeGrid, Point, Status};

use crate::engine::{SearchOptions, SearchResult};
use crate::frontier::ScoredPoint;
use crate::reconstruct::{mark_path, unwind};

/// Dijkstra: best-first expansion ordered by accumulated cost, relaxing
/// `cost[current] + weight(neighbor)`. Optimal for non-negative weights.
pub fn dijkstra(
    grid: &mut MazeGrid,
    start: Point,
    end: Point,
    opts: &SearchOptions,
) -> SearchResult {
    let mut open = BinaryHeap::new();
    open.push(ScoredPoint {
        score: 0,
        cost: 0,
        pos: start,
    });
    let mut cost: HashMap<Point, i32> = HashMap::from([(start, 0)]);
    let mut visited: HashSet<Point> = HashSet::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0usize;

    while let Some(ScoredPoint { pos: current, .. }) = open.pop() {
        // Stale heap entries are skipped instead of decrease-keyed.
        if !visited.insert(current) {
            continue;
        }
        grid.mark(current, Status::Visited);

        if current == end {
            log::debug!(
                "dijkstra reached the end at cost {} after {steps} expansions",
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
                    score: tentative,
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
