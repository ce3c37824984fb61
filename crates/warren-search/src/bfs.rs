//! Breadth-first search.

use std::collections::{HashMap, HashSet, VecDeque};

use warren_core::{MazeGrid, Point, Status};

use crate::engine::{SearchOptions, SearchResult};
use crate::reconstruct::{mark_path, unwind};

/// Breadth-first search: FIFO expansion, shortest path by edge count on
/// uniform-cost grids. Cell weights are ignored.
pub fn bfs(grid: &mut MazeGrid, start: Point, end: Point, opts: &SearchOptions) -> SearchResult {
    let mut queue = VecDeque::from([start]);
    let mut visited: HashSet<Point> = HashSet::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0usize;

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        grid.mark(current, Status::Visited);

        if current == end {
            log::debug!("bfs reached the end after {steps} expansions");
            let path = unwind(&came_from, end);
            mark_path(grid, &path);
            return SearchResult { path, visited };
        }

        steps += 1;
        if opts.exhausted(steps) {
            break;
        }

        grid.neighbors(current, &mut nbuf);
        for &n in &nbuf {
            if n == start || visited.contains(&n) || came_from.contains_key(&n) {
                continue;
            }
            came_from.insert(n, current);
            grid.mark(n, Status::Frontier);
            queue.push_back(n);
        }
    }

    SearchResult {
        path: Vec::new(),
        visited,
    }
}
