//! Depth-first search and its depth-limited adaptive variant.

use std::collections::{HashMap, HashSet, VecDeque};

use warren_core::{MazeGrid, Point, Status};

use crate::engine::{SearchOptions, SearchResult};
use crate::reconstruct::{mark_path, unwind};

/// Depth-first search: LIFO expansion, no optimality guarantee.
pub fn dfs(grid: &mut MazeGrid, start: Point, end: Point, opts: &SearchOptions) -> SearchResult {
    let mut stack = vec![start];
    let mut visited: HashSet<Point> = HashSet::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0usize;

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        grid.mark(current, Status::Visited);

        if current == end {
            log::debug!("dfs reached the end after {steps} expansions");
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
            stack.push(n);
        }
    }

    SearchResult {
        path: Vec::new(),
        visited,
    }
}

/// Depth-limited adaptive DFS.
///
/// The frontier is treated as a LIFO stack while the expansion counter is
/// below the current limit, and as a FIFO queue once it is exceeded. Every
/// FIFO fallback grows the limit by 10% (at least 1) and resets the counter,
/// so the limit is unbounded and a path is eventually found whenever one
/// exists. Bounds worst-case stack depth on deep mazes while keeping
/// DFS-like behavior on average.
pub fn adaptive_dfs(
    grid: &mut MazeGrid,
    start: Point,
    end: Point,
    opts: &SearchOptions,
) -> SearchResult {
    let mut deque = VecDeque::from([start]);
    let mut visited: HashSet<Point> = HashSet::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut steps = 0usize;

    let mut limit = opts.depth_limit.unwrap_or(grid.dim() as usize).max(1);
    let mut depth = 0usize;

    loop {
        let current = if depth < limit {
            deque.pop_back()
        } else {
            // Shift from the front, grow the limit and start a fresh run.
            limit += (limit / 10).max(1);
            depth = 0;
            deque.pop_front()
        };
        let Some(current) = current else { break };

        if !visited.insert(current) {
            continue;
        }
        grid.mark(current, Status::Visited);
        depth += 1;

        if current == end {
            log::debug!("adaptive dfs reached the end after {steps} expansions (limit {limit})");
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
            deque.push_back(n);
        }
    }

    SearchResult {
        path: Vec::new(),
        visited,
    }
}
