//! Cross-strategy properties over generated and hand-built mazes.

use std::collections::HashSet;

use warren_core::{MazeGrid, Point, Status};
use warren_maze::generate_seeded;
use warren_search::{Algorithm, SearchOptions, adaptive_dfs, astar, bfs, dijkstra, path_cost};

/// Flood over the open-neighbor graph, independent of the search engines.
fn reachable_from(grid: &MazeGrid, origin: Point) -> HashSet<Point> {
    let mut stack = vec![origin];
    let mut seen = HashSet::from([origin]);
    let mut buf = Vec::new();
    while let Some(p) = stack.pop() {
        grid.neighbors(p, &mut buf);
        for &n in &buf {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }
    seen
}

fn assert_valid_path(grid: &MazeGrid, path: &[Point], start: Point, end: Point, tag: &str) {
    assert_eq!(path.first(), Some(&start), "{tag}: path does not begin at start");
    assert_eq!(path.last(), Some(&end), "{tag}: path does not finish at end");
    for pair in path.windows(2) {
        let d = pair[1] - pair[0];
        assert_eq!(d.x.abs() + d.y.abs(), 1, "{tag}: gap in path");
    }
    for &p in path {
        assert!(!grid.is_barrier(p), "{tag}: path crosses a barrier at {p}");
    }
}

/// 7x7 grid, outer ring barrier, interior fully open except a 3-cell wall
/// splitting it with a single gap.
fn wall_with_gap() -> MazeGrid {
    let mut grid = MazeGrid::new(7);
    for p in grid.interior().iter() {
        grid.set_status(p, Status::Open);
    }
    for y in 1..=3 {
        grid.set_status(Point::new(3, y), Status::Barrier);
    }
    grid.set_start(Point::new(1, 1));
    grid.set_end(Point::new(5, 5));
    grid
}

#[test]
fn generated_mazes_are_fully_connected() {
    for seed in 0..8 {
        let grid = generate_seeded(25, seed).unwrap();
        let reached = reachable_from(&grid, grid.start());
        assert!(reached.contains(&grid.end()), "seed {seed}");
        assert_eq!(reached.len(), grid.open_count(), "seed {seed}");
    }
}

#[test]
fn every_strategy_solves_generated_mazes() {
    for seed in 0..4 {
        let mut grid = generate_seeded(25, seed).unwrap();
        let (start, end) = (grid.start(), grid.end());
        for algo in Algorithm::ALL {
            let result = algo.run(&mut grid, start, end, &SearchOptions::default());
            assert!(result.found(), "seed {seed}: {} found no path", algo.name());
            assert_valid_path(&grid, &result.path, start, end, algo.name());
            assert!(result.visited.len() <= grid.open_count());
            grid.reset_search();
        }
    }
}

#[test]
fn cost_based_strategies_agree_and_bound_bidirectional() {
    for seed in 0..6 {
        let mut grid = generate_seeded(25, seed).unwrap();
        let (start, end) = (grid.start(), grid.end());
        let opts = SearchOptions::default();

        let mut costs = Vec::new();
        let mut lengths = Vec::new();
        for algo in Algorithm::ALL {
            let result = algo.run(&mut grid, start, end, &opts);
            costs.push(path_cost(&grid, &result.path));
            lengths.push(result.path.len());
            grid.reset_search();
        }
        // Algorithm::ALL order: bfs, dfs, adaptive-dfs, dijkstra, a-star,
        // bi-a-star, bi-a-star-balanced.
        let (bfs_len, astar_len) = (lengths[0], lengths[4]);
        let (dijkstra_cost, astar_cost) = (costs[3], costs[4]);
        let (bi_cost, balanced_cost) = (costs[5], costs[6]);

        // Dijkstra and admissible A* find equal-cost optima.
        assert_eq!(dijkstra_cost, astar_cost, "seed {seed}");
        // First-meeting bidirectional variants never beat the optimum.
        assert!(bi_cost >= astar_cost, "seed {seed}");
        assert!(balanced_cost >= astar_cost, "seed {seed}");
        // BFS minimizes edge count, so no strategy returns a shorter path.
        assert!(bfs_len <= astar_len, "seed {seed}");
    }
}

#[test]
fn wall_with_gap_scenario() {
    let mut grid = wall_with_gap();
    let (start, end) = (grid.start(), grid.end());
    let opts = SearchOptions::default();

    let bfs_result = bfs(&mut grid, start, end, &opts);
    grid.reset_search();
    let dijkstra_result = dijkstra(&mut grid, start, end, &opts);
    grid.reset_search();
    let astar_result = astar(&mut grid, start, end, &opts);

    // The gap does not force a detour: 8 edges, 9 cells, for all three.
    assert_eq!(bfs_result.path.len(), 9);
    assert_eq!(dijkstra_result.path.len(), 9);
    assert_eq!(astar_result.path.len(), 9);
    for (result, tag) in [
        (&bfs_result, "bfs"),
        (&dijkstra_result, "dijkstra"),
        (&astar_result, "a-star"),
    ] {
        assert_valid_path(&grid, &result.path, start, end, tag);
        // Every route must thread the gap column below the wall.
        assert!(
            result.path.contains(&Point::new(3, 4)) || result.path.contains(&Point::new(3, 5)),
            "{tag}: path avoids the gap"
        );
    }

    // The heuristic prunes expansions the blind search pays for.
    assert!(astar_result.visited.len() <= bfs_result.visited.len());
}

#[test]
fn reset_and_rerun_reproduces_the_same_result() {
    let mut grid = generate_seeded(25, 17).unwrap();
    let (start, end) = (grid.start(), grid.end());
    let opts = SearchOptions::default();

    let first = astar(&mut grid, start, end, &opts);
    grid.reset_search();
    for (p, cell) in grid.iter() {
        assert!(
            !matches!(cell.status, Status::Frontier | Status::Visited | Status::Path),
            "stale mark at {p} after reset"
        );
    }
    let second = astar(&mut grid, start, end, &opts);

    assert_eq!(first.path, second.path);
    assert_eq!(first.visited.len(), second.visited.len());
}

#[test]
fn adaptive_dfs_is_weakly_complete_on_generated_mazes() {
    for seed in 0..4 {
        let mut grid = generate_seeded(25, seed).unwrap();
        let (start, end) = (grid.start(), grid.end());
        // A pathological initial limit still converges: the limit grows
        // without bound on every FIFO fallback.
        let opts = SearchOptions {
            depth_limit: Some(1),
            ..SearchOptions::default()
        };
        let result = adaptive_dfs(&mut grid, start, end, &opts);
        assert!(result.found(), "seed {seed}");
        assert_valid_path(&grid, &result.path, start, end, "adaptive-dfs");
    }
}

#[test]
fn all_strategies_report_disconnection_as_empty_path() {
    for algo in Algorithm::ALL {
        let mut grid = wall_with_gap();
        // Close the gap, splitting the interior in two.
        grid.set_status(Point::new(3, 4), Status::Barrier);
        grid.set_status(Point::new(3, 5), Status::Barrier);
        let (start, end) = (grid.start(), grid.end());
        let result = algo.run(&mut grid, start, end, &SearchOptions::default());
        assert!(!result.found(), "{}", algo.name());
        assert!(!result.visited.is_empty(), "{}", algo.name());
    }
}
