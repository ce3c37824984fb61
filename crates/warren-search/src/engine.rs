//! The common search contract: strategy selection, options and results.

use std::collections::HashSet;

use warren_core::{MazeGrid, Point};

use crate::heuristics::Heuristic;

/// The closed set of search strategies.
///
/// Selecting strategies through an enum (rather than a name-keyed map of
/// callables) keeps the family exhaustively matchable: a benchmark can walk
/// [`Algorithm::ALL`] and the compiler flags any strategy it forgot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    AdaptiveDfs,
    Dijkstra,
    AStar,
    BiAStar,
    BiAStarBalanced,
}

impl Algorithm {
    /// Every strategy, in benchmark order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::AdaptiveDfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BiAStar,
        Algorithm::BiAStarBalanced,
    ];

    /// Stable human-readable name, used by external result writers.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AdaptiveDfs => "adaptive-dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a-star",
            Algorithm::BiAStar => "bi-a-star",
            Algorithm::BiAStarBalanced => "bi-a-star-balanced",
        }
    }

    /// Run this strategy from `start` to `end` over `grid`.
    pub fn run(
        self,
        grid: &mut MazeGrid,
        start: Point,
        end: Point,
        opts: &SearchOptions,
    ) -> SearchResult {
        match self {
            Algorithm::Bfs => crate::bfs::bfs(grid, start, end, opts),
            Algorithm::Dfs => crate::dfs::dfs(grid, start, end, opts),
            Algorithm::AdaptiveDfs => crate::dfs::adaptive_dfs(grid, start, end, opts),
            Algorithm::Dijkstra => crate::dijkstra::dijkstra(grid, start, end, opts),
            Algorithm::AStar => crate::astar::astar(grid, start, end, opts),
            Algorithm::BiAStar => crate::bidirectional::bi_astar(grid, start, end, opts),
            Algorithm::BiAStarBalanced => {
                crate::bidirectional::bi_astar_balanced(grid, start, end, opts)
            }
        }
    }
}

/// Per-call tuning knobs, explicit and strongly typed.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Remaining-cost estimate for the informed strategies.
    pub heuristic: Heuristic,
    /// Initial depth limit for [`adaptive_dfs`](crate::adaptive_dfs);
    /// defaults to the grid dimension.
    pub depth_limit: Option<usize>,
    /// Upper bound on cell expansions. When exhausted the search returns
    /// an empty path with whatever it visited, as if the frontier had
    /// drained. `None` means run to completion.
    pub step_budget: Option<usize>,
}

impl SearchOptions {
    pub(crate) fn exhausted(&self, steps: usize) -> bool {
        self.step_budget.is_some_and(|budget| steps >= budget)
    }
}

/// Outcome of a single search invocation.
///
/// `path` runs start-to-end inclusive and is empty iff the end was not
/// reached. `visited` holds every expanded cell; together with
/// [`path_cost`](crate::path_cost) it is the whole metrics surface external
/// benchmarks need.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Point>,
    pub visited: HashSet<Point>,
}

impl SearchResult {
    /// Whether the end was reached.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}
