//! **warren-search** — interchangeable search strategies over a maze grid.
//!
//! Every strategy shares one contract: given a grid and a start/end pair it
//! returns a [`SearchResult`] whose `path` is empty iff the end is
//! unreachable, and whose `visited` set records every expanded cell. For
//! observability, expanded cells are marked `Visited` and queued cells
//! `Frontier` on the grid as the search runs.
//!
//! | Strategy | Frontier order | Optimal? |
//! |---|---|---|
//! | [`bfs`] | FIFO | by edge count on uniform weights |
//! | [`dfs`] | LIFO | no |
//! | [`adaptive_dfs`] | LIFO with growing depth limit, FIFO overflow | no (weakly complete) |
//! | [`dijkstra`] | accumulated cost | yes, non-negative weights |
//! | [`astar`] | cost + heuristic | yes, admissible heuristic |
//! | [`bi_astar`] | two A* frontiers, alternating | first-meeting approximation |
//! | [`bi_astar_balanced`] | two A* frontiers, smaller side first | first-meeting approximation |
//!
//! Strategies are selectable through the closed [`Algorithm`] enum, so
//! callers can exhaustively iterate the family for benchmarking.

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod dijkstra;
mod engine;
mod frontier;
mod heuristics;
mod reconstruct;

#[cfg(test)]
pub(crate) mod testgrid;

pub use astar::astar;
pub use bfs::bfs;
pub use bidirectional::{bi_astar, bi_astar_balanced};
pub use dfs::{adaptive_dfs, dfs};
pub use dijkstra::dijkstra;
pub use engine::{Algorithm, SearchOptions, SearchResult};
pub use heuristics::{Heuristic, chebyshev, manhattan, taxicab};
pub use reconstruct::{mark_path, path_cost, stitch, unwind};
