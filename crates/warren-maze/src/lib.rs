//! **warren-maze** — randomized weighted maze generation.
//!
//! Builds a solvable maze on top of a [`warren_core::MazeGrid`]:
//!
//! 1. carve a spanning-tree maze with an iterative randomized DFS over the
//!    odd half-resolution lattice,
//! 2. braid extra passages so alternate routes exist,
//! 3. place start and end in diagonally opposite quadrants,
//! 4. paint light and heavy weighted regions,
//! 5. verify global connectivity, retrying from scratch on failure.
//!
//! Randomness is injected as a seeded [`rand::Rng`], so generation is
//! deterministic and reproducible under test.

mod error;
mod generator;

pub use error::GenError;
pub use generator::{GenConfig, MazeGen, generate_seeded};
