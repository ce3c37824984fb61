//! **warren-core** — core types for the warren maze workspace.
//!
//! This crate provides the foundational types shared by the maze generator
//! and the search engines: geometry primitives, the cell model (semantic
//! status tags and traversal-weight tiers), the owned square [`MazeGrid`]
//! with derived 4-directional adjacency, and the optional status-observer
//! seam used by external renderers.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod observer;

pub use cell::{Cell, DEFAULT_WEIGHT, Status, WeightTier};
pub use geom::{Point, Range};
pub use grid::MazeGrid;
pub use observer::StatusObserver;
