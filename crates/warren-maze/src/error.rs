//! Maze generation errors.

use thiserror::Error;

/// Fatal maze-generation failure.
#[derive(Debug, Error)]
pub enum GenError {
    /// Every carving attempt produced a maze that was either disconnected
    /// or could not place start and end far enough apart.
    #[error("maze generation failed: no viable maze after {attempts} attempts")]
    Exhausted { attempts: u32 },
}
