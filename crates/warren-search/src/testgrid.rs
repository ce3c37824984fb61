//! Hand-built grids for unit tests.

use warren_core::{MazeGrid, Point, Status};

/// A grid with a fully open interior, start at (1, 1) and end at
/// (dim-2, dim-2).
pub(crate) fn open_grid(dim: i32) -> MazeGrid {
    let mut grid = MazeGrid::new(dim);
    for p in grid.interior().iter() {
        grid.set_status(p, Status::Open);
    }
    grid.set_start(Point::new(1, 1));
    grid.set_end(Point::new(grid.dim() - 2, grid.dim() - 2));
    grid
}

/// Turn the given cells back into barriers.
pub(crate) fn wall(grid: &mut MazeGrid, cells: &[Point]) {
    for &p in cells {
        grid.set_status(p, Status::Barrier);
    }
}

/// Assert the path is contiguous (consecutive cells 4-adjacent) and never
/// crosses a barrier.
pub(crate) fn assert_contiguous(grid: &MazeGrid, path: &[Point]) {
    for pair in path.windows(2) {
        let d = pair[1] - pair[0];
        assert_eq!(d.x.abs() + d.y.abs(), 1, "gap between {} and {}", pair[0], pair[1]);
    }
    for &p in path {
        assert!(!grid.is_barrier(p), "path crosses barrier at {p}");
    }
}
