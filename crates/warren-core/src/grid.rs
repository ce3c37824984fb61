//! The owned square maze grid and its derived adjacency.

use std::fmt;

use crate::cell::{Cell, DEFAULT_WEIGHT, Status};
use crate::geom::{Point, Range};
use crate::observer::StatusObserver;

/// A square grid of [`Cell`]s with odd dimension.
///
/// The grid owns all of its cells exclusively. Adjacency is derived on
/// demand from the current barrier layout rather than stored, so it is
/// always consistent with the latest carving mutations.
///
/// An even construction dimension is rounded up to the next odd value:
/// maze carving works on a half-resolution lattice of odd coordinates and
/// needs the outermost ring to stay walled.
pub struct MazeGrid {
    dim: i32,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
    observer: Option<Box<dyn StatusObserver>>,
}

impl MazeGrid {
    /// Create an all-barrier grid of `dim x dim` cells.
    ///
    /// `dim` is clamped to at least 5 and rounded up to the next odd value
    /// when even. Start and end default to the interior corners until a
    /// generator (or test) places them.
    pub fn new(dim: i32) -> Self {
        let dim = dim.max(5);
        let dim = if dim % 2 == 0 { dim + 1 } else { dim };
        Self {
            dim,
            cells: vec![Cell::default(); (dim * dim) as usize],
            start: Point::new(1, 1),
            end: Point::new(dim - 2, dim - 2),
            observer: None,
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn dim(&self) -> i32 {
        self.dim
    }

    /// Full grid bounds, outer barrier ring included.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.dim, self.dim)
    }

    /// Interior bounds, excluding the outer barrier ring.
    #[inline]
    pub fn interior(&self) -> Range {
        Range::new(1, 1, self.dim - 1, self.dim - 1)
    }

    /// The search origin placed by the generator.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The search goal placed by the generator.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y * self.dim + p.x) as usize)
        } else {
            None
        }
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Status of the cell at `p`. Out-of-bounds positions read as Barrier,
    /// which keeps neighbor derivation free of bounds special cases.
    #[inline]
    pub fn status(&self, p: Point) -> Status {
        match self.idx(p) {
            Some(i) => self.cells[i].status,
            None => Status::Barrier,
        }
    }

    /// Whether the cell at `p` is impassable.
    #[inline]
    pub fn is_barrier(&self, p: Point) -> bool {
        self.status(p) == Status::Barrier
    }

    /// Traversal cost of entering the cell at `p`.
    #[inline]
    pub fn weight(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.cells[i].weight,
            None => DEFAULT_WEIGHT,
        }
    }

    /// Set the status of the cell at `p`, notifying the observer on change.
    /// Out-of-bounds positions are ignored.
    pub fn set_status(&mut self, p: Point, status: Status) {
        let Some(i) = self.idx(p) else { return };
        if self.cells[i].status == status {
            return;
        }
        self.cells[i].status = status;
        if let Some(obs) = self.observer.as_deref_mut() {
            obs.cell_changed(p, status);
        }
    }

    /// Set the traversal weight of the cell at `p`.
    pub fn set_weight(&mut self, p: Point, weight: i32) {
        if let Some(i) = self.idx(p) {
            self.cells[i].weight = weight;
        }
    }

    /// Mark a cell with a transient search status (Frontier, Visited, Path).
    ///
    /// Start, End and Barrier cells are never overwritten, matching the
    /// observability contract of the search engines.
    pub fn mark(&mut self, p: Point, status: Status) {
        match self.status(p) {
            Status::Start | Status::End | Status::Barrier => {}
            _ => self.set_status(p, status),
        }
    }

    /// Place the search origin, opening the cell if needed.
    pub fn set_start(&mut self, p: Point) {
        self.start = p;
        self.set_status(p, Status::Start);
    }

    /// Place the search goal, opening the cell if needed.
    pub fn set_end(&mut self, p: Point) {
        self.end = p;
        self.set_status(p, Status::End);
    }

    /// Append the non-barrier 4-neighbors of `p` into `buf`.
    ///
    /// `buf` is cleared first so callers can reuse one buffer across the
    /// whole search, avoiding per-expansion allocations.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        for n in p.neighbors_4() {
            if !self.is_barrier(n) {
                buf.push(n);
            }
        }
    }

    /// Number of passable (non-barrier) cells.
    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.status.passable())
            .count()
    }

    /// Clear all transient search marks back to Open, keeping weights,
    /// barriers and the start/end placement intact.
    pub fn reset_search(&mut self) {
        for p in self.bounds().iter() {
            if matches!(
                self.status(p),
                Status::Frontier | Status::Visited | Status::Path
            ) {
                self.set_status(p, Status::Open);
            }
        }
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds()
            .iter()
            .map(|p| (p, self.cells[(p.y * self.dim + p.x) as usize]))
    }

    /// Install an observer notified on every status transition.
    pub fn set_observer(&mut self, observer: Box<dyn StatusObserver>) {
        self.observer = Some(observer);
    }

    /// Remove the installed observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }
}

impl fmt::Display for MazeGrid {
    /// ASCII rendering, one character per cell: `#` barrier, `.` open,
    /// `S`/`E` endpoints, `+` frontier, `,` visited, `*` path.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.dim {
            for x in 0..self.dim {
                let ch = match self.status(Point::new(x, y)) {
                    Status::Barrier => '#',
                    Status::Open => '.',
                    Status::Start => 'S',
                    Status::End => 'E',
                    Status::Frontier => '+',
                    Status::Visited => ',',
                    Status::Path => '*',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
