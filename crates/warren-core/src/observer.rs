//! Observer seam for cell status transitions.

use crate::cell::Status;
use crate::geom::Point;

/// Receives a notification each time a cell's status changes.
///
/// Intended for external renderers that want to animate search progress.
/// The core behaves identically whether or not an observer is installed;
/// no decision ever depends on observer state.
pub trait StatusObserver {
    /// Called after the cell at `p` transitioned to `status`.
    fn cell_changed(&mut self, p: Point, status: Status);
}

/// Blanket impl so plain closures can be installed as observers.
impl<F: FnMut(Point, Status)> StatusObserver for F {
    fn cell_changed(&mut self, p: Point, status: Status) {
        self(p, status)
    }
}
