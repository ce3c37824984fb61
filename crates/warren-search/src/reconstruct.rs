//! Predecessor-map unwinding, path marking and cost accounting.

use std::collections::HashMap;

use warren_core::{MazeGrid, Point, Status};

/// Walk `came_from` from `terminal` back to the origin and return the chain
/// in origin-to-terminal order.
///
/// Predecessor maps form a tree rooted at the search origin (the origin has
/// no entry), so the walk always terminates.
pub fn unwind(came_from: &HashMap<Point, Point>, terminal: Point) -> Vec<Point> {
    let mut path = vec![terminal];
    let mut current = terminal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Stitch the two predecessor maps of a bidirectional search at the meeting
/// cell: the forward chain (start to meeting) followed by the backward chain
/// (meeting to end), with `meeting` appearing exactly once.
pub fn stitch(
    fwd: &HashMap<Point, Point>,
    bwd: &HashMap<Point, Point>,
    meeting: Point,
) -> Vec<Point> {
    let mut path = unwind(fwd, meeting);
    let mut tail = unwind(bwd, meeting);
    tail.reverse();
    path.extend(tail.into_iter().skip(1));
    path
}

/// Mark every path cell on the grid. Start and End are preserved by
/// [`MazeGrid::mark`], so only interior cells actually change.
pub fn mark_path(grid: &mut MazeGrid, path: &[Point]) {
    for &p in path {
        grid.mark(p, Status::Path);
    }
}

/// Total traversal cost of a path: the sum of entered-cell weights, i.e.
/// every cell except the first. This matches the accumulated cost the
/// cost-based searches carry at the goal (start excluded, end included).
pub fn path_cost(grid: &MazeGrid, path: &[Point]) -> i32 {
    path.iter().skip(1).map(|&p| grid.weight(p)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgrid::open_grid;

    fn chain(points: &[Point]) -> HashMap<Point, Point> {
        points
            .windows(2)
            .map(|pair| (pair[1], pair[0]))
            .collect()
    }

    #[test]
    fn unwind_orders_origin_to_terminal() {
        let pts = [
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
            Point::new(3, 2),
        ];
        let came_from = chain(&pts);
        assert_eq!(unwind(&came_from, Point::new(3, 2)), pts.to_vec());
        // A terminal with no predecessor unwinds to itself.
        assert_eq!(unwind(&came_from, Point::new(1, 1)), vec![Point::new(1, 1)]);
    }

    #[test]
    fn stitch_contains_meeting_exactly_once() {
        // Forward chain start -> m, backward chain end -> m.
        let m = Point::new(3, 1);
        let fwd = chain(&[Point::new(1, 1), Point::new(2, 1), m]);
        let bwd = chain(&[Point::new(5, 1), Point::new(4, 1), m]);
        let path = stitch(&fwd, &bwd, m);
        assert_eq!(
            path,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                m,
                Point::new(4, 1),
                Point::new(5, 1),
            ]
        );
        assert_eq!(path.iter().filter(|&&p| p == m).count(), 1);
    }

    #[test]
    fn stitch_at_backward_origin_degenerates_to_forward_chain() {
        let end = Point::new(3, 1);
        let fwd = chain(&[Point::new(1, 1), Point::new(2, 1), end]);
        let bwd = HashMap::new();
        assert_eq!(
            stitch(&fwd, &bwd, end),
            vec![Point::new(1, 1), Point::new(2, 1), end]
        );
    }

    #[test]
    fn cost_excludes_start_includes_end() {
        let mut grid = open_grid(7);
        let path = [Point::new(1, 1), Point::new(2, 1), Point::new(3, 1)];
        grid.set_weight(Point::new(1, 1), 99); // start weight never counted
        grid.set_weight(Point::new(2, 1), 7);
        assert_eq!(path_cost(&grid, &path), 8);
        assert_eq!(path_cost(&grid, &path[..1]), 0);
        assert_eq!(path_cost(&grid, &[]), 0);
    }

    #[test]
    fn mark_path_spares_endpoints() {
        let mut grid = open_grid(7);
        let path = [grid.start(), Point::new(2, 1), Point::new(3, 1)];
        mark_path(&mut grid, &path);
        assert_eq!(grid.status(grid.start()), Status::Start);
        assert_eq!(grid.status(Point::new(2, 1)), Status::Path);
    }
}
