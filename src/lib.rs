//! # grid_astar
//!
//! Shortest paths on a fixed-size occupancy grid with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is 4-connected
//! (up, down, left, right) with unit step cost and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic, so returned
//! paths have the minimum number of steps. The grid additionally tracks
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so that unreachable goals can be rejected without flood-filling the grid.
//!
//! ```
//! use grid_astar::{find_path, Cell, PathingGrid};
//!
//! let mut grid = PathingGrid::new(10, 10);
//! grid.set_blocked(&Cell::new(1, 1), true).unwrap();
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(3, 4)).unwrap();
//! assert_eq!(path.len(), 8);
//! ```
pub mod astar;
pub mod error;
pub mod pathing_grid;
pub mod solver;

use grid_util::point::Point;

pub use error::PathError;
pub use pathing_grid::PathingGrid;
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

/// A grid coordinate: `x` is the column and `y` the row, both 0-indexed.
pub type Cell = Point;

/// Cost of a single orthogonal step.
pub const C: i32 = 1;
/// Inline capacity of successor buffers; a cell has at most 4 neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// Computes a minimum-length 4-connected path from `start` to `end`, both inclusive.
///
/// Fails with [PathError::OutOfBounds] if either endpoint lies off the grid and with
/// [PathError::InvalidEndpoint] if either is blocked. Returns an empty path if `end` cannot be
/// reached. Among equally short paths the choice is fixed, so repeated queries on the same grid
/// return the same cells.
pub fn find_path(grid: &PathingGrid, start: Cell, end: Cell) -> Result<Vec<Cell>, PathError> {
    AstarSolver::new().get_path_single_goal(grid, start, end)
}

/// The Manhattan distance between two cells, which is the length of a shortest path on an empty
/// grid.
pub fn heuristic(a: &Cell, b: &Cell) -> i32 {
    a.manhattan_distance(b)
}
