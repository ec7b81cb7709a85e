use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{pathing_grid::PathingGrid, solver::GridSolver, N_SMALLVEC_SIZE};

/// A* with the Manhattan distance as heuristic.
///
/// With the default `heuristic_factor` of 1.0 the heuristic is admissible and consistent on a
/// 4-connected unit-cost grid, so returned paths are optimal. Factors above 1.0 give weighted A*,
/// which expands fewer cells but may return longer paths.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        AstarSolver { heuristic_factor }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PathingGrid, node: &Point) -> Self::Successors {
        grid.neighbours_and_cost(node)
    }

    /// Just the cost times a heuristic factor.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        (self.cost(p1, p2) as f32 * self.heuristic_factor) as i32
    }
}
