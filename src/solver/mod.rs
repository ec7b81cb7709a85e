use crate::astar::SearchState;
use crate::{pathing_grid::PathingGrid, PathError, C};
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info, warn};

pub mod astar;
pub mod dijkstra;

/// A shortest-path solver on a [PathingGrid]. Implementors pick the heuristic and the successor
/// generation; the query methods are shared.
///
/// Every query validates its endpoints first: cells off the grid give
/// [PathError::OutOfBounds], blocked cells give [PathError::InvalidEndpoint]. A goal that cannot
/// be reached is not an error and is reported as an empty path.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, i32)>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    fn successors(&self, grid: &PathingGrid, node: &Point) -> Self::Successors;

    /// Uses C as cost for every orthogonal step.
    fn cost(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2) * C
    }

    /// Sums the step costs along a path. Empty and single-cell paths cost nothing.
    fn get_path_cost(&self, path: &[Point]) -> i32 {
        path.iter()
            .tuple_windows()
            .map(|(v_old, v)| self.cost(v_old, v))
            .sum()
    }

    /// Computes a minimum-cost path from start to goal, both inclusive. The path is empty if no
    /// route exists.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        grid.check_endpoint(&start)?;
        grid.check_endpoint(&goal)?;
        // Clean components settle unreachable goals without searching.
        let components_clean = !grid.components_dirty;
        if components_clean && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(Vec::new());
        }
        let mut state = SearchState::new(&start, self.heuristic(&start, &goal));
        let result = state.run(
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        match result {
            Some((path, cost)) => {
                debug!(
                    "Path from {} to {} costs {} ({} nodes expanded)",
                    start,
                    goal,
                    cost,
                    state.expanded()
                );
                Ok(path)
            }
            None => {
                if components_clean {
                    warn!("Reachable goal could not be pathed to, is reachable graph correct?");
                }
                info!("No path from {} to {}", start, goal);
                Ok(Vec::new())
            }
        }
    }

    /// Computes a path from the start to the closest of the given goals and returns the selected
    /// goal in addition to the found path. [None] if `goals` is empty or none of them can be
    /// reached. Otherwise behaves similar to [get_path_single_goal](Self::get_path_single_goal).
    fn get_path_multiple_goals(
        &self,
        grid: &PathingGrid,
        start: Point,
        goals: &[Point],
    ) -> Result<Option<(Point, Vec<Point>)>, PathError> {
        grid.check_endpoint(&start)?;
        for goal in goals {
            grid.check_endpoint(goal)?;
        }
        let Some(first_goal) = goals.first() else {
            return Ok(None);
        };
        if goals.len() == 1 {
            let path = self.get_path_single_goal(grid, start, *first_goal)?;
            return Ok((!path.is_empty()).then(|| (*first_goal, path)));
        }
        let closest_goal = |point: &Point| {
            goals
                .iter()
                .map(|x| self.heuristic(point, x))
                .min()
                .unwrap_or(0)
        };
        let mut state = SearchState::new(&start, closest_goal(&start));
        let result = state.run(
            |node| self.successors(grid, node),
            closest_goal,
            |point| goals.contains(point),
        );
        Ok(result.and_then(|(path, _c)| path.last().copied().map(|goal| (goal, path))))
    }

    /// Checks that every cell of the path is free and that consecutive cells are one orthogonal
    /// step apart. The empty path is valid.
    fn is_valid_path(&self, grid: &PathingGrid, path: &[Point]) -> bool {
        path.iter().all(|p| grid.can_move_to(p))
            && path
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.manhattan_distance(b) == 1)
    }
}
