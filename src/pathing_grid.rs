use super::*;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood in the order successors are generated: +row, -row, +col, -col.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// [PathingGrid] records which cells are occupied ([true]) or free ([false]) in a [BoolGrid]
/// and additionally tracks the 4-connected components of free cells in a [UnionFind] structure
/// so that unreachable goals can be rejected without a flood fill.
///
/// The component information is only consulted while it is clean. Blocking a free cell may split
/// a component, which marks the components dirty until [update](Self::update) or
/// [generate_components](Self::generate_components) is called.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates a `width` x `height` grid with every cell free.
    pub fn new(width: usize, height: usize) -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn in_bounds(&self, cell: &Point) -> bool {
        self.grid.point_in_bounds(*cell)
    }
    /// Fails with [PathError::OutOfBounds] unless the cell lies on the grid.
    pub fn check_bounds(&self, cell: &Point) -> Result<(), PathError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                cell: *cell,
                width: self.width(),
                height: self.height(),
            })
        }
    }
    /// Fails unless the cell is on the grid and free, which is required of every start and goal.
    pub fn check_endpoint(&self, cell: &Point) -> Result<(), PathError> {
        if self.is_blocked(cell)? {
            Err(PathError::InvalidEndpoint { cell: *cell })
        } else {
            Ok(())
        }
    }
    pub fn is_blocked(&self, cell: &Point) -> Result<bool, PathError> {
        self.check_bounds(cell)?;
        Ok(self.grid.get_point(*cell))
    }
    /// Updates a cell. Freeing a cell joins it to the components of its free neighbours, while
    /// blocking a free cell flags the components as dirty since they are (potentially) broken
    /// apart into multiple.
    pub fn set_blocked(&mut self, cell: &Point, blocked: bool) -> Result<(), PathError> {
        let was_blocked = self.is_blocked(cell)?;
        self.grid.set_point(*cell, blocked);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let ix = self.grid.get_ix_point(cell);
            for n in self.neighbours(cell) {
                self.components.union(ix, self.grid.get_ix_point(&n));
            }
        }
        Ok(())
    }
    /// Sets every cell of the `width` x `height` rectangle whose top-left corner is `top_left`.
    /// The whole rectangle is checked against the bounds before anything is written.
    pub fn set_rect(
        &mut self,
        top_left: &Point,
        width: i32,
        height: i32,
        blocked: bool,
    ) -> Result<(), PathError> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        self.check_bounds(top_left)?;
        // A corner past i32::MAX saturates, which is off the grid as well.
        let far_corner = Point::new(
            top_left.x.saturating_add(width - 1),
            top_left.y.saturating_add(height - 1),
        );
        self.check_bounds(&far_corner)?;
        for x in top_left.x..=far_corner.x {
            for y in top_left.y..=far_corner.y {
                self.set_blocked(&Point::new(x, y), blocked)?;
            }
        }
        Ok(())
    }
    /// True if the cell is on the grid and free.
    pub fn can_move_to(&self, cell: &Point) -> bool {
        self.in_bounds(cell) && !self.grid.get_point(*cell)
    }
    /// The free cells one orthogonal step away, in the fixed order +row, -row, +col, -col.
    /// Offsets whose coordinates would overflow are off the grid and skipped.
    pub fn neighbours(&self, cell: &Point) -> SmallVec<[Point; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|(dx, dy)| {
                Some(Point::new(cell.x.checked_add(*dx)?, cell.y.checked_add(*dy)?))
            })
            .filter(|p| self.can_move_to(p))
            .collect()
    }
    /// The free neighbours paired with the cost of stepping onto them.
    pub fn neighbours_and_cost(&self, cell: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.neighbours(cell).into_iter().map(|p| (p, C)).collect()
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, cell: &Point) -> Result<usize, PathError> {
        self.check_bounds(cell)?;
        Ok(self.components.find(self.grid.get_ix_point(cell)))
    }
    /// Checks if start and goal are free and on the same component. Only meaningful while the
    /// components are clean.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.can_move_to(start)
            && self.can_move_to(goal)
            && self.components.equiv(
                self.grid.get_ix_point(start),
                self.grid.get_ix_point(goal),
            )
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components. Looking forward (+row and +col) is enough to visit every edge once.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(&point) {
                    continue;
                }
                let parent_ix = self.grid.get_ix_point(&point);
                for p in [Point::new(x, y + 1), Point::new(x + 1, y)] {
                    if self.can_move_to(&p) {
                        let ix = self.grid.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
