use grid_astar::{find_path, Cell, PathError, PathingGrid};
use rand::prelude::*;

// Headless replay of the click-driven demo loop on a 10x10 grid with 30 random obstacles:
// the first click picks the start, the second the end (and shows the path), the third resets
// to a new start. Clicks on obstacles are ignored.

const GRID_SIZE: usize = 10;
const OBSTACLE_COUNT: usize = 30;

enum Selection {
    Idle,
    Start(Cell),
    Path(Cell, Cell, Vec<Cell>),
}

fn render(grid: &PathingGrid, selection: &Selection) {
    let (start, end, path) = match selection {
        Selection::Idle => (None, None, &[][..]),
        Selection::Start(s) => (Some(*s), None, &[][..]),
        Selection::Path(s, e, p) => (Some(*s), Some(*e), &p[..]),
    };
    for y in 0..GRID_SIZE as i32 {
        let row = (0..GRID_SIZE as i32)
            .map(|x| {
                let p = Cell::new(x, y);
                if Some(p) == start {
                    'S'
                } else if Some(p) == end {
                    'E'
                } else if path.contains(&p) {
                    '*'
                } else if grid.can_move_to(&p) {
                    '.'
                } else {
                    '#'
                }
            })
            .collect::<String>();
        println!("{}", row);
    }
    println!();
}

fn click(grid: &PathingGrid, selection: Selection, cell: Cell) -> Result<Selection, PathError> {
    if grid.is_blocked(&cell)? {
        return Ok(selection);
    }
    Ok(match selection {
        Selection::Idle | Selection::Path(..) => Selection::Start(cell),
        Selection::Start(start) => {
            let path = find_path(grid, start, cell)?;
            if path.is_empty() {
                println!("No path found.");
            }
            Selection::Path(start, cell, path)
        }
    })
}

fn main() -> Result<(), PathError> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = PathingGrid::new(GRID_SIZE, GRID_SIZE);
    let mut placed = 0;
    while placed < OBSTACLE_COUNT {
        let cell = Cell::new(
            rng.gen_range(0..GRID_SIZE as i32),
            rng.gen_range(0..GRID_SIZE as i32),
        );
        if !grid.is_blocked(&cell)? {
            grid.set_blocked(&cell, true)?;
            placed += 1;
        }
    }
    grid.update();

    let mut selection = Selection::Idle;
    for _ in 0..6 {
        let cell = Cell::new(
            rng.gen_range(0..GRID_SIZE as i32),
            rng.gen_range(0..GRID_SIZE as i32),
        );
        println!("Click at {}", cell);
        selection = click(&grid, selection, cell)?;
        render(&grid, &selection);
    }
    Ok(())
}
