use grid_astar::{find_path, Cell, PathingGrid};

// In this example a path is found on a grid with shape
//  __________
// |S         |
// |          |
// |######.###|
// |          |
// |         E|
//  __________
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// The only way down is through the opening in the wall.

fn main() {
    let mut pathing_grid = PathingGrid::new(10, 5);
    pathing_grid
        .set_rect(&Cell::new(0, 2), 10, 1, true)
        .unwrap();
    pathing_grid.set_blocked(&Cell::new(6, 2), false).unwrap();
    pathing_grid.update();
    println!("{}", pathing_grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(9, 4);
    let path = find_path(&pathing_grid, start, end).unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
