/// Checks path lengths against a breadth-first search oracle on small seeded grids, plus the
/// closed-form lengths on grids without obstacles.
use grid_astar::{find_path, heuristic, AstarSolver, Cell, GridSolver, PathingGrid};
use rand::prelude::*;
use std::collections::VecDeque;

/// Number of steps on a shortest path, or [None] if the goal cannot be reached.
fn bfs_distance(grid: &PathingGrid, start: Cell, goal: Cell) -> Option<usize> {
    let w = grid.width();
    let mut dist = vec![usize::MAX; w * grid.height()];
    let ix = |p: &Cell| p.y as usize * w + p.x as usize;
    let mut queue = VecDeque::from([start]);
    dist[ix(&start)] = 0;
    while let Some(p) = queue.pop_front() {
        if p == goal {
            return Some(dist[ix(&p)]);
        }
        for n in grid.neighbours(&p) {
            if dist[ix(&n)] == usize::MAX {
                dist[ix(&n)] = dist[ix(&p)] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn open_grid_paths_are_manhattan_optimal() {
    let grid = PathingGrid::new(7, 5);
    for sx in 0..7 {
        for sy in 0..5 {
            for (ex, ey) in [(0, 0), (6, 4), (3, 2), (6, 0)] {
                let start = Cell::new(sx, sy);
                let end = Cell::new(ex, ey);
                let path = find_path(&grid, start, end).unwrap();
                assert_eq!(path.len() as i32, heuristic(&start, &end) + 1);
            }
        }
    }
}

#[test]
fn verify_solution_distance_bfs() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(7);
    let solver = AstarSolver::new();
    for _ in 0..N_GRIDS {
        let mut grid = PathingGrid::new(N, N);
        for x in 0..N as i32 {
            for y in 0..N as i32 {
                grid.set_blocked(&Cell::new(x, y), rng.gen_bool(0.3)).unwrap();
            }
        }
        let start = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        grid.set_blocked(&start, false).unwrap();
        grid.set_blocked(&end, false).unwrap();
        let path = solver.get_path_single_goal(&grid, start, end).unwrap();
        match bfs_distance(&grid, start, end) {
            Some(distance) => {
                assert_eq!(path.len(), distance + 1);
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
                assert!(solver.is_valid_path(&grid, &path));
                assert_eq!(solver.get_path_cost(&path) as usize, distance);
            }
            None => assert!(path.is_empty()),
        }
    }
}
