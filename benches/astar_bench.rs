use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{AstarSolver, Cell, DijkstraSolver, GridSolver, PathingGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;
const N_SCENARIOS: usize = 100;

fn random_scenario() -> (PathingGrid, Vec<(Cell, Cell)>) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut pathing_grid = PathingGrid::new(N, N);
    for x in 0..N as i32 {
        for y in 0..N as i32 {
            pathing_grid
                .set_blocked(&Cell::new(x, y), rng.gen_bool(0.25))
                .unwrap();
        }
    }
    pathing_grid.generate_components();
    let mut random_free_cell = |grid: &PathingGrid| loop {
        let p = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if grid.can_move_to(&p) {
            break p;
        }
    };
    let scenarios = (0..N_SCENARIOS)
        .map(|_| {
            let start = random_free_cell(&pathing_grid);
            let end = random_free_cell(&pathing_grid);
            (start, end)
        })
        .collect();
    (pathing_grid, scenarios)
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let (mut pathing_grid, scenarios) = random_scenario();
    for (components, suffix) in [(true, ""), (false, " (no components)")] {
        pathing_grid.components_dirty = !components;
        c.bench_function(format!("{solver_name}, 4-grid{suffix}").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &scenarios {
                    let _ = black_box(solver.get_path_single_goal(&pathing_grid, *start, *end));
                }
            })
        });
    }
}

fn random_bench_astar(c: &mut Criterion) {
    bench_solver(c, "Astar", AstarSolver::new());
}

fn random_bench_dijkstra(c: &mut Criterion) {
    bench_solver(c, "Dijkstra", DijkstraSolver);
}

criterion_group!(benches, random_bench_astar, random_bench_dijkstra);
criterion_main!(benches);
