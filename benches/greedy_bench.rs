use criterion::{criterion_group, criterion_main, Criterion};
use pathfinding_sandbox::{greedy_best_first, recompute_heuristics, Grid, Position};
use pathfinding_sandbox_benchmark::*;
use std::hint::black_box;

fn build_grid(map: &BenchmarkMap) -> Grid {
    let mut grid = Grid::new(map.height, map.width);
    for (r, c) in map.blocked() {
        grid.set_wall(Position::new(r, c), true).unwrap();
    }
    grid
}

fn sandbox_bench(c: &mut Criterion) {
    for name in get_benchmark_names() {
        let (map, scenarios) = get_benchmark(&name);
        let mut grid = build_grid(&map);
        for allow_diag in [false, true] {
            let diag_str = if allow_diag { "8-grid" } else { "4-grid" };
            c.bench_function(format!("{name}, greedy {diag_str}").as_str(), |b| {
                b.iter(|| {
                    for scenario in &scenarios {
                        let goal = Position::from(scenario.goal);
                        recompute_heuristics(&mut grid, goal);
                        black_box(
                            greedy_best_first(&grid, Position::from(scenario.start), goal, allow_diag)
                                .unwrap(),
                        );
                    }
                })
            });
        }
    }
}

fn heuristic_bench(c: &mut Criterion) {
    let mut grid = Grid::new(256, 256);
    c.bench_function("recompute heuristics 256x256", |b| {
        b.iter(|| recompute_heuristics(&mut grid, black_box(Position::new(128, 64))))
    });
}

criterion_group!(benches, sandbox_bench, heuristic_bench);
criterion_main!(benches);
