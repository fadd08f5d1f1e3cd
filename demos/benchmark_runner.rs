use pathfinding_sandbox::{greedy_best_first, recompute_heuristics, Grid, Position};
use pathfinding_sandbox_benchmark::*;
use std::time::{Duration, Instant};

fn main() {
    let benchmark_names = get_benchmark_names();
    let mut total_time = Duration::ZERO;
    for name in benchmark_names {
        println!("Benchmark name: {}", name);

        let (map, scenarios) = get_benchmark(&name);
        let mut grid = Grid::new(map.height, map.width);
        for (r, c) in map.blocked() {
            grid.set_wall(Position::new(r, c), true).unwrap();
        }
        for allow_diag in [false, true] {
            let number_of_scenarios = scenarios.len() as u32;
            let before = Instant::now();
            let steps = run_scenarios(&mut grid, &scenarios, allow_diag);
            let elapsed = before.elapsed();
            println!(
                "\tdiagonals: {}; total steps: {}; elapsed time: {:.2?}; per scenario: {:.2?}",
                allow_diag,
                steps,
                elapsed,
                elapsed / number_of_scenarios
            );
            total_time += elapsed;
        }
    }
    println!("\tTotal benchmark time: {:.2?}", total_time);
}

pub fn run_scenarios(grid: &mut Grid, scenarios: &[Scenario], allow_diag: bool) -> usize {
    let mut steps = 0;
    for scenario in scenarios {
        let goal = Position::from(scenario.goal);
        recompute_heuristics(grid, goal);
        let report = greedy_best_first(grid, Position::from(scenario.start), goal, allow_diag)
            .expect("scenario endpoints are open cells");
        let path = report.outcome.path().expect("scenario is solvable");
        steps += path.steps();
    }
    steps
}
