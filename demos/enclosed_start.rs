use pathfinding_sandbox::{greedy_best_first, recompute_heuristics, Grid, Position};

// In this example no path exists on a 3x3 grid with shape
//  ___
// |S# |
// |## |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// The search gives up after expanding only the start.

fn main() {
    let mut grid = Grid::from_rows(&[".#.", "##.", "..."]).unwrap();
    println!("{}", grid);
    let start = Position::new(0, 0);
    let end = Position::new(2, 2);
    recompute_heuristics(&mut grid, end);
    for allow_diagonals in [false, true] {
        let report = greedy_best_first(&grid, start, end, allow_diagonals).unwrap();
        println!(
            "diagonals: {}; found: {}; expanded: {}",
            allow_diagonals,
            report.outcome.is_found(),
            report.stats.expanded
        );
    }
}
