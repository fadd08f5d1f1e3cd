use pathfinding_sandbox::{Position, SandboxConfig, SearchSession};

// Replays the clicks a user would make on a 10x10 board of 40 pixel cells:
// - left click sets the start, a second left click sets the goal
// - right click toggles a wall (refused on the start and goal)
// - middle click runs the search
//
// Run with RUST_LOG=debug to see heuristic recomputation and search statistics.

enum Click {
    Left(i32, i32),
    Right(i32, i32),
    Middle,
}

fn print_board(session: &SearchSession) {
    println!("{}", session);
    for r in 0..session.grid().rows() as i32 {
        let labels = (0..session.grid().cols() as i32)
            .map(|c| {
                let label = session
                    .get_cell(Position::new(r, c))
                    .map(|cell| cell.heuristic_label())
                    .unwrap_or_default();
                format!("{:>3}", label)
            })
            .collect::<String>();
        println!("{}", labels);
    }
}

fn main() {
    env_logger::init();
    let config = SandboxConfig::for_window(400, 400, 40);
    let mut session = SearchSession::from_config(&config);

    let mut clicks = vec![Click::Left(20, 20), Click::Left(380, 300)];
    // A wall across most of the fourth column.
    for row in 0..8 {
        clicks.push(Click::Right(140, row * 40 + 20));
    }
    // Walling the start is refused.
    clicks.push(Click::Right(20, 20));
    clicks.push(Click::Middle);

    for click in clicks {
        match click {
            Click::Left(x, y) => {
                if let Some(pos) = config.cell_at_pixel(x, y) {
                    println!("Clicked cell {}", pos);
                    if let Err(e) = session.select_cell(pos) {
                        println!("{}", e);
                    }
                }
            }
            Click::Right(x, y) => {
                if let Some(pos) = config.cell_at_pixel(x, y) {
                    session.toggle_wall(pos);
                }
            }
            Click::Middle => match session.search() {
                Ok(report) => match report.outcome.path() {
                    Some(path) => println!("Path found: {}", path),
                    None => println!("No path found."),
                },
                Err(e) => println!("{}", e),
            },
        }
    }
    print_board(&session);
}
