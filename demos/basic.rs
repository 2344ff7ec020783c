//! Basic example of using the Sudoku engine

use sudoku_engine::{placement, Grid, Position, Solver};

fn main() {
    let puzzle_string =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    // Validate the raw string before doing anything with it
    match sudoku_engine::validate(puzzle_string) {
        Ok(()) => println!("Puzzle string is well-formed\n"),
        Err(err) => {
            println!("Rejected: {}", err);
            return;
        }
    }

    // Build the grid and show it
    let grid = match Grid::from_puzzle(puzzle_string) {
        Some(grid) => grid,
        None => return,
    };
    println!("Puzzle:");
    println!("{}", grid);
    println!("Empty cells: {}\n", grid.empty_count());

    // Ask about a single placement
    let pos = Position::parse("A2").unwrap();
    for value in [3, 4] {
        let conflicts = placement::conflicts(&grid, pos, value);
        if conflicts.is_empty() {
            println!("Placing {} at {} is conflict-free", value, pos);
        } else {
            let axes: Vec<String> = conflicts.iter().map(|a| a.to_string()).collect();
            println!(
                "Placing {} at {} conflicts on: {}",
                value,
                pos,
                axes.join(", ")
            );
        }
    }

    // Solve it
    println!("\nSolving...\n");
    if let Some(solution) = Solver::new().solve(&grid) {
        println!("Solution:");
        println!("{}", solution);
        println!("As a line: {}", solution.to_line());
    } else {
        println!("Puzzle cannot be solved");
    }
}
