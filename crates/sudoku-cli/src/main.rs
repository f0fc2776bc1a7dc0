//! Thin I/O wrapper around the solver: read a puzzle, show it, solve it,
//! show the result with a status line.

mod input;

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_backtrack::{Grid, SolveOutcome, Solver};

#[derive(Parser)]
#[command(
    name = "sudoku-solve",
    version,
    about = "Solve a 9x9 Sudoku by naive backtracking"
)]
struct Cli {
    /// Puzzle file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Treat the input as one 81-character line instead of nine rows
    #[arg(long)]
    line: bool,

    /// Emit the result as JSON instead of bordered tables
    #[arg(long)]
    json: bool,
}

/// JSON report; the grid serializes as its 81-character form.
#[derive(Serialize)]
struct Report {
    status: &'static str,
    grid: Grid,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut grid = match input::read_grid(cli.file.as_deref(), cli.line) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    if !cli.json {
        print!("{}", grid);
    }

    let outcome = Solver::new().solve(&mut grid);

    if cli.json {
        let report = Report {
            status: match outcome {
                SolveOutcome::Solved => "solved",
                SolveOutcome::Exhausted => "unsolved",
            },
            grid,
        };
        let json = serde_json::to_string(&report).expect("report has no unserializable fields");
        println!("{}", json);
    } else {
        print!("{}", grid);
        println!("{}", outcome);
    }

    if outcome.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
