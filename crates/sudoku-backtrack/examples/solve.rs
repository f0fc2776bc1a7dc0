//! Solve a sample puzzle and print it before and after.

use sudoku_backtrack::{Grid, Solver};

fn main() {
    let puzzle =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let mut grid = Grid::from_line(puzzle).expect("sample puzzle is well-formed");

    println!("{}", grid);
    println!("Given cells: {}", grid.given_count());
    println!("Empty cells: {}", grid.empty_count());
    println!();

    let outcome = Solver::new().solve(&mut grid);
    println!("{}", grid);
    println!("{}", outcome);
}
