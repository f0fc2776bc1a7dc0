//! Chronological backtracking over the initially-empty cells.
//!
//! The next candidate for a cell is encoded as the cell's current value:
//! advancing a cell always resumes one above whatever it already holds,
//! so re-entering a cell after backtracking never repeats a failed
//! branch, and every cell steps through at most nine values before the
//! search is forced past it. That bound is what guarantees termination.

use crate::grid::{Grid, Position};
use std::fmt;

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every cell holds a value and all 27 uniqueness checks pass.
    Solved,
    /// Backtracking walked past the first decision cell: no assignment
    /// of the empty cells satisfies the constraints.
    Exhausted,
}

impl SolveOutcome {
    pub fn is_solved(self) -> bool {
        matches!(self, SolveOutcome::Solved)
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Solved => write!(f, "successfully solved"),
            SolveOutcome::Exhausted => write!(f, "cannot solve"),
        }
    }
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Run the search to completion. Only initially-empty cells are ever
    /// written; candidates are tried in ascending order, cells in
    /// row-major order. On [`SolveOutcome::Exhausted`] the grid is left
    /// in its last backtracked state and must not be read as a solution.
    pub fn solve(&self, grid: &mut Grid) -> SolveOutcome {
        let blanks = grid.empty_cells();
        if blanks.is_empty() {
            // Nothing to decide: a full grid is its own verdict.
            return if grid.is_solved() {
                SolveOutcome::Solved
            } else {
                SolveOutcome::Exhausted
            };
        }

        let mut index = 0;
        while index < blanks.len() {
            let pos = Position::from_index(blanks[index]);
            if advance_cell(grid, pos) {
                index += 1;
            } else {
                match backtrack(grid, &blanks, index) {
                    Some(resume) => index = resume + 1,
                    None => return SolveOutcome::Exhausted,
                }
            }
        }

        debug_assert!(grid.is_solved());
        SolveOutcome::Solved
    }
}

/// Advance the cell at `pos` to its next workable candidate: values one
/// above the current tentative value through 9 are written in turn and
/// the first passing the composite check is kept. When the range runs
/// out the cell is reset to a true empty 0 and the attempt fails.
fn advance_cell(grid: &mut Grid, pos: Position) -> bool {
    let current = grid.get(pos);
    for candidate in current + 1..=9 {
        grid.set(pos, candidate);
        if grid.cell_ok(pos) {
            return true;
        }
    }
    grid.set(pos, 0);
    false
}

/// Walk the cursor backwards from `from`, re-advancing each earlier cell
/// in turn. Returns the index that accepted a new candidate, or `None`
/// once the walk passes the first decision cell.
fn backtrack(grid: &mut Grid, blanks: &[usize], from: usize) -> Option<usize> {
    let mut index = from;
    while index > 0 {
        index -= 1;
        let pos = Position::from_index(blanks[index]);
        if advance_cell(grid, pos) {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn assert_all_lines_are_permutations(grid: &Grid) {
        for j in 0..9 {
            for line in [grid.rows[j], grid.cols[j], grid.blocks[j]] {
                let mut sorted = line;
                sorted.sort_unstable();
                assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
            }
        }
    }

    #[test]
    fn test_solve_known_puzzle() {
        let mut grid = Grid::from_line(PUZZLE).unwrap();
        let outcome = Solver::new().solve(&mut grid);
        assert!(outcome.is_solved());
        assert_eq!(grid.to_line(), SOLUTION);
        assert_all_lines_are_permutations(&grid);
    }

    #[test]
    fn test_solve_preserves_given_cells() {
        let puzzle = Grid::from_line(PUZZLE).unwrap();
        let mut grid = puzzle;
        Solver::new().solve(&mut grid);
        for index in 0..81 {
            let pos = Position::from_index(index);
            let given = puzzle.get(pos);
            if given != 0 {
                assert_eq!(grid.get(pos), given);
            }
        }
    }

    #[test]
    fn test_solve_empty_grid() {
        let mut grid = Grid::empty();
        let outcome = Solver::new().solve(&mut grid);
        assert!(outcome.is_solved());
        assert!(grid.is_solved());
        assert_all_lines_are_permutations(&grid);
        // Ascending candidates fill the first row left to right.
        for col in 0..9 {
            assert_eq!(grid.get(Position::new(0, col)), col as u8 + 1);
        }
    }

    #[test]
    fn test_exhausted_when_cell_has_no_candidate() {
        // (0,8) needs 9 to complete its row, but its column already
        // holds a 9. It is the first decision cell, so the search walks
        // straight off the front.
        let rows = [
            "123456780",
            "000000009",
            "000000000",
            "000000000",
            "000000000",
            "000000000",
            "000000000",
            "000000000",
            "000000000",
        ];
        let mut grid = Grid::from_rows(&rows).unwrap();
        let outcome = Solver::new().solve(&mut grid);
        assert_eq!(outcome, SolveOutcome::Exhausted);
        // The failed cell is a true empty again, and givens are intact.
        assert_eq!(grid.get(Position::new(0, 8)), 0);
        assert_eq!(grid.get(Position::new(1, 8)), 9);
        assert_eq!(grid.get(Position::new(0, 0)), 1);
    }

    #[test]
    fn test_already_solved_grid_is_a_no_op() {
        let mut grid = Grid::from_line(SOLUTION).unwrap();
        let before = grid;
        let outcome = Solver::new().solve(&mut grid);
        assert_eq!(outcome, SolveOutcome::Solved);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_full_but_invalid_grid_is_exhausted() {
        let mut line = String::from(SOLUTION);
        // 5 -> 3 duplicates the 3 in the first row.
        line.replace_range(0..1, "3");
        let mut grid = Grid::from_line(&line).unwrap();
        let outcome = Solver::new().solve(&mut grid);
        assert_eq!(outcome, SolveOutcome::Exhausted);
    }

    #[test]
    fn test_outcome_status_lines() {
        assert_eq!(SolveOutcome::Solved.to_string(), "successfully solved");
        assert_eq!(SolveOutcome::Exhausted.to_string(), "cannot solve");
    }

    #[test]
    fn test_solve_second_fixture() {
        let puzzle =
            "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
        let mut grid = Grid::from_line(puzzle).unwrap();
        let outcome = Solver::new().solve(&mut grid);
        assert!(outcome.is_solved());
        assert_eq!(
            grid.to_line(),
            "483921657967345821251876493548132976729564138136798245372689514814253769695417382"
        );
        assert_all_lines_are_permutations(&grid);
    }
}
