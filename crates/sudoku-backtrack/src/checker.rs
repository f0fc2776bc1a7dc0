//! Uniqueness checks along one row, column, or block.
//!
//! Each check reads exactly nine values from one view of the grid and is
//! pure. Zeros mean "not yet decided" and never count as a conflict.

use crate::grid::{Grid, Position};

impl Grid {
    /// True iff the non-zero values of row `row` contain no duplicates.
    pub fn row_ok(&self, row: usize) -> bool {
        assert!(row < 9, "row out of range: {}", row);
        line_ok(&self.rows[row])
    }

    /// True iff the non-zero values of column `col` contain no duplicates.
    pub fn col_ok(&self, col: usize) -> bool {
        assert!(col < 9, "col out of range: {}", col);
        line_ok(&self.cols[col])
    }

    /// True iff the non-zero values of block `block` contain no duplicates.
    pub fn block_ok(&self, block: usize) -> bool {
        assert!(block < 9, "block out of range: {}", block);
        line_ok(&self.blocks[block])
    }

    /// Composite check guarding a tentative placement at `pos`: its row,
    /// its column, and its block must all be duplicate-free. Rescans all
    /// 27 values every call; no incremental state.
    pub fn cell_ok(&self, pos: Position) -> bool {
        self.row_ok(pos.row) && self.col_ok(pos.col) && self.block_ok(pos.block())
    }

    /// Sole authority on "solved": every cell filled and all 27
    /// line/block checks passing.
    pub fn is_solved(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        (0..9).all(|j| self.row_ok(j) && self.col_ok(j) && self.block_ok(j))
    }
}

/// Count non-zero entries and distinct non-zero entries; equal counts
/// mean no value occurs twice.
fn line_ok(line: &[u8; 9]) -> bool {
    let mut seen = [false; 10];
    let mut total = 0;
    let mut distinct = 0;
    for &value in line {
        if value != 0 {
            total += 1;
            if !seen[value as usize] {
                seen[value as usize] = true;
                distinct += 1;
            }
        }
    }
    total == distinct
}
