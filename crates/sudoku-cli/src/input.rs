//! Puzzle input: nine digit rows (default) or one 81-character line,
//! from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use sudoku_backtrack::{Grid, ParseGridError};

/// Everything that can go wrong before the solver sees a grid.
#[derive(Debug)]
pub enum InputError {
    /// The file or stream could not be read
    Io(io::Error),
    /// The text did not describe a 9x9 digit grid
    Parse(ParseGridError),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "cannot read puzzle: {}", e),
            InputError::Parse(e) => write!(f, "bad puzzle format: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

impl From<ParseGridError> for InputError {
    fn from(e: ParseGridError) -> Self {
        InputError::Parse(e)
    }
}

/// Read a grid from `file`, or stdin when `file` is `None`.
pub fn read_grid(file: Option<&Path>, line_form: bool) -> Result<Grid, InputError> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    grid_from_text(&text, line_form)
}

/// Shared by the file and stdin paths. Surrounding whitespace and blank
/// lines are tolerated; everything else must be digit rows.
fn grid_from_text(text: &str, line_form: bool) -> Result<Grid, InputError> {
    if line_form {
        Ok(Grid::from_line(text.trim())?)
    } else {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        Ok(Grid::from_rows(&rows)?)
    }
}
