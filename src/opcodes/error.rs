use std::error::Error;
use std::fmt;

/// Table shapes the extractor refuses. Positions are 0-based, counted after
/// the header row and header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    ShortRow {
        row: usize,
        cells: usize,
    },
    TooManyCells {
        row: usize,
        cells: usize,
    },
    MissingContent {
        row: usize,
        column: usize,
    },
    MissingTiming {
        row: usize,
        column: usize,
    },
    MissingSeparator {
        row: usize,
        column: usize,
        text: String,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::ShortRow { row, cells } => write!(
                f,
                "row {} has {} cells, expected a header cell and at least one opcode",
                row, cells
            ),
            ExtractError::TooManyCells { row, cells } => write!(
                f,
                "row {} has {} opcode cells, at most 16 per row",
                row, cells
            ),
            ExtractError::MissingContent { row, column } => {
                write!(f, "cell {}/{} has no text content", row, column)
            }
            ExtractError::MissingTiming { row, column } => {
                write!(f, "cell {}/{} has no length and cycle line", row, column)
            }
            ExtractError::MissingSeparator { row, column, text } => write!(
                f,
                "cell {}/{}: expected '<length>&nbsp;&nbsp;<cycles>', found {:?}",
                row, column, text
            ),
        }
    }
}

impl Error for ExtractError {}
