use std::error::Error;
use std::fmt;
use std::io;

use crate::opcodes::ExtractError;

#[derive(Debug)]
pub enum GenerateError {
    Io(io::Error),
    Http(reqwest::Error),
    MissingTable {
        index: usize,
        found: usize,
    },
    Extract {
        table: &'static str,
        source: ExtractError,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Io(err) => write!(f, "I/O error: {}", err),
            GenerateError::Http(err) => write!(f, "HTTP error: {}", err),
            GenerateError::MissingTable { index, found } => write!(
                f,
                "Page has no table at index {} ({} tables found)",
                index, found
            ),
            GenerateError::Extract { table, source } => {
                write!(f, "Malformed {} table: {}", table, source)
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerateError::Io(err) => Some(err),
            GenerateError::Http(err) => Some(err),
            GenerateError::MissingTable { .. } => None,
            GenerateError::Extract { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for GenerateError {
    fn from(err: io::Error) -> Self {
        GenerateError::Io(err)
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Http(err)
    }
}
