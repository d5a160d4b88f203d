use thiserror::Error;

/// The raw expression is not part of the supported TeX subset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("The command starting at {start} is never closed")]
    UnterminatedCommand { start: usize },
    #[error("The command starting at {start} has an unexpected {found:?} in its name")]
    InvalidCommandName { start: usize, found: char },
    #[error("The \\end at {start} has no matching \\begin")]
    UnmatchedEnd { start: usize },
}

impl ParseError {
    pub fn start(&self) -> usize {
        match self {
            ParseError::UnterminatedCommand { start }
            | ParseError::InvalidCommandName { start, .. }
            | ParseError::UnmatchedEnd { start } => *start,
        }
    }
}
