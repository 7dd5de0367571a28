use std::io;

use thiserror::Error;

/// Failures that stop the program before or during the menu loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("You must provide the name of the file to process")]
    Usage,

    #[error("Could not open file {path}: {source}")]
    FileAccess { path: String, source: io::Error },

    #[error("Could not read movie data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A movie line that could not be turned into a record.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected 4 fields but found {found}")]
    MissingField { found: usize },

    #[error("the {0} field is empty")]
    EmptyField(&'static str),

    #[error("year {0:?} is not a valid year")]
    InvalidYear(String),

    #[error("rating {0:?} is not a number")]
    InvalidRating(String),
}

/// Bad input typed at the menu. The menu reports it and asks again.
#[derive(Debug, Error, PartialEq)]
pub enum MenuInputError {
    #[error("You entered an incorrect choice. Try again")]
    InvalidChoice(String),

    #[error("You entered an invalid year")]
    InvalidYear(String),
}
