use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong outside of the engine itself
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Options(#[from] getopts::Fail),

    #[error("invalid value `{value}` for --{option}")]
    InvalidNumber { option: &'static str, value: String },

    #[error("neighbour radius must be 1 or greater, got {0}")]
    InvalidRadius(i64),

    #[error("{name} must be between 1 and {max}, got {value}")]
    InvalidDimension {
        name: &'static str,
        value: i64,
        max: u16,
    },

    #[error("unknown fill mode `{0}`")]
    InvalidFill(String),

    #[error("missing output file")]
    MissingOutput,

    #[error("pattern line {line}: unexpected `{found}`")]
    Pattern { line: usize, found: char },

    #[error("pattern line {line}: run count out of range")]
    PatternRun { line: usize },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Encoding(#[from] gif::EncodingError),
}
