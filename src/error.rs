use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    /// A coordinate left the domain by more than one full span in a single tick.
    #[error("point {label} out of bounds on {axis} axis at tick {tick} (value {value})")]
    OutOfBounds {
        label: i64,
        tick: u64,
        axis: char,
        value: i64,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option {0} expects a value")]
    MissingValue(&'static str),
    #[error("option {flag} got '{value}', expected a non-negative integer")]
    InvalidValue { flag: &'static str, value: String },
}
