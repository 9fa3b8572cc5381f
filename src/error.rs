//! Error types shared by the generators, the CLI and the benchmark driver.

use thiserror::Error;

/// Failure to obtain seed material for a generator.
///
/// Always fatal for a benchmark run: a generator is never built from a
/// fixed fallback seed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),

    #[error("entropy source exhausted after {drawn} words")]
    Exhausted { drawn: usize },
}

/// Invalid command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("sample count must be at least 1")]
    ZeroSamples,

    #[error("variant '{0}' not found")]
    UnknownVariant(String),
}

/// Failure while running the benchmark driver.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("seeding failed: {0}")]
    Seed(#[from] SeedError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
