//! Command line configuration.
//!
//! Usage:
//!   prng-compare                     # Run every generator over 2^32 - 1 values
//!   prng-compare --samples 1000000   # Shorter run
//!   prng-compare sfmt19937           # Run one generator
//!   prng-compare --list              # List generators
//!   prng-compare --help              # Show help

use crate::error::ConfigError;

/// Values drawn per generator unless `--samples` says otherwise
pub const DEFAULT_SAMPLES: u64 = u32::MAX as u64;

/// Settings for one benchmark run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Values drawn from each generator
    pub samples: u64,
    /// Deterministic seed material instead of OS entropy
    pub seed: Option<u64>,
    /// Write results to this CSV file
    pub csv_path: Option<String>,
    /// Pin the thread to its current core during each run
    pub pin: bool,
    /// Cross-check SIMD kernels against their references before running
    pub verify: bool,
    /// Generators to run; empty means all
    pub variants: Vec<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
            csv_path: None,
            pin: true,
            verify: false,
            variants: Vec::new(),
        }
    }
}

/// What the binary was asked to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(BenchConfig),
    List,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = BenchConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" | "-l" => return Ok(Command::List),
            "--help" | "-h" => return Ok(Command::Help),
            "--samples" | "-n" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--samples"))?;
                config.samples = parse_number("--samples", &value)?;
                if config.samples == 0 {
                    return Err(ConfigError::ZeroSamples);
                }
            }
            "--seed" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                config.seed = Some(parse_number("--seed", &value)?);
            }
            "--csv" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--csv"))?;
                config.csv_path = Some(value);
            }
            "--no-pin" => config.pin = false,
            "--verify" => config.verify = true,
            name if !name.starts_with('-') => config.variants.push(name.to_string()),
            _ => return Err(ConfigError::UnknownOption(arg)),
        }
    }

    Ok(Command::Run(config))
}

fn parse_number(option: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .replace('_', "")
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            option,
            value: value.to_string(),
        })
}
