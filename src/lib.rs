//! # PRNG-Compare
//!
//! Throughput comparison of Mersenne-Twister family generators: a scalar
//! MT19937, the SIMD-oriented SFMT-19937 and a sixteen-lane AVX-512 MT19937.
//! Each generator draws the same number of values, the mean is printed to keep
//! the work observable, and named checkpoints time every run.

pub mod config;
pub mod error;
pub mod random;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{parse_args, BenchConfig, Command};
    pub use crate::error::{BenchError, ConfigError, SeedError};
    pub use crate::random::mt19937::MtRand;
    pub use crate::random::mt19937x16::Avx512Rand;
    pub use crate::random::sfmt::SfmtRand;
    pub use crate::random::{EntropySource, Generator, OsEntropy};
    pub use crate::registry::{build_registry, GeneratorVariant, VariantRegistry};
}
