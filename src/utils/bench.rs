//! Shared benchmark utilities.
//!
//! The measured workload and the result record shared by the driver, the
//! results table and the CSV export.

use crate::random::Generator;
use std::time::Duration;

/// Draw `samples` values and return their arithmetic mean.
///
/// The sum is kept in an `f64`, so it cannot overflow, and the mean is
/// returned to the caller, so the generation loop cannot be optimised away.
#[inline(never)]
pub fn average_of<G: Generator>(generator: &mut G, samples: u64) -> f64 {
    let mut sum = 0.0f64;
    for _ in 0..samples {
        sum += generator.next_value() as f64;
    }
    sum / samples as f64
}

/// Outcome of one variant run
#[derive(Clone, Debug)]
pub struct BenchmarkResult {
    pub name: &'static str,
    pub samples: u64,
    /// Mean of every generated value
    pub mean: f64,
    /// Wall-clock time from the previous checkpoint, construction included
    pub elapsed: Duration,
    /// CPU cycles spent in construction and the loop, when counted
    pub cycles: Option<u64>,
}

impl BenchmarkResult {
    pub fn nanos_per_value(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.samples.max(1) as f64
    }

    pub fn cycles_per_value(&self) -> Option<f64> {
        self.cycles.map(|c| c as f64 / self.samples.max(1) as f64)
    }
}

/// Export results to a CSV file
pub fn export_csv(path: &str, results: &[BenchmarkResult]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_csv(&mut file, results)
}

pub fn write_csv<W: std::io::Write>(out: &mut W, results: &[BenchmarkResult]) -> std::io::Result<()> {
    writeln!(out, "variant,compiler,samples,mean,elapsed_ns,cycles")?;

    for entry in results {
        let compiler = if entry.name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{:.1},{},{}",
            entry.name,
            compiler,
            entry.samples,
            entry.mean,
            entry.elapsed.as_nanos(),
            entry.cycles.map(|c| c.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}
