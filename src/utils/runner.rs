//! Benchmark driver.
//!
//! Runs each selected generator once over the same workload, in registry
//! order, and records a checkpoint after each one.

use std::io::Write;

use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::random::{EntropySource, OsEntropy, SeededEntropy};
use crate::registry::GeneratorVariant;
use crate::utils::bench::BenchmarkResult;
use crate::utils::checkpoint::CheckPoint;
use crate::utils::cpu_affinity::CpuPinGuard;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
fn cycle_stamp() -> Option<u64> {
    Some(crate::utils::cycles::read_cycles())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
fn cycle_stamp() -> Option<u64> {
    None
}

/// Seed material for a run: deterministic with `--seed`, OS entropy otherwise.
pub fn entropy_for(config: &BenchConfig) -> Box<dyn EntropySource> {
    match config.seed {
        Some(seed) => {
            debug!(seed, "using deterministic seed material");
            Box::new(SeededEntropy::new(seed))
        }
        None => Box::new(OsEntropy),
    }
}

/// Run every variant and write the report to `out`.
///
/// For each variant one `average = <mean>` line is written as soon as its
/// loop completes, then its checkpoint is recorded. The checkpoint summary
/// follows the last variant. A seeding failure aborts the whole run.
pub fn run_benchmarks<W: Write>(
    variants: &[&GeneratorVariant],
    config: &BenchConfig,
    entropy: &mut dyn EntropySource,
    out: &mut W,
) -> Result<Vec<BenchmarkResult>, BenchError> {
    let mut cp = CheckPoint::new();
    cp.checkpoint("start", line!());

    let mut results = Vec::with_capacity(variants.len());

    for variant in variants {
        info!(variant = variant.name, samples = config.samples, "running");

        let (mean, cycles) = {
            let _pin = config.pin.then(CpuPinGuard::new);
            let start = cycle_stamp();
            let mean = (variant.run)(config.samples, entropy)?;
            let cycles = cycle_stamp()
                .zip(start)
                .map(|(end, start)| end.saturating_sub(start));
            (mean, cycles)
        };

        writeln!(out, "average = {:.1}", mean)?;
        cp.checkpoint(variant.label, line!());

        let result = BenchmarkResult {
            name: variant.name,
            samples: config.samples,
            mean,
            elapsed: cp.last_elapsed(),
            cycles,
        };
        info!(
            variant = variant.name,
            elapsed_ms = result.elapsed.as_secs_f64() * 1e3,
            "finished"
        );
        results.push(result);
    }

    cp.checkpoint_print(out)?;
    out.flush()?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedError;
    use crate::random::FixedEntropy;
    use crate::registry::build_registry;

    fn config(samples: u64) -> BenchConfig {
        BenchConfig {
            samples,
            seed: Some(7),
            pin: false,
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_report_structure() {
        let registry = build_registry();
        let variants = registry.select(&[]).unwrap();
        let cfg = config(16 * 64);
        let mut entropy = entropy_for(&cfg);
        let mut out = Vec::new();

        let results = run_benchmarks(&variants, &cfg, entropy.as_mut(), &mut out).unwrap();
        assert_eq!(results.len(), variants.len());

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // One average line per variant, first and in order
        for line in &lines[..variants.len()] {
            let value = line.strip_prefix("average = ").expect("average line");
            let (_, decimals) = value.split_once('.').expect("fixed-point value");
            assert_eq!(decimals.len(), 1, "one digit after the point: {}", line);
            assert!(value.parse::<f64>().is_ok());
        }
        assert!(!lines[variants.len()..].iter().any(|l| l.starts_with("average = ")));

        // Then the checkpoint summary, one entry per checkpoint in recording order
        let summary = lines[variants.len()..].join("\n");
        let mut cursor = 0;
        for label in std::iter::once("start").chain(variants.iter().map(|v| v.label)) {
            let pos = summary[cursor..]
                .find(label)
                .unwrap_or_else(|| panic!("checkpoint '{}' missing or out of order", label));
            cursor += pos + label.len();
        }
    }

    #[test]
    fn test_same_seed_same_means() {
        let registry = build_registry();
        let variants = registry.select(&[]).unwrap();
        let cfg = config(5000);

        let mut a = entropy_for(&cfg);
        let mut b = entropy_for(&cfg);
        let ra = run_benchmarks(&variants, &cfg, a.as_mut(), &mut std::io::sink()).unwrap();
        let rb = run_benchmarks(&variants, &cfg, b.as_mut(), &mut std::io::sink()).unwrap();

        let ma: Vec<f64> = ra.iter().map(|r| r.mean).collect();
        let mb: Vec<f64> = rb.iter().map(|r| r.mean).collect();
        assert_eq!(ma, mb);
    }

    #[test]
    fn test_means_approach_midpoint() {
        let registry = build_registry();
        let variants = registry.select(&[]).unwrap();
        let cfg = BenchConfig {
            seed: None,
            ..config(1 << 20)
        };
        let mut entropy = entropy_for(&cfg);
        let results =
            run_benchmarks(&variants, &cfg, entropy.as_mut(), &mut std::io::sink()).unwrap();

        let mid = u32::MAX as f64 / 2.0;
        for r in results {
            let rel = (r.mean - mid).abs() / mid;
            assert!(rel < 0.01, "{} mean {} is {:.4} away from midpoint", r.name, r.mean, rel);
        }
    }

    #[test]
    fn test_seed_failure_aborts_run() {
        let registry = build_registry();
        let variants = registry.select(&[]).unwrap();
        let cfg = config(64);
        // Enough for the first generator only
        let mut entropy = FixedEntropy::new(vec![1; 8]);
        let mut out = Vec::new();

        let err = run_benchmarks(&variants, &cfg, &mut entropy, &mut out).unwrap_err();
        assert!(matches!(err, BenchError::Seed(SeedError::Exhausted { .. })));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1, "only the first variant reported");
    }
}
