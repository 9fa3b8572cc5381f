//! CLI comparing the throughput of every generator.
//!
//! Usage:
//!   prng-compare                   # Run every generator over 2^32 - 1 values
//!   prng-compare --list            # List available generators
//!   prng-compare sfmt19937         # Run a specific generator
//!   prng-compare --help            # Show help

use prng_compare::config::{parse_args, Command};
use prng_compare::registry::{build_registry, verify_all};
use prng_compare::utils::{export_csv, go_exit, runner};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    go_exit(run(env::args().skip(1)));
}

/// Run the command line and return the process exit code.
fn run<I: IntoIterator<Item = String>>(args: I) -> i32 {
    let registry = build_registry();

    let config = match parse_args(args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::List) => {
            prng_compare::tui::print_available_variants(&registry);
            return 0;
        }
        Ok(Command::Help) => {
            prng_compare::tui::print_help();
            return 0;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run with --help for usage.");
            return 1;
        }
    };

    let variants = match registry.select(&config.variants) {
        Ok(variants) => variants,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Available: {:?}", registry.list_names());
            return 1;
        }
    };

    if config.verify {
        if let Err(e) = verify_all() {
            eprintln!("Verification failed: {}", e);
            return 1;
        }
        println!("  All kernels verified against their references.");
        println!();
    }

    prng_compare::tui::print_header(config.samples);

    let mut entropy = runner::entropy_for(&config);
    let stdout = std::io::stdout();
    let results = match runner::run_benchmarks(&variants, &config, entropy.as_mut(), &mut stdout.lock()) {
        Ok(results) => results,
        Err(e) => {
            tracing::error!(error = %e, "benchmark aborted");
            eprintln!("Benchmark aborted: {}", e);
            return 1;
        }
    };

    prng_compare::tui::print_results_table(&results);

    if let Some(path) = config.csv_path.as_deref() {
        match export_csv(path, &results) {
            Ok(()) => println!("  Results exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
    }

    println!("Note: Speedup is relative to the first generator run.");

    0
}
