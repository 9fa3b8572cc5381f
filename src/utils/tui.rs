//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use std::io::{self, Write};
use std::time::Duration;

use crate::registry::VariantRegistry;
use crate::utils::bench::BenchmarkResult;
use crate::utils::checkpoint::Interval;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs >= 1.0 {
        format!("{:.3} s", secs)
    } else {
        format!("{:.3} ms", secs * 1e3)
    }
}

/// Write the checkpoint summary: one row per checkpoint in recording order.
pub fn write_checkpoint_table<W: Write>(
    out: &mut W,
    intervals: &[Interval],
    total: Duration,
) -> io::Result<()> {
    let term_width = get_term_width();
    // Line and elapsed columns: 6 + 14 + 2 spaces + 2 indent
    let fixed_width = 24;
    let label_width = term_width.saturating_sub(fixed_width).clamp(15, 40);
    let table_width = label_width + 22;

    writeln!(out)?;
    writeln!(out, "  {}", "─".repeat(table_width))?;
    writeln!(
        out,
        "  {:<l_width$} {:>6} {:>14}",
        "Checkpoint",
        "Line",
        "Elapsed",
        l_width = label_width
    )?;
    writeln!(out, "  {}", "─".repeat(table_width))?;

    for interval in intervals {
        writeln!(
            out,
            "  {:<l_width$} {:>6} {:>14}",
            truncate(&interval.label, label_width),
            interval.line,
            format_duration(interval.elapsed),
            l_width = label_width
        )?;
    }

    writeln!(out, "  {}", "─".repeat(table_width))?;
    writeln!(
        out,
        "  {:<l_width$} {:>6} {:>14}",
        "Total",
        "",
        format_duration(total),
        l_width = label_width
    )?;
    Ok(())
}

/// Print the per-variant throughput table.
pub fn print_results_table(results: &[BenchmarkResult]) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // Compact columns: 16+14+10+10+9 = 59 chars + 5 spaces + 2 indent = 66
    let fixed_width = 66;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(18);
    let table_width = variant_col_width + 59 + 5;

    let baseline = results
        .first()
        .map(|r| r.nanos_per_value())
        .unwrap_or(1.0);

    println!();
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>16} {:>14} {:>10} {:>10} {:>9}",
        "Variant",
        "Mean",
        "Elapsed",
        "ns/value",
        "cyc/value",
        "Speedup",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let ns = result.nanos_per_value();
        let speedup = if ns > 0.0 { baseline / ns } else { 0.0 };

        let display_name = if result.name.starts_with("c-") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.to_string(),
            }
        } else {
            result.name.to_string()
        };

        let cycles = result
            .cycles_per_value()
            .map(|c| format!("{:.2}", c))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<v_width$} {:>16.1} {:>14} {:>10.3} {:>10} {:>8.2}x",
            truncate(&display_name, variant_col_width),
            result.mean,
            format_duration(result.elapsed),
            ns,
            cycles,
            speedup,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header(samples: u64) {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " PRNG Throughput Comparison ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!("  {} values per generator", samples);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: prng-compare [OPTIONS] [VARIANT...]");
    println!();
    println!("Options:");
    println!("  --list, -l         List all available generators");
    println!("  --help, -h         Show this help message");
    println!("  --samples N, -n N  Values drawn per generator (default: 4294967295)");
    println!("  --seed N           Deterministic seed material (default: OS entropy)");
    println!("  --csv PATH         Export results to CSV");
    println!("  --no-pin           Do not pin the thread to a CPU core");
    println!("  --verify           Cross-check SIMD kernels before running");
    println!();
    println!("Arguments:");
    println!("  VARIANT            Name of a generator to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  prng-compare                        # Full run, every generator");
    println!("  prng-compare --samples 100000000    # Shorter run");
    println!("  prng-compare sfmt19937 mt19937      # Two generators only");
    println!("  prng-compare --seed 12345           # Reproducible means");
    println!("  prng-compare --csv data.csv         # Export results to CSV");
    println!();
    println!("Logging goes to stderr; set RUST_LOG=info (or debug) for details.");
}

/// Print the list of available generators
pub fn print_available_variants(registry: &VariantRegistry) {
    println!("Available generators:");
    println!();
    for variant in registry.all() {
        println!("  {:<20} - {}", variant.name, variant.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer label", 10), "a much ...");
    }

    #[test]
    fn test_checkpoint_table_rows() {
        let intervals = vec![
            Interval {
                label: "start".to_string(),
                line: 10,
                elapsed: Duration::ZERO,
            },
            Interval {
                label: "SFMT engine".to_string(),
                line: 20,
                elapsed: Duration::from_millis(1500),
            },
        ];
        let mut out = Vec::new();
        write_checkpoint_table(&mut out, &intervals, Duration::from_millis(1500)).unwrap();
        let text = String::from_utf8(out).unwrap();

        let start = text.find("start").unwrap();
        let sfmt = text.find("SFMT engine").unwrap();
        assert!(start < sfmt);
        assert!(text.contains("1.500 s"));
        assert!(text.contains("0.000 ms"));
        assert!(text.lines().last().unwrap().contains("Total"));
    }
}
