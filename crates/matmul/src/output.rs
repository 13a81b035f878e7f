//! CLI output formatting and progress display.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use matmul_bench::MethodSummary;
use matmul_core::Matrix;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Print the per-strategy timing table for a single run.
pub fn print_timings(size: usize, results: &[(String, Duration, Matrix)]) {
    println!("Multiplying two {size}x{size} matrices:");
    for (name, duration, _) in results {
        println!("  {:<18} {:>12}", name, format_duration(*duration));
    }
    if results.len() > 1 {
        println!("{}", style("All strategies agree.").green());
    }
}

/// Print the sweep summary table.
pub fn print_summary(summaries: &[MethodSummary]) {
    println!("\nSweep summary (median per size and method):");
    println!("{:-<44}", "");
    for s in summaries {
        println!("  {:>5}  {:<18} {:>10.2}ms", s.size, s.method, s.median_ms);
    }
}

/// Progress bar over the sweep plan; hidden in quiet mode.
#[must_use]
pub fn sweep_progress(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("static template is valid"),
    );
    bar
}
