//! Application entry point and dispatch.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use matmul_bench::{analysis, generate, record, summary};
use matmul_core::{for_selector, MatError, Matrix, Options};

use crate::config::AppConfig;
use crate::output;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "matmul", &mut std::io::stdout());
        return Ok(());
    }

    let opts = Options {
        parallel_threshold: config.parallel_threshold,
        strassen_threshold: config.strassen_threshold,
    }
    .normalize();

    if config.bench {
        return run_bench(config, &opts);
    }
    run_single(config, &opts)
}

fn run_single(config: &AppConfig, opts: &Options) -> Result<()> {
    if config.size == 0 {
        return Err(MatError::Config("size must be at least 1".into()).into());
    }
    let strategies = for_selector(&config.method, opts)?;

    let a = generate::workload(config.size);
    let b = generate::workload(config.size);

    let mut results: Vec<(String, Duration, Matrix)> = Vec::new();
    for strat in &strategies {
        let start = Instant::now();
        let product = strat.multiply(&a, &b)?;
        let elapsed = start.elapsed();
        info!(method = strat.name(), ?elapsed, "multiplication complete");
        results.push((strat.name().to_string(), elapsed, product));
    }

    cross_validate(&results)?;

    if !config.quiet {
        output::print_timings(config.size, &results);
        if config.display {
            print!("{}", results[0].2);
        }
    }
    Ok(())
}

/// Every strategy must produce the same product, cell for cell.
fn cross_validate(results: &[(String, Duration, Matrix)]) -> Result<(), MatError> {
    let Some((first, rest)) = results.split_first() else {
        return Ok(());
    };
    for (name, _, product) in rest {
        if product != &first.2 {
            tracing::error!(lhs = first.0, rhs = name, "strategy results differ");
            return Err(MatError::Mismatch);
        }
    }
    Ok(())
}

fn run_bench(config: &AppConfig, opts: &Options) -> Result<()> {
    let path = Path::new(&config.output);
    record::init_csv(path)?;

    let plan = analysis::plan(config.max_size);
    let progress = output::sweep_progress(plan.len() as u64, config.quiet);

    let mut all_records = Vec::new();
    for (size, trials) in plan {
        progress.set_message(format!("{size}x{size}"));
        let records = analysis::run_size(size, trials, opts);
        record::append_csv(path, &records)?;
        all_records.extend(records);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let summaries = summary::summarize(&all_records);
    let summary_path = path.with_extension("summary.json");
    summary::write_summary(&summary_path, &summaries)?;

    if !config.quiet {
        output::print_summary(&summaries);
        println!("Performance results written to: {}", config.output);
    }
    Ok(())
}
