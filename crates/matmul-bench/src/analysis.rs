//! The performance-analysis sweep: sizes, trial counts, and per-size
//! execution of the three reference strategies.

use std::sync::Arc;

use tracing::info;

use matmul_core::strategy::{Multiply, Parallel, Standard, Strassen};
use matmul_core::Options;

use crate::generate;
use crate::record::TrialRecord;
use crate::runner;

/// Matrix sizes covered by the full sweep.
pub const SWEEP_SIZES: [usize; 18] = [
    64, 96, 128, 160, 192, 256, 320, 384, 448, 512, 640, 768, 896, 1024, 1280, 1536, 1792, 2048,
];

/// Trials per size, tapering as matrices grow.
pub const SWEEP_TRIALS: [u32; 18] = [20, 18, 16, 14, 12, 10, 9, 8, 7, 6, 5, 4, 4, 3, 3, 2, 2, 2];

/// Unmeasured runs before the first trial of each (size, method) pair.
pub const WARMUP_RUNS: u32 = 3;

/// The `(size, trials)` plan, optionally capped at `max_size`.
#[must_use]
pub fn plan(max_size: Option<usize>) -> Vec<(usize, u32)> {
    SWEEP_SIZES
        .iter()
        .zip(SWEEP_TRIALS.iter())
        .filter(|&(&size, _)| max_size.map_or(true, |cap| size <= cap))
        .map(|(&size, &trials)| (size, trials))
        .collect()
}

/// The three strategies the reference sweep measures.
#[must_use]
pub fn sweep_strategies(opts: &Options) -> Vec<Arc<dyn Multiply>> {
    let opts = opts.clone().normalize();
    vec![
        Arc::new(Standard::new()),
        Arc::new(Parallel::new(opts.clone())),
        Arc::new(Strassen::new(opts)),
    ]
}

/// Run every sweep strategy at one size and return the trial records.
///
/// Operands are the deterministic [`generate::workload`] pattern, built
/// once and reused across methods and trials.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn run_size(size: usize, trials: u32, opts: &Options) -> Vec<TrialRecord> {
    let a = generate::workload(size);
    let b = generate::workload(size);

    let mut records = Vec::new();
    for strat in sweep_strategies(opts) {
        info!(size, method = strat.name(), trials, "running trials");
        let durations = runner::run_trials(WARMUP_RUNS, trials, || {
            // Workload shapes are always compatible.
            let _ = strat.multiply(&a, &b).expect("sweep operands are compatible");
        });
        records.extend(
            durations
                .iter()
                .enumerate()
                .map(|(i, &d)| TrialRecord::new(size, strat.name(), i as u32 + 1, d)),
        );
    }
    records
}
