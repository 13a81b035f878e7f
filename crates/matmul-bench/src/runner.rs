//! Trial runner: warmup then per-trial wall-clock timing.

use std::time::{Duration, Instant};

/// Time a single invocation.
pub fn time_once<F>(f: F) -> Duration
where
    F: FnOnce(),
{
    let start = Instant::now();
    f();
    start.elapsed()
}

/// Run `warmup` unmeasured invocations followed by `trials` measured
/// ones, returning each measured duration in order.
pub fn run_trials<F>(warmup: u32, trials: u32, mut f: F) -> Vec<Duration>
where
    F: FnMut(),
{
    for _ in 0..warmup {
        f();
    }

    let mut durations = Vec::with_capacity(trials as usize);
    for _ in 0..trials {
        durations.push(time_once(&mut f));
    }
    durations
}
