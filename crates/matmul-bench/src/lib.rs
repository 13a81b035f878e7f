//! # matmul-bench
//!
//! Performance-analysis harness for the multiplication engines:
//! deterministic workload generation, warmup-then-measure trial runs,
//! per-trial CSV records, and a per-(size, method) JSON summary.

pub mod analysis;
pub mod generate;
pub mod record;
pub mod runner;
pub mod summary;

pub use analysis::{plan, run_size, SWEEP_SIZES, SWEEP_TRIALS, WARMUP_RUNS};
pub use record::{append_csv, init_csv, write_csv, TrialRecord, CSV_HEADER};
pub use summary::{summarize, write_summary, MethodSummary};
