//! Application configuration from CLI flags and environment.

use clap::Parser;

/// MatMul-rs: dense integer matrix multiplication.
#[derive(Parser, Debug)]
#[command(name = "matmul", version, about)]
pub struct AppConfig {
    /// Matrix dimension for single-run mode (size x size operands).
    #[arg(short, long, default_value = "128", env = "MATMUL_SIZE")]
    pub size: usize,

    /// Strategy to run: standard, parallel, strassen, strassen-par, or all.
    #[arg(short, long, default_value = "all")]
    pub method: String,

    /// Run the full performance-analysis sweep instead of a single multiply.
    #[arg(long)]
    pub bench: bool,

    /// Results file for the sweep.
    #[arg(short, long, default_value = "matrix_performance_analysis.csv")]
    pub output: String,

    /// Cap the sweep at this matrix size.
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Row-band threshold for the parallel splitter (0 = default).
    #[arg(long, default_value = "0")]
    pub parallel_threshold: usize,

    /// Base-case threshold for the Strassen recursion (0 = default).
    #[arg(long, default_value = "0")]
    pub strassen_threshold: usize,

    /// Print the product matrix after a single run.
    #[arg(long)]
    pub display: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (errors only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
