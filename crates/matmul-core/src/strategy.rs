//! Multiplication strategy trait and selection.
//!
//! `Multiply` is the narrow interface consumed by the CLI and the
//! benchmark harness; implementations wrap the standard, parallel and
//! Strassen engines with their options.

use std::sync::Arc;

use crate::error::MatError;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::{standard, strassen};

/// Narrow interface for multiplication strategies.
pub trait Multiply: Send + Sync + std::fmt::Debug {
    /// Multiply two matrices.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError>;

    /// Get the name of this strategy.
    fn name(&self) -> &str;
}

/// Sequential triple-loop strategy.
#[derive(Debug)]
pub struct Standard;

impl Standard {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Standard {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiply for Standard {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        standard::multiply(a, b, false, &Options::default())
    }

    fn name(&self) -> &'static str {
        "Standard"
    }
}

/// Fork/join row-band strategy over the triple-loop kernel.
#[derive(Debug)]
pub struct Parallel {
    opts: Options,
}

impl Parallel {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }
}

impl Multiply for Parallel {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        standard::multiply(a, b, true, &self.opts)
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}

/// Sequential Strassen strategy.
#[derive(Debug)]
pub struct Strassen {
    opts: Options,
}

impl Strassen {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }
}

impl Multiply for Strassen {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        strassen::multiply(a, b, &self.opts)
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

/// Strassen strategy with the seven sub-products fanned out over rayon.
#[derive(Debug)]
pub struct StrassenParallel {
    opts: Options,
}

impl StrassenParallel {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }
}

impl Multiply for StrassenParallel {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
        strassen::multiply_parallel(a, b, &self.opts)
    }

    fn name(&self) -> &'static str {
        "StrassenParallel"
    }
}

/// Resolve a selector string into the strategies to run.
///
/// Accepts `standard`, `parallel`, `strassen`, `strassen-par`, or `all`;
/// anything else is a configuration error.
pub fn for_selector(selector: &str, opts: &Options) -> Result<Vec<Arc<dyn Multiply>>, MatError> {
    let opts = opts.clone().normalize();
    match selector {
        "standard" => Ok(vec![Arc::new(Standard::new())]),
        "parallel" => Ok(vec![Arc::new(Parallel::new(opts))]),
        "strassen" => Ok(vec![Arc::new(Strassen::new(opts))]),
        "strassen-par" => Ok(vec![Arc::new(StrassenParallel::new(opts))]),
        "all" => Ok(vec![
            Arc::new(Standard::new()),
            Arc::new(Parallel::new(opts.clone())),
            Arc::new(Strassen::new(opts.clone())),
            Arc::new(StrassenParallel::new(opts)),
        ]),
        other => Err(MatError::Config(format!("unknown strategy: {other}"))),
    }
}
