use std::error::Error as StdError;

use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during a line search.
///
/// Input errors ([`Error::InvalidInterval`], [`Error::InvalidPrecision`],
/// [`Error::InvalidConfig`]) are raised before the objective is evaluated.
/// A search that fails never returns a partial trace.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval [{a}, {b}]: bounds must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("invalid precision {epsilon}: epsilon must be finite and positive")]
    InvalidPrecision { epsilon: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("objective failed at x = {x}")]
    Objective {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("objective returned NaN at x = {x}")]
    NanObjective { x: f64 },

    #[error("no convergence after {iters} iterations: interval width is still {width}")]
    NonTerminating { iters: usize, width: f64 },

    #[error(
        "search stalled after {iters} iterations at width {width}: precision is below floating-point resolution"
    )]
    Stalled { iters: usize, width: f64 },
}

impl Error {
    pub(crate) fn objective<E: StdError + Send + Sync + 'static>(x: f64, err: E) -> Self {
        Self::Objective {
            x,
            source: Box::new(err),
        }
    }
}
