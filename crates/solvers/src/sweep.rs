//! Evaluation-cost comparison of both searches across precisions.

use unimin_core::Objective;

use crate::{
    dichotomy, golden_section,
    search::{Config, Error},
};

/// Evaluation counts of both searches at one precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionSweepRow {
    pub epsilon: f64,
    pub dichotomy_eval_count: usize,
    pub golden_eval_count: usize,
}

/// Returns the precisions `10⁻² … 10⁻⁸`.
#[must_use]
pub fn default_precisions() -> Vec<f64> {
    (2..=8).map(|n| 10f64.powi(-n)).collect()
}

/// Runs both searches on `bracket` at every precision.
///
/// Rows are returned in the order of `precisions`.
///
/// # Errors
///
/// Returns the first error from either search; no partial sweep is returned.
pub fn compare<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    precisions: &[f64],
    config: &Config,
) -> Result<Vec<PrecisionSweepRow>, Error> {
    precisions
        .iter()
        .map(|&epsilon| -> Result<PrecisionSweepRow, Error> {
            let dichotomy = dichotomy::minimize_unobserved(objective, bracket, epsilon, config)?;
            let golden = golden_section::minimize_unobserved(objective, bracket, epsilon, config)?;

            tracing::debug!(
                epsilon,
                dichotomy = dichotomy.eval_count,
                golden = golden.eval_count,
                "precision compared"
            );

            Ok(PrecisionSweepRow {
                epsilon,
                dichotomy_eval_count: dichotomy.eval_count,
                golden_eval_count: golden.eval_count,
            })
        })
        .collect()
}
