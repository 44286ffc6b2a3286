//! Golden-section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden-section search keeps two interior probes placed by the inverse
//! golden ratio `φ = (√5 - 1) / 2`:
//!
//! ```text
//! x1 = b - φ (b - a)
//! x2 = a + φ (b - a)
//! ```
//!
//! If `f(x1) < f(x2)` the bracket shrinks to `[a, x2]` and the old `x1`
//! becomes the new `x2`. Otherwise, ties included, it shrinks to `[x1, b]` and
//! the old `x2` becomes the new `x1`. Because of the golden ratio, the
//! surviving probe is already in the right place, so each iteration pays for a
//! single new evaluation instead of two.
//!
//! # Records
//!
//! Each record holds the bracket after one narrowing step and the probes
//! carried into the next step. The initial probe pair costs two evaluations
//! and every record one more, so the evaluation count is `2 + records`. A
//! bracket that already satisfies `b - a <= epsilon` yields an empty trace
//! and two evaluations.
//!
//! # When to Use
//!
//! - The objective is unimodal on the bracket
//! - Derivatives are unavailable or expensive
//! - Evaluations are costly enough that halving them matters
//!
//! # Observer
//!
//! The observer receives each [`IterationRecord`] after it is appended and may
//! return [`Action::StopEarly`].

mod bracket;
mod run;
mod state;

#[cfg(test)]
mod tests;

use unimin_core::{Objective, Observer};

use crate::search::{Action, Config, Error, IterationRecord, Maximize, Minimize, SearchResult};

pub use bracket::INV_PHI;

use run::run;

/// Minimizes `objective` on `[a, b]` to precision `epsilon`.
///
/// Uses the default [`Config`] and no observer.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if `a >= b`, [`Error::InvalidPrecision`]
/// if `epsilon <= 0`, or an evaluation error from the objective.
pub fn search<O: Objective>(
    objective: &O,
    a: f64,
    b: f64,
    epsilon: f64,
) -> Result<SearchResult, Error> {
    minimize_unobserved(objective, [a, b], epsilon, &Config::default())
}

/// Finds the minimum of the objective using golden-section search.
///
/// The observer receives an [`IterationRecord`] after each narrowing step.
///
/// # Errors
///
/// Returns an error if the bracket or precision is invalid, the objective
/// fails, or the search does not converge within [`Config::max_iters`].
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
    observer: Obs,
) -> Result<SearchResult, Error>
where
    O: Objective,
    Obs: Observer<IterationRecord, Action>,
{
    run::<Minimize, _, _>(objective, bracket, epsilon, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
) -> Result<SearchResult, Error> {
    minimize(objective, bracket, epsilon, config, ())
}

/// Finds the maximum of the objective using golden-section search.
///
/// Records keep the raw objective values.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
    observer: Obs,
) -> Result<SearchResult, Error>
where
    O: Objective,
    Obs: Observer<IterationRecord, Action>,
{
    run::<Maximize, _, _>(objective, bracket, epsilon, config, observer)
}

/// Finds the maximum of the objective without observer support.
///
/// # Errors
///
/// See [`minimize`].
pub fn maximize_unobserved<O: Objective>(
    objective: &O,
    bracket: [f64; 2],
    epsilon: f64,
    config: &Config,
) -> Result<SearchResult, Error> {
    maximize(objective, bracket, epsilon, config, ())
}
