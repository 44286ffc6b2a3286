//! Derivative-free line searches for unimodal scalar functions.
//!
//! Both solvers narrow a bracketing interval `[a, b]` until its width is at
//! most a precision `epsilon`, recording every iteration and counting every
//! objective evaluation:
//!
//! - [`dichotomy`]: two fresh evaluations per iteration, placed `epsilon / 2`
//!   apart around the midpoint
//! - [`golden_section`]: one fresh evaluation per iteration, reusing the
//!   surviving interior point
//!
//! The shared record, result, config and error types live in [`search`], and
//! [`sweep`] compares the evaluation cost of both methods across precisions.

pub mod dichotomy;
pub mod golden_section;
pub mod search;
pub mod sweep;
