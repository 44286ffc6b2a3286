//! Core traits for the unimin line searches.
//!
//! This crate defines the shared abstractions that the solvers and the
//! reporting layer build on:
//!
//! - [`Objective`]: a scalar function `f: ℝ → ℝ` to be minimized
//! - [`Fallible`]: adapts a closure returning `Result<f64, E>` into an [`Objective`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Fallible, Objective};
pub use observer::Observer;
