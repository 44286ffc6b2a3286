//! Types shared by every line search.
//!
//! A search validates its interval and precision before the first objective
//! evaluation, then emits one [`IterationRecord`] per iteration. Records are
//! appended in chronological order to the [`SearchResult`] and handed to the
//! observer after they are appended.
//!
//! Both searches stop the first time the interval width is at most `epsilon`.
//! [`Config::max_iters`] bounds the loop as a guard against objectives that
//! break the unimodal assumption badly enough to never converge.

mod action;
mod config;
mod error;
mod evaluate;
mod goal;
mod interval;
mod point;
mod record;
mod recorder;
mod result;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use goal::{Goal, Maximize, Minimize};
pub use point::Point;
pub use record::IterationRecord;
pub use result::{SearchResult, Status};

pub(crate) use evaluate::Evaluator;
pub(crate) use interval::{Interval, validate_precision};
pub(crate) use recorder::Recorder;
