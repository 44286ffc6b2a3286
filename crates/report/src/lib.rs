//! Reporting for unimin line searches.
//!
//! Renders iteration traces and precision sweeps as bordered text tables and
//! writes them, or any serializable result, to disk.
//!
//! # Modules
//!
//! - [`style`]: [`TableStyle`] builder for titles, decimals and padding
//! - [`table`]: the [`Table`] grid and its renderer
//! - [`tables`]: [`iteration_table`] and [`comparison_table`]
//! - [`write`]: [`write_table`] and [`write_json`]

mod error;
pub mod style;
pub mod table;
pub mod tables;
pub mod write;

pub use error::ReportError;
pub use style::TableStyle;
pub use table::Table;
pub use tables::{comparison_table, iteration_table};
pub use write::{write_json, write_table};

/// File name of the dichotomy iteration table in a full report.
pub const DICHOTOMY_FILE: &str = "dichotomy.txt";

/// File name of the golden-section iteration table in a full report.
pub const GOLDEN_SECTION_FILE: &str = "golden_section.txt";

/// File name of the precision comparison table in a full report.
pub const COMPARISON_FILE: &str = "precision_comparison.txt";
