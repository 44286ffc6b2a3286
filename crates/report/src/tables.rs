//! Tables for search traces and precision sweeps.

use unimin_solvers::{search::IterationRecord, sweep::PrecisionSweepRow};

use crate::{Table, TableStyle};

/// Column headers of an iteration table.
pub const ITERATION_HEADERS: [&str; 8] = ["i", "x1", "x2", "f(x1)", "f(x2)", "a_i", "b_i", "b_i - a_i"];

/// Column headers of a precision comparison table.
pub const COMPARISON_HEADERS: [&str; 3] = [
    "Precision",
    "Dichotomy (evaluations)",
    "Golden section (evaluations)",
];

/// Builds the table of a search trace, one row per record.
///
/// The index column starts at 1; every other number uses the style's fixed
/// decimals.
#[must_use]
pub fn iteration_table(records: &[IterationRecord], style: &TableStyle) -> Table {
    let mut table = Table::new(ITERATION_HEADERS, style);
    for (i, record) in records.iter().enumerate() {
        table.push_cells([
            (i + 1).to_string(),
            style.number(record.x1),
            style.number(record.x2),
            style.number(record.f1),
            style.number(record.f2),
            style.number(record.a),
            style.number(record.b),
            style.number(record.width),
        ]);
    }
    table
}

/// Builds the table comparing evaluation counts across precisions.
///
/// Precisions are written in short scientific notation, like `1e-2`.
#[must_use]
pub fn comparison_table(rows: &[PrecisionSweepRow], style: &TableStyle) -> Table {
    let mut table = Table::new(COMPARISON_HEADERS, style);
    for row in rows {
        table.push_cells([
            format!("{:.0e}", row.epsilon),
            row.dichotomy_eval_count.to_string(),
            row.golden_eval_count.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    use unimin_solvers::{dichotomy, golden_section};

    fn shifted_square(x: f64) -> f64 {
        (x - 1.0).powi(2)
    }

    #[test]
    fn iteration_table_lists_every_record() {
        let result = dichotomy::search(&shifted_square, -2.0, 20.0, 0.1).expect("converges");

        let table = iteration_table(&result.iterations, &TableStyle::new());

        assert_eq!(table.headers(), ITERATION_HEADERS);
        assert_eq!(table.rows().len(), 9);
        assert_eq!(
            table.rows()[0],
            [
                "1",
                "8.975000",
                "9.025000",
                "63.600625",
                "64.400625",
                "-2.000000",
                "9.025000",
                "11.025000",
            ]
        );
        assert_eq!(table.rows()[8][0], "9");
    }

    #[test]
    fn golden_section_table_starts_with_the_first_narrowed_bracket() {
        let result = golden_section::search(&shifted_square, -2.0, 20.0, 0.1).expect("converges");

        let table = iteration_table(&result.iterations, &TableStyle::new().decimals(2));

        assert_eq!(table.rows().len(), 12);
        assert_eq!(table.rows()[0][0], "1");
        assert_eq!(table.rows()[0][5], "-2.00");
        assert_eq!(table.rows()[0][6], "11.60");
        assert_eq!(table.rows()[0][7], "13.60");
    }

    #[test]
    fn comparison_table_formats_precisions() {
        let rows = [
            PrecisionSweepRow {
                epsilon: 1e-2,
                dichotomy_eval_count: 26,
                golden_eval_count: 18,
            },
            PrecisionSweepRow {
                epsilon: 1e-8,
                dichotomy_eval_count: 66,
                golden_eval_count: 47,
            },
        ];

        let table = comparison_table(&rows, &TableStyle::new());

        assert_eq!(table.headers(), COMPARISON_HEADERS);
        assert_eq!(table.rows()[0], ["1e-2", "26", "18"]);
        assert_eq!(table.rows()[1], ["1e-8", "66", "47"]);
    }

    #[test]
    fn empty_trace_gives_header_only_table() {
        let table = iteration_table(&[], &TableStyle::new());

        assert!(table.rows().is_empty());
        assert_eq!(table.to_string().lines().count(), 3);
    }
}
