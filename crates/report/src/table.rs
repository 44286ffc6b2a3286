//! Bordered text tables.

use std::fmt;

use crate::{ReportError, TableStyle};

/// A grid of text cells with a header row.
///
/// Rendering draws a border around every cell and a double rule under the
/// header. Every cell is centered in a column as wide as its longest cell
/// plus the style's padding.
///
/// # Example
///
/// ```
/// use unimin_report::{Table, TableStyle};
///
/// let mut table = Table::new(["a", "bb"], &TableStyle::new());
/// table.push_row(vec!["1".into(), "22".into()])?;
///
/// assert_eq!(
///     table.to_string(),
///     "+---+----+\n\
///      | a | bb |\n\
///      +===+====+\n\
///      | 1 | 22 |\n\
///      +---+----+\n"
/// );
/// # Ok::<(), unimin_report::ReportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: Option<String>,
    padding: usize,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given headers.
    #[must_use]
    pub fn new<const N: usize>(headers: [&str; N], style: &TableStyle) -> Self {
        Self {
            title: style.title.clone(),
            padding: style.padding,
            headers: headers.map(str::to_owned).to_vec(),
            rows: Vec::new(),
        }
    }

    /// Appends a row of cells.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::RowLength`] if the row does not have one cell
    /// per header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), ReportError> {
        if row.len() != self.headers.len() {
            return Err(ReportError::RowLength {
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends a row whose length is fixed by the caller's header array.
    pub(crate) fn push_cells<const N: usize>(&mut self, cells: [String; N]) {
        debug_assert_eq!(N, self.headers.len());
        self.rows.push(cells.to_vec());
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest = self
                    .rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .fold(header.chars().count(), usize::max);
                widest + self.padding
            })
            .collect()
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    for &width in widths {
        write!(f, "+{}", fill.to_string().repeat(width))?;
    }
    writeln!(f, "+")
}

fn write_cells(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, "|{cell:^width$}")?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        if let Some(title) = &self.title {
            writeln!(f, "{title}")?;
        }

        write_rule(f, &widths, '-')?;
        write_cells(f, &widths, &self.headers)?;
        write_rule(f, &widths, '=')?;
        for row in &self.rows {
            write_cells(f, &widths, row)?;
            write_rule(f, &widths, '-')?;
        }
        Ok(())
    }
}
