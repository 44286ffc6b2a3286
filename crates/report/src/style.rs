//! Table rendering options.

/// Default number of digits after the decimal point.
pub const DEFAULT_DECIMALS: usize = 6;

/// Default spaces added to the widest cell of each column.
pub const DEFAULT_PADDING: usize = 2;

/// Rendering options for a [`Table`](crate::Table).
///
/// Construct with [`TableStyle::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```
/// use unimin_report::TableStyle;
///
/// let style = TableStyle::new().title("Dichotomy").decimals(4);
/// assert_eq!(style.number(0.5), "0.5000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub(crate) title: Option<String>,
    pub(crate) decimals: usize,
    pub(crate) padding: usize,
}

impl TableStyle {
    /// Creates a style with no title, six decimals and a padding of two.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            decimals: DEFAULT_DECIMALS,
            padding: DEFAULT_PADDING,
        }
    }

    /// Sets a title printed above the table.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the digits after the decimal point for non-index numbers.
    #[must_use]
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the spaces added to the widest cell of each column.
    #[must_use]
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Formats `value` with the configured number of decimals.
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.decimals)
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::new()
    }
}
