//! The failure report handed to a handler.

/// Call-site metadata plus the evaluated trace of a failed assertion.
#[derive(Copy, Clone, Debug)]
pub struct Report<'a> {
    /// Source file containing the assertion.
    pub file: &'a str,
    /// Line of the assertion.
    pub line: u32,
    /// Enclosing module path (the closest Rust analogue of a function name).
    pub function: &'a str,
    /// The asserted expression's source text.
    pub source: &'a str,
    /// The evaluated trace of the failing condition.
    pub details: &'a str,
}

/// Render a report into the single-line message handlers emit.
///
/// The text layout is long-established; log scrapers key on it, so the
/// quoting style is not cosmetic.
pub fn render(report: &Report<'_>) -> String {
    format!(
        "{}:{}: {}: Assertion `{}' failed with `{}'.",
        report.file, report.line, report.function, report.source, report.details
    )
}
