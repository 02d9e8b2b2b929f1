//! Display helpers for amounts and percentages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Minor currency units as `major.minor` with two decimals.
pub fn amount(minor: u64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}

/// One-decimal percentage, or a dash when there is none.
pub fn percentage(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| format!("{v:.1}%"))
}
