//! Parsing helpers for command-line values.

use chrono::NaiveDate;

use shelf_core::{parse_view_date, Category, Rating, SortKey};

use crate::errors::from_core;

pub fn parse_category(value: &str) -> anyhow::Result<Category> {
    value.parse().map_err(from_core)
}

pub fn parse_rating(value: &str) -> anyhow::Result<Rating> {
    value.parse().map_err(from_core)
}

pub fn parse_sort_key(value: &str) -> anyhow::Result<SortKey> {
    value.parse().map_err(from_core)
}

/// Parse a `--viewed` value (YYYY-MM-DD or RFC 3339).
pub fn parse_viewed(value: &str) -> anyhow::Result<NaiveDate> {
    parse_view_date(value).map_err(from_core)
}

/// `--link ""` and `--position ""` clear the field.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(crate::errors::CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}
