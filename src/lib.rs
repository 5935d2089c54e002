//! Prismik Visual Guide: pick the right chart for the job.
//!
//! A terminal guide over a fixed catalog of chart categories. `core` holds the
//! catalog and navigation logic with no UI dependencies; `tui` is the ratatui
//! adapter.

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Output format for `--print`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    #[default]
    Text,
    Json,
}

/// Renders the catalog for non-interactive output.
pub fn render_catalog(
    catalog: &core::catalog::Catalog,
    format: PrintFormat,
) -> Result<String, serde_json::Error> {
    match format {
        PrintFormat::Text => Ok(catalog.to_string()),
        PrintFormat::Json => serde_json::to_string_pretty(catalog).map(|json| json + "\n"),
    }
}
