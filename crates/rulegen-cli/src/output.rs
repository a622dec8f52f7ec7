//! Rendering of generated catalogs.

use rulegen_model::RuleCatalog;
use serde::Serialize;

/// JSON layout for the printed catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    #[default]
    Pretty,
    Compact,
}

/// Render the catalog as JSON.
pub fn render_catalog(catalog: &RuleCatalog, style: JsonStyle) -> serde_json::Result<String> {
    match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(catalog),
        JsonStyle::Compact => serde_json::to_string(catalog),
    }
}

/// Per-table counts shown after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub key: String,
    pub columns: usize,
    pub rules: usize,
}

/// Summaries in catalog key order.
pub fn table_summaries(catalog: &RuleCatalog) -> Vec<TableSummary> {
    catalog
        .iter()
        .map(|(key, rules)| TableSummary {
            key: key.to_string(),
            columns: rules.len(),
            rules: rules.iter().map(|(_, tokens)| tokens.len()).sum(),
        })
        .collect()
}
