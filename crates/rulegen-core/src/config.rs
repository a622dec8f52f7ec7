//! Generation options.

use std::collections::BTreeSet;

/// Which tables a generation pass visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSelection {
    /// Every table the provider lists.
    #[default]
    All,
    /// Exactly these tables, each resolved by name. An empty list visits nothing.
    Explicit(Vec<String>),
}

impl TableSelection {
    /// Treat an empty list as "all tables", the convention of config files.
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            TableSelection::All
        } else {
            TableSelection::Explicit(names)
        }
    }
}

/// Options for a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub tables: TableSelection,
    /// Raw table names skipped entirely.
    pub ignore_tables: BTreeSet<String>,
    /// Column names skipped in every table, on top of the system columns.
    pub ignore_columns: BTreeSet<String>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tables(mut self, tables: TableSelection) -> Self {
        self.tables = tables;
        self
    }

    #[must_use]
    pub fn ignore_tables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_tables.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn ignore_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_columns
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_table_ignored(&self, table: &str) -> bool {
        self.ignore_tables.contains(table)
    }
}
