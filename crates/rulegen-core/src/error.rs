use thiserror::Error;

use crate::provider::ProviderError;

/// Errors that abort a generation pass.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The schema provider could not list tables or resolve a table.
    #[error("metadata unavailable{}: {source}", table_suffix(.table))]
    MetadataUnavailable {
        /// Offending table, when the failure is tied to one.
        table: Option<String>,
        #[source]
        source: ProviderError,
    },
}

impl GenerateError {
    pub(crate) fn metadata(table: Option<&str>, source: ProviderError) -> Self {
        Self::MetadataUnavailable {
            table: table.map(str::to_string),
            source,
        }
    }

    /// The table the failure is tied to, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::MetadataUnavailable { table, .. } => table.as_deref(),
        }
    }
}

fn table_suffix(table: &Option<String>) -> String {
    match table {
        Some(name) => format!(" for table {name}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
