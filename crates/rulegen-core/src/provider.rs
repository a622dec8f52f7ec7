//! Schema metadata sources.

use rulegen_model::{ColumnDescriptor, SchemaSnapshot, TableDescriptor};
use thiserror::Error;

/// Failure reported by a metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// A table requested by name does not exist.
    #[error("table not found: {table}")]
    TableNotFound { table: String },

    /// The provider could not be reached or returned unusable data.
    #[error("{message}")]
    Unavailable { message: String },
}

/// Source of table and column metadata.
///
/// Calls are blocking and made strictly in sequence by the walker.
pub trait MetadataProvider {
    /// Every table the source knows about, with its columns.
    fn list_tables(&self) -> Result<Vec<TableDescriptor>, ProviderError>;

    /// Columns of one table in catalog order.
    fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, ProviderError>;
}

impl MetadataProvider for SchemaSnapshot {
    fn list_tables(&self) -> Result<Vec<TableDescriptor>, ProviderError> {
        Ok(self.tables.clone())
    }

    fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, ProviderError> {
        self.table(table)
            .map(|found| found.columns.clone())
            .ok_or_else(|| ProviderError::TableNotFound {
                table: table.to_string(),
            })
    }
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn list_tables(&self) -> Result<Vec<TableDescriptor>, ProviderError> {
        (**self).list_tables()
    }

    fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>, ProviderError> {
        (**self).list_columns(table)
    }
}
