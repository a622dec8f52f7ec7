//! Schema traversal.
//!
//! The walker selects tables, applies table and column exclusion, maps each
//! surviving column to its rules, and assembles the catalog. Provider calls
//! happen one at a time; the first failure aborts the pass.

use rulegen_model::{
    ColumnDescriptor, LogicalType, RuleCatalog, RuleCatalogBuilder, TableDescriptor, TableRules,
};
use tracing::{debug, info, info_span};

use crate::config::{GeneratorConfig, TableSelection};
use crate::error::{GenerateError, Result};
use crate::filter::ColumnFilter;
use crate::mapper::column_rules;
use crate::naming::camel_case;
use crate::provider::MetadataProvider;

/// Drives a generation pass against a metadata provider.
#[derive(Debug, Clone)]
pub struct SchemaWalker<P> {
    provider: P,
}

impl<P: MetadataProvider> SchemaWalker<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Build the rule catalog for the configured tables.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MetadataUnavailable`] when the provider cannot
    /// list tables or resolve a named table. No partial catalog is returned.
    pub fn generate(&self, config: &GeneratorConfig) -> Result<RuleCatalog> {
        let span = info_span!("generate");
        let _guard = span.enter();

        let mut builder = RuleCatalogBuilder::new();
        match &config.tables {
            TableSelection::Explicit(names) => {
                debug!(table_count = names.len(), "using explicit table list");
                for name in names {
                    if skip_table(config, name) {
                        continue;
                    }
                    let rules = self.resolve_table(name, config)?;
                    add_table(&mut builder, name, rules);
                }
            }
            TableSelection::All => {
                let tables = self
                    .provider
                    .list_tables()
                    .map_err(|source| GenerateError::metadata(None, source))?;
                debug!(table_count = tables.len(), "listed all tables");
                for TableDescriptor { name, columns } in &tables {
                    if skip_table(config, name) {
                        continue;
                    }
                    let rules = walk_table(name, columns, config);
                    add_table(&mut builder, name, rules);
                }
            }
        }

        let catalog = builder.finish();
        info!(
            table_count = catalog.table_count(),
            column_count = catalog.column_count(),
            "rule generation complete"
        );
        Ok(catalog)
    }

    /// Fetch one table by raw name and derive its rules.
    ///
    /// Table-level exclusion is not applied here; callers that want per-table
    /// control decide which names to pass.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MetadataUnavailable`] naming the table when the
    /// provider cannot resolve it.
    pub fn resolve_table(&self, name: &str, config: &GeneratorConfig) -> Result<TableRules> {
        let columns = self
            .provider
            .list_columns(name)
            .map_err(|source| GenerateError::metadata(Some(name), source))?;
        Ok(walk_table(name, &columns, config))
    }
}

/// Generate a catalog in one call.
///
/// # Errors
///
/// See [`SchemaWalker::generate`].
pub fn generate<P: MetadataProvider>(provider: P, config: &GeneratorConfig) -> Result<RuleCatalog> {
    SchemaWalker::new(provider).generate(config)
}

/// Derive rules for a table's columns, dropping excluded ones.
pub fn walk_table(name: &str, columns: &[ColumnDescriptor], config: &GeneratorConfig) -> TableRules {
    let filter = ColumnFilter::new(&config.ignore_columns);
    let mut rules = TableRules::new();

    for column in columns {
        if let Some(reason) = filter.exclusion(&column.name) {
            debug!(
                table = %name,
                column = %column.name,
                reason = reason.as_str(),
                "skipping column"
            );
            continue;
        }
        if column.logical_type == LogicalType::Other {
            debug!(
                table = %name,
                column = %column.name,
                "unrecognized column type, emitting nullability only"
            );
        }
        rules.insert(column.name.clone(), column_rules(column));
    }

    debug!(
        table = %name,
        key = %camel_case(name),
        column_count = rules.len(),
        "table rules derived"
    );
    rules
}

/// Tables left without columns get no catalog key.
fn add_table(builder: &mut RuleCatalogBuilder, name: &str, rules: TableRules) {
    if rules.is_empty() {
        debug!(table = %name, "no columns left after exclusion");
        return;
    }
    builder.add_table(camel_case(name), rules);
}

fn skip_table(config: &GeneratorConfig, name: &str) -> bool {
    let ignored = config.is_table_ignored(name);
    if ignored {
        debug!(table = %name, "skipping ignored table");
    }
    ignored
}
