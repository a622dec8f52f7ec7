use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info_span};

use rulegen_core::{GeneratorConfig, SchemaWalker, TableSelection};
use rulegen_ingest::{ConfigFile, load_config, load_schema_snapshot};
use rulegen_model::RuleCatalog;

use crate::cli::{GenerateArgs, TablesArgs};
use crate::summary::{align_column, apply_table_style, header_cell};

pub fn run_generate(args: &GenerateArgs) -> Result<RuleCatalog> {
    let span = info_span!("generate", schema = %args.schema.display());
    let _guard = span.enter();

    let snapshot = load_schema_snapshot(&args.schema).context("load schema snapshot")?;
    let config = resolve_config(args)?;
    debug!(?config, "resolved generator config");

    let catalog = SchemaWalker::new(&snapshot)
        .generate(&config)
        .context("generate rules")?;
    Ok(catalog)
}

pub fn run_tables(args: &TablesArgs) -> Result<()> {
    let snapshot = load_schema_snapshot(&args.schema).context("load schema snapshot")?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Columns")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for descriptor in &snapshot.tables {
        table.add_row(vec![
            Cell::new(&descriptor.name),
            Cell::new(descriptor.columns.len()),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Config file values, then command-line overrides.
fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let file = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => ConfigFile::default(),
    };
    let mut config = file.into_config();
    if !args.tables.is_empty() {
        config = config.with_tables(TableSelection::Explicit(args.tables.clone()));
    }
    Ok(config
        .ignore_tables(args.ignore_tables.iter().cloned())
        .ignore_columns(args.ignore_columns.iter().cloned()))
}
