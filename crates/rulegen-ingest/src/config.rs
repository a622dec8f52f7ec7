//! Generator configuration files.
//!
//! ```toml
//! tables = []                      # empty: every table in the schema
//! ignore_tables = ["migrations"]
//! ignore_columns = ["remember_token"]
//! ```

use std::path::Path;

use rulegen_core::{GeneratorConfig, TableSelection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// On-disk form of [`GeneratorConfig`]. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub tables: Vec<String>,
    pub ignore_tables: Vec<String>,
    pub ignore_columns: Vec<String>,
}

impl ConfigFile {
    /// Convert to generator options. An empty `tables` list selects all tables.
    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_tables(TableSelection::from_names(self.tables))
            .ignore_tables(self.ignore_tables)
            .ignore_columns(self.ignore_columns)
    }
}

/// Read and parse a TOML configuration file.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let config: ConfigFile = toml::from_str(&content).map_err(|e| IngestError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        tables = config.tables.len(),
        ignore_tables = config.ignore_tables.len(),
        ignore_columns = config.ignore_columns.len(),
        "loaded generator config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_selects_all() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let config = file.into_config();
        assert_eq!(config.tables, TableSelection::All);
        assert!(config.ignore_tables.is_empty());
        assert!(config.ignore_columns.is_empty());
    }

    #[test]
    fn test_explicit_tables() {
        let file: ConfigFile = toml::from_str(
            r#"
tables = ["users", "orders"]
ignore_columns = ["password"]
"#,
        )
        .unwrap();
        let config = file.into_config();
        assert_eq!(
            config.tables,
            TableSelection::Explicit(vec!["users".to_string(), "orders".to_string()])
        );
        assert!(config.ignore_columns.contains("password"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<ConfigFile, _> = toml::from_str("ignore_colums = []");
        assert!(result.is_err());
    }
}
