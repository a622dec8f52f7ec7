//! Schema snapshot loading.
//!
//! A snapshot is a JSON document listing tables and their columns, as dumped
//! from a database catalog:
//!
//! ```json
//! {"tables": [{"name": "users", "columns": [
//!     {"name": "email", "type": "string", "length": 255, "nullable": false}
//! ]}]}
//! ```

use std::path::Path;

use rulegen_model::SchemaSnapshot;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read and parse a schema snapshot file.
pub fn load_schema_snapshot(path: &Path) -> Result<SchemaSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let snapshot: SchemaSnapshot =
        serde_json::from_str(&content).map_err(|e| IngestError::SnapshotParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(
        path = %path.display(),
        table_count = snapshot.tables.len(),
        column_count = snapshot.column_count(),
        "loaded schema snapshot"
    );
    Ok(snapshot)
}
