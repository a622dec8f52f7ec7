#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::{ConfigFile, load_config};
pub use error::{IngestError, Result};
pub use snapshot::load_schema_snapshot;
