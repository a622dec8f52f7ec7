//! Derives validation rule tokens from relational schema metadata.
//!
//! ```ignore
//! use rulegen_core::{GeneratorConfig, SchemaWalker};
//!
//! let config = GeneratorConfig::new().ignore_tables(["migrations"]);
//! let catalog = SchemaWalker::new(&snapshot).generate(&config)?;
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod filter;
pub mod mapper;
pub mod naming;
pub mod provider;
pub mod walker;

pub use config::{GeneratorConfig, TableSelection};
pub use error::{GenerateError, Result};
pub use filter::{ColumnFilter, Exclusion, SYSTEM_COLUMNS, is_system_column};
pub use mapper::{column_rules, integer_digit_bound, precision_pattern};
pub use naming::camel_case;
pub use provider::{MetadataProvider, ProviderError};
pub use walker::{SchemaWalker, generate, walk_table};
