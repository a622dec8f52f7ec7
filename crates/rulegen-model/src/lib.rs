#![deny(unsafe_code)]

pub mod catalog;
pub mod column;
pub mod rule;
pub mod table;

pub use catalog::{RuleCatalog, RuleCatalogBuilder, TableRules};
pub use column::{ColumnDescriptor, LogicalType};
pub use rule::{DateFormat, RuleToken};
pub use table::{SchemaSnapshot, TableDescriptor};
