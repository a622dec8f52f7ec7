//! Column metadata as reported by a schema provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized column type category, independent of engine-specific type names.
///
/// The vocabulary is closed. Any type name outside it parses to
/// [`LogicalType::Other`], which only ever receives a nullability rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicalType {
    Integer,
    Bigint,
    String,
    Text,
    Date,
    Datetime,
    Time,
    Float,
    Decimal,
    Json,
    Boolean,
    Other,
}

impl LogicalType {
    /// Returns the canonical type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::Integer => "integer",
            LogicalType::Bigint => "bigint",
            LogicalType::String => "string",
            LogicalType::Text => "text",
            LogicalType::Date => "date",
            LogicalType::Datetime => "datetime",
            LogicalType::Time => "time",
            LogicalType::Float => "float",
            LogicalType::Decimal => "decimal",
            LogicalType::Json => "json",
            LogicalType::Boolean => "boolean",
            LogicalType::Other => "other",
        }
    }

    /// Parse a type name. Matching is case-insensitive on the canonical names
    /// only; aliases such as `smallint` or `datetime_immutable` are `Other`.
    pub fn parse(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "integer" => LogicalType::Integer,
            "bigint" => LogicalType::Bigint,
            "string" => LogicalType::String,
            "text" => LogicalType::Text,
            "date" => LogicalType::Date,
            "datetime" => LogicalType::Datetime,
            "time" => LogicalType::Time,
            "float" => LogicalType::Float,
            "decimal" => LogicalType::Decimal,
            "json" => LogicalType::Json,
            "boolean" => LogicalType::Boolean,
            _ => LogicalType::Other,
        }
    }

    /// Returns true for the integral types that receive a digit bound.
    pub fn is_integral(&self) -> bool {
        matches!(self, LogicalType::Integer | LogicalType::Bigint)
    }

    /// Returns true for the fractional types that receive a precision pattern.
    pub fn is_fractional(&self) -> bool {
        matches!(self, LogicalType::Float | LogicalType::Decimal)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for LogicalType {
    fn from(name: &str) -> Self {
        LogicalType::parse(name)
    }
}

impl From<String> for LogicalType {
    fn from(name: String) -> Self {
        LogicalType::parse(&name)
    }
}

impl From<LogicalType> for String {
    fn from(value: LogicalType) -> Self {
        value.as_str().to_string()
    }
}

/// Immutable snapshot of a single column's structural metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Raw column name. Never normalized.
    pub name: String,
    /// Logical type category.
    #[serde(rename = "type")]
    pub logical_type: LogicalType,
    /// Declared length (string types).
    #[serde(default)]
    pub length: Option<u32>,
    /// Maximum digit count (numeric types).
    #[serde(default)]
    pub precision: Option<u32>,
    /// Digits after the decimal point (fractional types).
    #[serde(default)]
    pub scale: Option<u32>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub unsigned: bool,
}

impl ColumnDescriptor {
    /// A not-null, signed column with no size metadata.
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            length: None,
            precision: None,
            scale: None,
            nullable: false,
            unsigned: false,
        }
    }

    #[must_use]
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    #[must_use]
    pub fn unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    /// Declared length, `0` when absent.
    pub fn length_or_zero(&self) -> u32 {
        self.length.unwrap_or(0)
    }

    /// Declared precision, `0` when absent.
    pub fn precision_or_zero(&self) -> u32 {
        self.precision.unwrap_or(0)
    }

    /// Declared scale, `0` when absent.
    pub fn scale_or_zero(&self) -> u32 {
        self.scale.unwrap_or(0)
    }
}
