//! Validation rule tokens.
//!
//! Tokens are produced by the rule mapper and rendered to the string form a
//! validation layer consumes (`required`, `max:255`, `date_format:Y-m-d`, ...).
//! They are generated, never parsed back.

use serde::{Serialize, Serializer};
use std::fmt;

/// Accepted layout for date and time columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    Date,
    DateTime,
    Time,
}

impl DateFormat {
    /// Returns the format pattern understood by the validation layer.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Date => "Y-m-d",
            DateFormat::DateTime => "Y-m-d H:i:s",
            DateFormat::Time => "H:i:s",
        }
    }
}

/// A single validation directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleToken {
    Required,
    Nullable,
    Integer,
    String,
    Email,
    /// `max:<n>`
    Max(u32),
    /// `date_format:<pattern>`
    DateFormat(DateFormat),
    Numeric,
    /// `regex:<pattern>`, pattern including its delimiters.
    Regex(String),
    Json,
    Boolean,
    /// `digits_between:0,<n>`
    DigitsBetween(u64),
}

impl RuleToken {
    /// The nullability token for a column.
    pub fn nullability(nullable: bool) -> Self {
        if nullable {
            RuleToken::Nullable
        } else {
            RuleToken::Required
        }
    }

    /// Returns true for `required` and `nullable`.
    pub fn is_nullability(&self) -> bool {
        matches!(self, RuleToken::Required | RuleToken::Nullable)
    }
}

impl fmt::Display for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleToken::Required => f.write_str("required"),
            RuleToken::Nullable => f.write_str("nullable"),
            RuleToken::Integer => f.write_str("integer"),
            RuleToken::String => f.write_str("string"),
            RuleToken::Email => f.write_str("email"),
            RuleToken::Max(length) => write!(f, "max:{length}"),
            RuleToken::DateFormat(format) => write!(f, "date_format:{}", format.pattern()),
            RuleToken::Numeric => f.write_str("numeric"),
            RuleToken::Regex(pattern) => write!(f, "regex:{pattern}"),
            RuleToken::Json => f.write_str("json"),
            RuleToken::Boolean => f.write_str("boolean"),
            RuleToken::DigitsBetween(max) => write!(f, "digits_between:0,{max}"),
        }
    }
}

impl Serialize for RuleToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
