//! Column type to rule token mapping.
//!
//! The first token is always the nullability token. The rest depend only on
//! the column's logical type and declared sizes, in a fixed order per type.

use rulegen_model::{ColumnDescriptor, DateFormat, LogicalType, RuleToken};

/// Substring that marks a string column as an e-mail address.
const EMAIL_MARKER: &str = "email";

/// Derive the ordered rule tokens for a column.
pub fn column_rules(column: &ColumnDescriptor) -> Vec<RuleToken> {
    let mut rules = vec![RuleToken::nullability(column.nullable)];

    match column.logical_type {
        LogicalType::Integer | LogicalType::Bigint => {
            rules.push(RuleToken::Integer);
            rules.push(RuleToken::DigitsBetween(integer_digit_bound(
                column.precision_or_zero(),
                column.unsigned,
            )));
        }
        LogicalType::String => {
            rules.push(RuleToken::String);
            if column.name.contains(EMAIL_MARKER) {
                rules.push(RuleToken::Email);
            }
            rules.push(RuleToken::Max(column.length_or_zero()));
        }
        LogicalType::Text => rules.push(RuleToken::String),
        LogicalType::Date => rules.push(RuleToken::DateFormat(DateFormat::Date)),
        LogicalType::Datetime => rules.push(RuleToken::DateFormat(DateFormat::DateTime)),
        LogicalType::Time => rules.push(RuleToken::DateFormat(DateFormat::Time)),
        LogicalType::Float | LogicalType::Decimal => {
            rules.push(RuleToken::Numeric);
            rules.push(RuleToken::Regex(precision_pattern(
                column.precision_or_zero(),
                column.scale_or_zero(),
            )));
        }
        LogicalType::Json => rules.push(RuleToken::Json),
        LogicalType::Boolean => rules.push(RuleToken::Boolean),
        LogicalType::Other => {}
    }

    rules
}

/// Upper digit bound for integral columns: `precision * 2` when unsigned,
/// `precision + 1` otherwise.
pub fn integer_digit_bound(precision: u32, unsigned: bool) -> u64 {
    let precision = u64::from(precision);
    if unsigned {
        precision * 2
    } else {
        precision + 1
    }
}

/// Pattern allowing at most `precision` integer digits and, when `scale > 0`,
/// an optional fraction of at most `scale` digits.
pub fn precision_pattern(precision: u32, scale: u32) -> String {
    if scale > 0 {
        format!(r"/^\d{{1,{precision}}}(\.\d{{1,{scale}}})?$/")
    } else {
        format!(r"/^\d{{1,{precision}}}$/")
    }
}
