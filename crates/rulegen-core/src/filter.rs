//! Column exclusion.
//!
//! A column is excluded when either predicate matches: it is one of the fixed
//! bookkeeping columns, or the caller listed it. Both compare exact,
//! case-sensitive names.

use std::collections::BTreeSet;

/// Bookkeeping columns that never receive rules.
pub const SYSTEM_COLUMNS: &[&str] = &["id", "created_at", "updated_at", "deleted_at"];

/// Why a column was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    System,
    Ignored,
}

impl Exclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclusion::System => "system column",
            Exclusion::Ignored => "ignored column",
        }
    }
}

/// Returns true for the fixed bookkeeping columns.
pub fn is_system_column(name: &str) -> bool {
    SYSTEM_COLUMNS.contains(&name)
}

/// Column filter combining the system set with a caller-supplied list.
#[derive(Debug, Clone, Copy)]
pub struct ColumnFilter<'a> {
    ignored: &'a BTreeSet<String>,
}

impl<'a> ColumnFilter<'a> {
    pub fn new(ignored: &'a BTreeSet<String>) -> Self {
        Self { ignored }
    }

    /// Returns true when the caller listed this column.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }

    /// The reason a column is excluded, or `None` when it is kept.
    pub fn exclusion(&self, name: &str) -> Option<Exclusion> {
        if is_system_column(name) {
            Some(Exclusion::System)
        } else if self.is_ignored(name) {
            Some(Exclusion::Ignored)
        } else {
            None
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclusion(name).is_some()
    }
}
