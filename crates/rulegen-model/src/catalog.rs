//! The rule catalog: normalized table name -> column name -> rule tokens.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::RuleToken;

/// Rules for one table, keyed by raw column name in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRules {
    columns: Vec<(String, Vec<RuleToken>)>,
}

impl TableRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the rules for a column.
    ///
    /// A column name that is already present keeps its position and has its
    /// tokens replaced.
    pub fn insert(&mut self, column: impl Into<String>, tokens: Vec<RuleToken>) {
        let column = column.into();
        if let Some(slot) = self.columns.iter_mut().find(|(name, _)| *name == column) {
            slot.1 = tokens;
        } else {
            self.columns.push((column, tokens));
        }
    }

    /// Merge another table's rules into this one, in the other table's order.
    pub fn merge(&mut self, other: TableRules) {
        for (column, tokens) in other.columns {
            self.insert(column, tokens);
        }
    }

    pub fn get(&self, column: &str) -> Option<&[RuleToken]> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, tokens)| tokens.as_slice())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RuleToken])> {
        self.columns
            .iter()
            .map(|(name, tokens)| (name.as_str(), tokens.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for TableRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, tokens) in &self.columns {
            map.serialize_entry(column, tokens)?;
        }
        map.end()
    }
}

/// Complete output of one generation pass.
///
/// Read-only once built; assemble it with [`RuleCatalogBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    tables: BTreeMap<String, TableRules>,
}

impl RuleCatalog {
    pub fn table(&self, key: &str) -> Option<&TableRules> {
        self.tables.get(key)
    }

    /// Rules for a single column, if both the table key and column exist.
    pub fn column(&self, table: &str, column: &str) -> Option<&[RuleToken]> {
        self.tables.get(table).and_then(|rules| rules.get(column))
    }

    pub fn contains_table(&self, key: &str) -> bool {
        self.tables.contains_key(key)
    }

    /// Table keys in sorted order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableRules)> {
        self.tables.iter().map(|(key, rules)| (key.as_str(), rules))
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Number of columns across all tables.
    pub fn column_count(&self) -> usize {
        self.tables.values().map(TableRules::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Single-writer builder for a [`RuleCatalog`].
#[derive(Debug, Default)]
pub struct RuleCatalogBuilder {
    tables: BTreeMap<String, TableRules>,
}

impl RuleCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table's rules under `key`, merging into an existing entry with
    /// the same key.
    pub fn add_table(&mut self, key: impl Into<String>, rules: TableRules) {
        match self.tables.entry(key.into()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(rules),
            Entry::Vacant(slot) => {
                slot.insert(rules);
            }
        }
    }

    pub fn finish(self) -> RuleCatalog {
        RuleCatalog {
            tables: self.tables,
        }
    }
}
