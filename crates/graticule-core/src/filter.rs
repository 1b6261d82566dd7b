// File: crates/graticule-core/src/filter.rs
// Summary: Columnar data source and a categorical group filter producing row index masks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Str(Vec<String>),
    Num(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Str(v) => v.len(),
            Column::Num(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Column::Num(v) => Some(v),
            Column::Str(_) => None,
        }
    }
}

/// Named, equally sized columns addressed by name. Names remember the order
/// they were first inserted in.
#[derive(Clone, Debug, Default)]
pub struct ColumnDataSource {
    columns: BTreeMap<String, Column>,
    order: Vec<String>,
}

impl ColumnDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.insert(name, column);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();
        if !self.columns.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.columns.insert(name, column);
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Row count, taken from the first column added. `None` without columns.
    pub fn get_length(&self) -> Option<usize> {
        self.order.first().and_then(|n| self.columns.get(n)).map(Column::len)
    }
}

/// Fixed-size row mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indices {
    bits: Vec<bool>,
}

impl Indices {
    pub fn new(size: usize) -> Self {
        Self { bits: vec![false; size] }
    }

    pub fn all_set(size: usize) -> Self {
        Self { bits: vec![true; size] }
    }

    pub fn size(&self) -> usize {
        self.bits.len()
    }

    pub fn set(&mut self, i: usize) {
        self.bits[i] = true;
    }

    pub fn get(&self, i: usize) -> bool {
        self.bits.get(i).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of set rows, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().filter(|(_, b)| **b).map(|(i, _)| i)
    }

    /// Values of `data` at set rows.
    pub fn select<'a, T>(&'a self, data: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.ones().filter_map(move |i| data.get(i))
    }
}

/// Selects rows whose `column_name` value equals `group`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupFilter {
    pub column_name: String,
    pub group: String,
}

impl GroupFilter {
    pub fn new(column_name: impl Into<String>, group: impl Into<String>) -> Self {
        Self { column_name: column_name.into(), group: group.into() }
    }

    /// A missing column selects every row instead of failing.
    pub fn compute_indices(&self, source: &ColumnDataSource) -> Indices {
        let size = source.get_length().unwrap_or(1);
        let Some(column) = source.get_column(&self.column_name) else {
            tracing::warn!(column = %self.column_name, "groupby column not found in the data source; selecting all rows");
            return Indices::all_set(size);
        };

        let mut indices = Indices::new(size);
        // Only string cells can equal the group; numeric columns select nothing.
        if let Column::Str(values) = column {
            for (i, v) in values.iter().enumerate().take(size) {
                if *v == self.group {
                    indices.set(i);
                }
            }
        }
        indices
    }
}
