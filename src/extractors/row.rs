//! Keyed table rows
//!
//! A [`Row`] maps column keys to [`Cell`]s in column order. Keys are unique
//! within a row; when two columns resolve to the same header key the later
//! one is stored under `"<key>#<index>"`, and both remain reachable through
//! [`Row::get`] and [`Row::get_by_header`].

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ExtractError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Key the column resolved to from the header rows
    #[serde(skip)]
    pub key: String,
    /// Global headers spanning this column
    pub headers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colgroups: Vec<String>,
    /// `None` marks colspan or column-count padding
    pub value: Option<String>,
}

impl Cell {
    pub fn is_padding(&self) -> bool {
        self.value.is_none()
    }
}

/// Result of a [`Row::get`] lookup
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue<'a> {
    /// The name is a column key
    Cell(&'a Cell),
    /// The name is a repeated key or a header shared by several columns
    Cells(Vec<&'a Cell>),
}

impl<'a> RowValue<'a> {
    pub fn values(&self) -> Vec<Option<&'a str>> {
        match self {
            RowValue::Cell(cell) => vec![cell.value.as_deref()],
            RowValue::Cells(cells) => cells.iter().map(|c| c.value.as_deref()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from its cells in column order.
    ///
    /// Every resolved key is reserved before any fallback is chosen, so a
    /// fallback never takes the key of a later column.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells: Vec<Cell> = cells.into_iter().collect();
        let resolved: HashSet<&str> = cells.iter().map(|cell| cell.key.as_str()).collect();

        let mut keys: Vec<String> = Vec::with_capacity(cells.len());
        let mut used: HashSet<String> = HashSet::with_capacity(cells.len());
        for (index, cell) in cells.iter().enumerate() {
            let key = if used.contains(&cell.key) {
                let mut fallback = format!("{}#{}", cell.key, index);
                while resolved.contains(fallback.as_str()) || used.contains(&fallback) {
                    fallback.push('#');
                }
                fallback
            } else {
                cell.key.clone()
            };
            used.insert(key.clone());
            keys.push(key);
        }

        Self {
            cells: keys.into_iter().zip(cells).collect(),
        }
    }

    pub fn get_by_key(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    /// Every cell whose header key or global headers contain `name`.
    ///
    /// Empty when nothing matches.
    pub fn get_by_header(&self, name: &str) -> Vec<&Cell> {
        self.cells
            .values()
            .filter(|cell| cell.key == name || cell.headers.iter().any(|h| h == name))
            .collect()
    }

    /// Key lookup, falling back to header aggregation.
    ///
    /// A key shared by several columns yields all of them.
    pub fn get(&self, name: &str) -> Result<RowValue<'_>> {
        let same_key: Vec<&Cell> = self.cells.values().filter(|cell| cell.key == name).collect();
        if same_key.len() > 1 {
            return Ok(RowValue::Cells(same_key));
        }

        if let Some(cell) = self.get_by_key(name) {
            return Ok(RowValue::Cell(cell));
        }

        let cells = self.get_by_header(name);
        if cells.is_empty() {
            return Err(ExtractError::MissingKey(name.to_string()));
        }
        Ok(RowValue::Cells(cells))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
