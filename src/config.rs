//! Extraction options
//!
//! Options are plain serde structs so callers can hand them over as JSON,
//! e.g. `{"cell_format": "text", "table_selector": "table.data"}`.
//! Every field has a default, so `{}` is a valid configuration.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};

/// How content cell values are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    /// Inner markup of the cell, nested tags preserved
    #[default]
    Html,
    /// Text content with whitespace collapsed
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub cell_format: CellFormat,
    /// Use `<img src>` values for cells without any text
    pub image_fallback: bool,
    /// Which elements are parsed as tables
    pub table_selector: String,
    /// Which elements are parsed as definition lists
    pub dl_selector: String,
    /// Attach `<colgroup>`/`<col>` classes to output cells
    pub colgroup_classes: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            cell_format: CellFormat::Html,
            image_fallback: true,
            table_selector: "table".to_string(),
            dl_selector: "dl".to_string(),
            colgroup_classes: true,
        }
    }
}

impl ExtractOptions {
    /// Parse options from a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_cell_format(mut self, cell_format: CellFormat) -> Self {
        self.cell_format = cell_format;
        self
    }

    pub fn with_table_selector(mut self, selector: impl Into<String>) -> Self {
        self.table_selector = selector.into();
        self
    }

    pub(crate) fn table_selector(&self) -> Result<Selector> {
        parse_selector(&self.table_selector)
    }

    pub(crate) fn dl_selector(&self) -> Result<Selector> {
        parse_selector(&self.dl_selector)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
