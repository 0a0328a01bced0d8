//! Table cell value extraction
//!
//! Cells keep their inner markup by default. Image-only cells (flags,
//! icons, logos) have no text, so their `<img src>` URLs stand in for it.

use crate::config::{CellFormat, ExtractOptions};
use crate::node::{normalize_whitespace, HtmlElement};

/// Extract the value of a content cell
pub fn cell_value<E: HtmlElement>(cell: E, options: &ExtractOptions) -> String {
    let text = cell.text_content();

    if text.trim().is_empty() {
        if options.image_fallback {
            return image_sources(cell).join("\n");
        }
        return String::new();
    }

    match options.cell_format {
        CellFormat::Html => cell.inner_html().trim().to_string(),
        CellFormat::Text => normalize_whitespace(&text),
    }
}

/// `src` of every `<img>` below the element, in document order
pub fn image_sources<E: HtmlElement>(element: E) -> Vec<String> {
    element
        .descendant_elements()
        .into_iter()
        .filter(|el| el.is("img"))
        .filter_map(|img| img.attr("src").map(String::from))
        .collect()
}
