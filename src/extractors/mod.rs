//! HTML extraction modules
//!
//! Each module provides one stage of table or definition-list extraction;
//! this module ties them together at the document level.

mod cell_extractor;
mod dimensions;
mod dl_extractor;
mod headers;
mod row;
mod row_classifier;
mod table_extractor;

pub use cell_extractor::*;
pub use dimensions::*;
pub use dl_extractor::*;
pub use headers::*;
pub use row::*;
pub use row_classifier::*;
pub use table_extractor::*;

use scraper::Html;
use serde::Serialize;

use crate::config::ExtractOptions;
use crate::error::Result;

/// Everything extracted from one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Extraction {
    pub tables: Vec<Table>,
    pub dls: Vec<Vec<Definition>>,
}

/// Extract all tables and definition lists from an HTML document
pub fn extract_all(html: &str, options: &ExtractOptions) -> Result<Extraction> {
    let document = Html::parse_document(html);
    extract_all_from_document(&document, options)
}

pub fn extract_all_from_document(document: &Html, options: &ExtractOptions) -> Result<Extraction> {
    Ok(Extraction {
        tables: extract_tables_from_document(document, options)?,
        dls: extract_definition_lists_from_document(document, options)?,
    })
}

/// Extract every `<table>` with default options
pub fn extract_tables(html: &str) -> Vec<Table> {
    let document = Html::parse_document(html);
    extract_tables_from_document(&document, &ExtractOptions::default()).unwrap_or_default()
}

/// Extract the tables matching `options.table_selector`; nested tables are
/// parsed on their own as well as appearing in their parent cell's markup.
pub fn extract_tables_from_document(document: &Html, options: &ExtractOptions) -> Result<Vec<Table>> {
    let selector = options.table_selector()?;

    let tables: Vec<Table> = document
        .select(&selector)
        .map(|table| parse_table(table, options))
        .collect();

    log::debug!("extracted {} tables", tables.len());
    Ok(tables)
}

/// Extract every `<dl>` with default options
pub fn extract_definition_lists(html: &str) -> Vec<Vec<Definition>> {
    let document = Html::parse_document(html);
    extract_definition_lists_from_document(&document, &ExtractOptions::default())
        .unwrap_or_default()
}

pub fn extract_definition_lists_from_document(
    document: &Html,
    options: &ExtractOptions,
) -> Result<Vec<Vec<Definition>>> {
    let selector = options.dl_selector()?;

    Ok(document.select(&selector).map(parse_definition_list).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_extract_all() {
        let html = r#"
        <html>
        <body>
            <table>
                <tr><th>Key</th><th>Value</th></tr>
                <tr><td>a</td><td>1</td></tr>
            </table>
            <dl><dt>term</dt><dd>definition</dd></dl>
            <table class="second"><tr><td>x</td></tr></table>
        </body>
        </html>
        "#;

        let extraction = extract_all(html, &ExtractOptions::default()).unwrap();
        assert_eq!(extraction.tables.len(), 2);
        assert_eq!(extraction.dls.len(), 1);
        assert_eq!(extraction.dls[0][0].terms, vec!["term"]);
    }

    #[test]
    fn test_table_selector() {
        let html = r#"
            <table><tr><td>skip</td></tr></table>
            <table class="data"><tr><td>keep</td></tr></table>
        "#;
        let document = Html::parse_document(html);
        let options = ExtractOptions::default().with_table_selector("table.data");

        let tables = extract_tables_from_document(&document, &options).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].rows[0].get_by_key("0").unwrap().value.as_deref(),
            Some("keep")
        );
    }

    #[test]
    fn test_invalid_selector() {
        let document = Html::parse_document("<table></table>");
        let options = ExtractOptions::default().with_table_selector(":::");
        assert!(matches!(
            extract_all_from_document(&document, &options),
            Err(ExtractError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_nested_tables_parsed_separately() {
        let html = r#"
            <table>
                <tr><td>outer</td><td><table><tr><td>inner</td></tr></table></td></tr>
            </table>
        "#;
        let tables = extract_tables(html);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[0].rows[0].len(), 2);
        assert_eq!(
            tables[1].rows[0].get_by_key("0").unwrap().value.as_deref(),
            Some("inner")
        );
    }
}
