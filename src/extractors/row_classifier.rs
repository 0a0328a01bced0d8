//! Header/content row classification
//!
//! `<th>` cells are common in content rows as row labels (`scope="row"`),
//! so a row mixing `<th>` and `<td>` is only a header row when every `<th>`
//! is a column header and no keys have been established yet.

use super::headers::HeaderTracker;
use crate::node::HtmlElement;

/// Decide whether a `<tr>` supplies column labels rather than data
pub fn is_header_row<E: HtmlElement>(row: E, headers: &HeaderTracker) -> bool {
    let mut has_td = false;
    let mut has_th = false;
    let mut all_scope_col = true;

    for cell in row.children_named(&["td", "th"]) {
        if cell.is("th") {
            has_th = true;
            let scope = cell.attr("scope").unwrap_or("col");
            if !scope.trim().eq_ignore_ascii_case("col") {
                all_scope_col = false;
            }
        } else {
            has_td = true;
        }
    }

    if !has_td {
        return true;
    }

    // once keys exist, anything carrying data is content
    if headers.has_keys() {
        return false;
    }

    has_th && all_scope_col
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{ElementRef, Html, Selector};

    fn rows(document: &Html) -> Vec<ElementRef<'_>> {
        let selector = Selector::parse("tr").unwrap();
        document.select(&selector).collect()
    }

    #[test]
    fn test_th_only_row_is_header() {
        let document = Html::parse_document(
            r#"<table>
                <tr><th>a</th><th scope="row">b</th></tr>
                <tr></tr>
            </table>"#,
        );
        let tracker = HeaderTracker::new();
        let rows = rows(&document);
        assert!(is_header_row(rows[0], &tracker));
        // no td at all
        assert!(is_header_row(rows[1], &tracker));
    }

    #[test]
    fn test_td_only_row_is_content() {
        let document = Html::parse_document("<table><tr><td>a</td><td>b</td></tr></table>");
        assert!(!is_header_row(rows(&document)[0], &HeaderTracker::new()));
    }

    #[test]
    fn test_mixed_row_depends_on_scope() {
        let document = Html::parse_document(
            r#"<table>
                <tr><th>Name</th><td>x</td></tr>
                <tr><th scope="col">Name</th><td>x</td></tr>
                <tr><th scope="row">Alice</th><td>x</td></tr>
            </table>"#,
        );
        let tracker = HeaderTracker::new();
        let rows = rows(&document);
        assert!(is_header_row(rows[0], &tracker));
        assert!(is_header_row(rows[1], &tracker));
        assert!(!is_header_row(rows[2], &tracker));
    }

    #[test]
    fn test_existing_keys_force_content() {
        let document =
            Html::parse_document(r#"<table><tr><th scope="col">Name</th><td>x</td></tr></table>"#);
        let mut tracker = HeaderTracker::new();
        tracker.set_header("", 0, 2, "Group");
        assert!(is_header_row(rows(&document)[0], &tracker));

        tracker.set_key("", 0, "Name");
        assert!(!is_header_row(rows(&document)[0], &tracker));
    }
}
