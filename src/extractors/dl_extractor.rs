//! Definition list (`<dl>`) extraction
//!
//! Consecutive `<dt>` terms share the `<dd>` that follows them, per the
//! HTML `<dl>` content model.

use serde::Serialize;

use crate::node::HtmlElement;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub terms: Vec<String>,
    pub definition: String,
}

/// Group the terms and definitions of one `<dl>`, scanning descendants in
/// document order
pub fn parse_definition_list<E: HtmlElement>(dl: E) -> Vec<Definition> {
    let mut definitions = Vec::new();
    let mut pending_terms = Vec::new();

    for el in dl.descendant_elements() {
        if el.is("dt") {
            pending_terms.push(el.stripped_text());
        } else if el.is("dd") {
            definitions.push(Definition {
                terms: std::mem::take(&mut pending_terms),
                definition: el.stripped_text(),
            });
        }
    }

    log::debug!("parsed dl: {} definitions", definitions.len());
    definitions
}
