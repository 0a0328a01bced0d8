//! Typed element interface used by the extractors
//!
//! The table and definition-list walks only need a handful of tree
//! operations. They are collected in [`HtmlElement`] and implemented once
//! for `scraper::ElementRef`.

use scraper::ElementRef;

/// Minimal element capabilities needed to walk tables and definition lists.
pub trait HtmlElement: Sized + Copy {
    /// Lowercase local tag name (`"td"`, `"table"`, ...)
    fn tag_name(&self) -> &str;

    /// Attribute value by name
    fn attr(&self, name: &str) -> Option<&str>;

    /// Element children in document order (text nodes skipped)
    fn child_elements(&self) -> Vec<Self>;

    /// All element descendants in document order, excluding `self`
    fn descendant_elements(&self) -> Vec<Self>;

    /// Concatenated text of all descendant text nodes
    fn text_content(&self) -> String;

    /// Serialized markup of the element's children
    fn inner_html(&self) -> String;

    fn is(&self, name: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(name)
    }

    /// Direct children whose tag is one of `names`
    fn children_named(&self, names: &[&str]) -> Vec<Self> {
        self.child_elements()
            .into_iter()
            .filter(|child| names.iter().any(|name| child.is(name)))
            .collect()
    }

    /// First direct child with the given tag
    fn first_child_named(&self, name: &str) -> Option<Self> {
        self.child_elements().into_iter().find(|child| child.is(name))
    }

    /// Class list joined by single spaces (empty when absent)
    fn class_name(&self) -> String {
        self.attr("class")
            .map(|classes| classes.split_whitespace().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    /// Text content with whitespace runs collapsed and ends trimmed
    fn stripped_text(&self) -> String {
        normalize_whitespace(&self.text_content())
    }

    /// Positive integer attribute such as `colspan` or `span`, clamped to
    /// `1..=MAX_SPAN` like HTML user agents do.
    ///
    /// Missing, non-numeric, zero and negative values all yield 1.
    fn span_attr(&self, name: &str) -> usize {
        self.attr(name).map(parse_span).unwrap_or(1)
    }
}

/// Upper bound for `colspan` and `span` values
pub const MAX_SPAN: usize = 1000;

fn parse_span(raw: &str) -> usize {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(0) => 1,
        Ok(span) => span.min(MAX_SPAN),
        // digits too large for usize
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => MAX_SPAN,
        Err(_) => 1,
    }
}

impl<'a> HtmlElement for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn descendant_elements(&self) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn inner_html(&self) -> String {
        ElementRef::inner_html(self)
    }
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
