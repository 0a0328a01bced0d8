//! `<table>` structural extraction
//!
//! A table is scanned once, top to bottom:
//! - `<caption>` sets the caption
//! - `<colgroup>`/`<col>` classes are recorded per column
//! - every `<thead>` row is a header row
//! - `<tbody>` rows (or the table's own rows), then `<tfoot>` rows, are
//!   classified one by one; header rows feed the [`HeaderTracker`], content
//!   rows are emitted as keyed [`Row`]s
//!
//! Tables are assumed to have one header block followed by one content
//! block. `rowspan` is not interpreted: a spanning cell only counts for the
//! row it is written in.

use serde::Serialize;

use super::cell_extractor::cell_value;
use super::dimensions::{dimensions, Dimensions};
use super::headers::HeaderTracker;
use super::row::{Cell, Row};
use super::row_classifier::is_header_row;
use crate::config::ExtractOptions;
use crate::node::HtmlElement;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub caption: String,
    pub rows: Vec<Row>,
}

/// Parse one `<table>` element
pub fn parse_table<E: HtmlElement>(table: E, options: &ExtractOptions) -> Table {
    let mut headers = HeaderTracker::new();
    let mut caption = String::new();
    let mut colgroup_offset = 0;

    for child in table.child_elements() {
        match child.tag_name() {
            "caption" => caption = child.stripped_text(),
            "colgroup" => colgroup_offset = read_colgroup(child, colgroup_offset, &mut headers),
            "thead" => {
                for tr in child.children_named(&["tr"]) {
                    read_header_row(tr, &mut headers);
                }
            }
            _ => {}
        }
    }

    let dims = dimensions(table);
    let rows = read_content(table, dims, &mut headers, options);

    log::debug!(
        "parsed table {:?}: {} columns, {} rows in, {} rows out",
        caption,
        dims.columns,
        dims.rows,
        rows.len()
    );

    Table { caption, rows }
}

/// Rows that may carry content: `<tbody>` rows if any, otherwise the
/// table's own rows, followed by `<tfoot>` rows
fn content_rows<E: HtmlElement>(table: E) -> Vec<E> {
    let tbodies = table.children_named(&["tbody"]);
    let mut rows: Vec<E> = if tbodies.is_empty() {
        table.children_named(&["tr"])
    } else {
        tbodies
            .into_iter()
            .flat_map(|tbody| tbody.children_named(&["tr"]))
            .collect()
    };

    for tfoot in table.children_named(&["tfoot"]) {
        rows.extend(tfoot.children_named(&["tr"]));
    }
    rows
}

fn read_content<E: HtmlElement>(
    table: E,
    dims: Dimensions,
    headers: &mut HeaderTracker,
    options: &ExtractOptions,
) -> Vec<Row> {
    let mut rows = Vec::new();

    for tr in content_rows(table) {
        if is_header_row(tr, headers) {
            read_header_row(tr, headers);
            continue;
        }

        if rows.is_empty() {
            log::trace!(
                "content starts with keys {:?}",
                (0..dims.columns).map(|i| headers.get_key(i)).collect::<Vec<_>>()
            );
        }
        rows.push(read_content_row(tr, dims.columns, headers, options));
    }

    rows
}

fn read_content_row<E: HtmlElement>(
    tr: E,
    columns: usize,
    headers: &HeaderTracker,
    options: &ExtractOptions,
) -> Row {
    let mut values: Vec<Option<String>> = Vec::with_capacity(columns);

    for cell in tr.children_named(&["td", "th"]) {
        values.push(Some(cell_value(cell, options)));
        let span = cell.span_attr("colspan");
        values.extend(std::iter::repeat(None).take(span - 1));
    }

    if values.len() < columns {
        values.resize(columns, None);
    }

    let cells = values.into_iter().enumerate().map(|(index, value)| {
        let colgroups = if options.colgroup_classes {
            headers.get_colgroups(index)
        } else {
            Vec::new()
        };
        Cell {
            key: headers.get_key(index),
            headers: headers.get_headers(index),
            colgroups,
            value,
        }
    });
    Row::from_cells(cells)
}

/// Register a header row's cells: single-column cells become keys, wider
/// cells become headers over every column they span.
fn read_header_row<E: HtmlElement>(tr: E, headers: &mut HeaderTracker) {
    let mut offset = 0;
    for cell in tr.children_named(&["th", "td"]) {
        let row_name = cell.class_name();
        let span = cell.span_attr("colspan");
        let text = cell.stripped_text();

        if span == 1 {
            headers.set_key(&row_name, offset, &text);
        } else {
            headers.set_header(&row_name, offset, span, &text);
        }
        offset = offset.saturating_add(span);
    }
}

/// Record the classes of a `<colgroup>` starting at `offset`; returns the
/// offset after it. Elements without a class only advance the offset.
fn read_colgroup<E: HtmlElement>(colgroup: E, offset: usize, headers: &mut HeaderTracker) -> usize {
    let cols = colgroup.children_named(&["col"]);
    if cols.is_empty() {
        let span = colgroup.span_attr("span");
        let class = colgroup.class_name();
        if !class.is_empty() {
            headers.add_colgroup(offset, span, &class);
        }
        return offset.saturating_add(span);
    }

    let mut offset = offset;
    for col in cols {
        let span = col.span_attr("span");
        let class = col.class_name();
        if !class.is_empty() {
            headers.add_colgroup(offset, span, &class);
        }
        offset = offset.saturating_add(span);
    }
    offset
}
