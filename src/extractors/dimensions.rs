//! Table column/row counting
//!
//! Follows the HTML 4 column-count rules:
//! https://www.w3.org/TR/html4/struct/tables.html#h-11.2.4.3
//!
//! html5ever wraps bare `<tr>` children of a table in an implicit `<tbody>`,
//! so "the table's rows" below are the rows found directly under the table
//! or directly under one of its row-group sections.

use serde::Serialize;

use crate::node::HtmlElement;

const ROW_GROUPS: [&str; 3] = ["thead", "tbody", "tfoot"];
const CELLS: [&str; 2] = ["td", "th"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

/// Compute the column and row count of a `<table>` element
pub fn dimensions<E: HtmlElement>(table: E) -> Dimensions {
    let thead = table.first_child_named("thead");

    let columns = colgroup_columns(table)
        .or_else(|| thead.and_then(thead_columns))
        .unwrap_or_else(|| {
            table_rows(table)
                .into_iter()
                .map(row_width)
                .max()
                .unwrap_or(0)
        });

    let rows = if thead.is_some() {
        table
            .children_named(&ROW_GROUPS)
            .into_iter()
            .map(|section| section.children_named(&["tr"]).len())
            .max()
            .unwrap_or(0)
    } else {
        table_rows(table).len()
    };

    Dimensions { columns, rows }
}

/// Every row of the table that belongs to it directly or through a
/// `<thead>`/`<tbody>`/`<tfoot>` section, in document order
pub fn table_rows<E: HtmlElement>(table: E) -> Vec<E> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        if child.is("tr") {
            rows.push(child);
        } else if ROW_GROUPS.iter().any(|group| child.is(group)) {
            rows.extend(child.children_named(&["tr"]));
        }
    }
    rows
}

/// Sum of `colspan` over a row's direct `<td>`/`<th>` cells
pub fn row_width<E: HtmlElement>(row: E) -> usize {
    row.children_named(&CELLS)
        .into_iter()
        .map(|cell| cell.span_attr("colspan"))
        .fold(0, usize::saturating_add)
}

/// Columns declared by `<colgroup>` children: each `<col>` contributes its
/// `span`, a colgroup without `<col>` contributes its own `span`.
fn colgroup_columns<E: HtmlElement>(table: E) -> Option<usize> {
    let colgroups = table.children_named(&["colgroup"]);
    if colgroups.is_empty() {
        return None;
    }

    let columns = colgroups
        .into_iter()
        .map(|colgroup| {
            let cols = colgroup.children_named(&["col"]);
            if cols.is_empty() {
                colgroup.span_attr("span")
            } else {
                cols.into_iter()
                    .map(|col| col.span_attr("span"))
                    .fold(0, usize::saturating_add)
            }
        })
        .fold(0, usize::saturating_add);
    Some(columns)
}

/// Width of the first `<thead>` row carrying header cells
fn thead_columns<E: HtmlElement>(thead: E) -> Option<usize> {
    thead
        .children_named(&["tr"])
        .into_iter()
        .map(|tr| tr.children_named(&["th"]))
        .find(|ths| !ths.is_empty())
        .map(|ths| {
            ths.into_iter()
                .map(|th| th.span_attr("colspan"))
                .fold(0, usize::saturating_add)
        })
}
