//! Structured data extraction from HTML tables and definition lists
//!
//! Turns irregular `<table>` markup (missing `<thead>`, mixed `<th>`/`<td>`
//! rows, spanning headers, `colgroup` metadata) into keyed rows whose cells
//! carry the headers that apply to them, and `<dl>` lists into grouped
//! term/definition records.
//!
//! ```
//! let html = r#"<table>
//!     <tr><th scope="col">Last name</th><th scope="col">First name</th></tr>
//!     <tr><td>Doe</td><td>John</td></tr>
//! </table>"#;
//!
//! let tables = table_extract::extract_tables(html);
//! let row = &tables[0].rows[0];
//! assert_eq!(row.get_by_key("Last name").unwrap().value.as_deref(), Some("Doe"));
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod node;

pub use config::*;
pub use error::*;
pub use extractors::*;
