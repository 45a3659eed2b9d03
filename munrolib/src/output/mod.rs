//! Output formatting: present search results as JSON or tables.
//!
//! - **JSON**: The list-of-objects document handed to callers
//! - **MunroTable**: Table-ready data structure with headers, rows, and footer
//!
//! Both are pure presentation. All filtering and sorting happens in the
//! query stage.

pub mod json;
pub mod table;

pub use json::to_json;
pub use table::{MunroTable, TableRow};
