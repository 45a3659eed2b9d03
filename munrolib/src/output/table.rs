//! Table-ready data structures for search results.
//!
//! `MunroTable` is a pure presentation layer: headers, one row of display
//! strings per record, and a footer. It does no filtering or sorting; by the
//! time a table is built the query pipeline has already run.

use serde::{Deserialize, Serialize};

use crate::data::munro::Munro;

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (the hill name, or "Total (N munros)")
    pub label: String,
    /// Remaining column values, ready for display
    pub values: Vec<String>,
}

/// Table-ready search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunroTable {
    /// Column headers: [Name, Height (m), Grid Ref, Category]
    pub headers: Vec<String>,
    /// Data rows, in result order
    pub rows: Vec<TableRow>,
    /// Summary row
    pub footer: TableRow,
}

impl MunroTable {
    /// Format query results into display strings.
    pub fn from_results(munros: &[&Munro]) -> Self {
        let headers = ["Name", "Height (m)", "Grid Ref", "Category"]
            .iter()
            .map(|h| h.to_string())
            .collect();

        let rows = munros
            .iter()
            .map(|m| TableRow {
                label: m.name().to_string(),
                values: vec![
                    format_height(m.height()),
                    m.grid_reference().to_string(),
                    m.category().to_string(),
                ],
            })
            .collect();

        let footer = TableRow {
            label: footer_label(munros.len()),
            values: vec![String::new(); 3],
        };

        MunroTable {
            headers,
            rows,
            footer,
        }
    }

    /// Width of each column: the widest of header, cells, and footer.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            let cells = std::iter::once(&row.label).chain(row.values.iter());
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

/// Heights are whole metres in the tables, but survey updates add decimals.
fn format_height(height: f64) -> String {
    if height.fract() == 0.0 {
        format!("{height:.0}")
    } else {
        format!("{height:.1}")
    }
}

fn footer_label(count: usize) -> String {
    match count {
        1 => "Total (1 munro)".to_string(),
        n => format!("Total ({n} munros)"),
    }
}
