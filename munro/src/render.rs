//! Template rendering for CLI output using outstanding

use console::Style;
use munrolib::{Munro, MunroTable, TableRow};
use outstanding::{render_auto, render_with_output, Theme};
use serde::Serialize;

/// Include template at compile time
const MUNRO_TABLE_TEMPLATE: &str = include_str!("../templates/munro_table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Row data for template rendering (pre-formatted)
#[derive(Debug, Serialize)]
struct TemplateRow {
    /// Pre-padded hill name (left-aligned)
    name: String,
    /// Pre-padded cells: height right-aligned, the rest left-aligned
    cells: Vec<String>,
}

/// Data context for the results table template
#[derive(Debug, Serialize)]
struct MunroTableContext {
    /// Pre-padded column headers on one line
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Data rows, in result order
    rows: Vec<TemplateRow>,
    /// Footer label
    footer: String,
}

/// Convert a TableRow to a TemplateRow, padding each cell to its column width.
///
/// The last column is left unpadded so lines carry no trailing spaces.
fn to_template_row(row: &TableRow, widths: &[usize]) -> TemplateRow {
    let last = row.values.len().saturating_sub(1);
    let cells = row
        .values
        .iter()
        .zip(widths.iter().skip(1))
        .enumerate()
        .map(|(i, (value, &width))| match i {
            0 => format!("{:>width$}", value, width = width),
            i if i == last => value.clone(),
            _ => format!("{:<width$}", value, width = width),
        })
        .collect();

    let name_width = widths.first().copied().unwrap_or_default();
    TemplateRow {
        name: format!("{:<width$}", row.label, width = name_width),
        cells,
    }
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("header", Style::new().bold())
        .add("footer", Style::new().dim())
}

/// Render a results table to string using outstanding
pub fn render_table(table: &MunroTable, output_mode: OutputMode) -> anyhow::Result<String> {
    let theme = create_theme();
    let widths = table.column_widths();

    let header_row = TableRow {
        label: table.headers.first().cloned().unwrap_or_default(),
        values: table.headers.iter().skip(1).cloned().collect(),
    };
    let header = to_template_row(&header_row, &widths);

    let separator = "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1));

    let context = MunroTableContext {
        header: format!("{}  {}", header.name, header.cells.join("  ")),
        separator,
        rows: table
            .rows
            .iter()
            .map(|r| to_template_row(r, &widths))
            .collect(),
        footer: table.footer.label.clone(),
    };

    let rendered = render_with_output(MUNRO_TABLE_TEMPLATE, &context, &theme, output_mode)?;
    Ok(rendered)
}

/// Render search results using outstanding's auto dispatch
pub fn render_results(munros: &[&Munro], output_mode: OutputMode) -> anyhow::Result<String> {
    // For JSON mode, use outstanding's render_auto for serialization
    if matches!(output_mode, OutputMode::Json) {
        let theme = create_theme();
        return Ok(render_auto(
            MUNRO_TABLE_TEMPLATE,
            &munros,
            &theme,
            output_mode,
        )?);
    }

    render_table(&MunroTable::from_results(munros), output_mode)
}
