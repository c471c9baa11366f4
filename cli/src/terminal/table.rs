//! Bordered text table for a single tray, one ruled line between rows and
//! every cell centered in a column of uniform width.

use crate::terminal::colors;
use crate::terminal::format::DisplayMap;
use colored::*;
use seedtray_common::models::tray::Tray;

const CELL_PADDING: usize = 1;

pub fn render_tray(tray: &Tray, display: &DisplayMap) -> Vec<String> {
    let (rows, cols) = tray.shape();
    let rendered: Vec<Vec<String>> = tray
        .rows()
        .map(|row| row.iter().map(|label| display.render(label).to_string()).collect())
        .collect();

    // measure_text_width ignores ANSI escapes
    let width: usize = rendered
        .iter()
        .flatten()
        .map(|cell| console::measure_text_width(cell))
        .max()
        .unwrap_or(0)
        + 2 * CELL_PADDING;

    let mut lines: Vec<String> = Vec::with_capacity(2 * rows + 1);
    lines.push(rule('┌', '┬', '┐', width, cols));
    for (idx, row) in rendered.iter().enumerate() {
        lines.push(content_line(row, width));
        if idx + 1 != rows {
            lines.push(rule('├', '┼', '┤', width, cols));
        }
    }
    lines.push(rule('└', '┴', '┘', width, cols));
    lines
}

fn rule(left: char, middle: char, right: char, width: usize, cols: usize) -> String {
    let segment: String = "─".repeat(width);
    let inner: String = vec![segment; cols].join(middle.to_string().as_str());
    format!("{}{}{}", left, inner, right)
        .color(colors::BORDER)
        .to_string()
}

fn content_line(cells: &[String], width: usize) -> String {
    let bar: String = "│".color(colors::BORDER).to_string();
    let body: Vec<String> = cells.iter().map(|cell| center(cell, width)).collect();
    format!("{}{}{}", bar, body.join(bar.as_str()), bar)
}

fn center(cell: &str, width: usize) -> String {
    let free: usize = width.saturating_sub(console::measure_text_width(cell));
    let left: usize = free / 2;
    format!("{}{}{}", " ".repeat(left), cell, " ".repeat(free - left))
}
