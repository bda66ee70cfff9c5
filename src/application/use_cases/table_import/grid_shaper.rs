// ============================================================
// GRID SHAPER
// ============================================================
// Pad rows to a common width and normalize line breaks in cells

use crate::domain::table::{CellValue, RawGrid};

/// Pad rows to max width, then replace CRLF with LF in every text cell
pub fn shape(grid: &mut RawGrid) {
    pad_to_max_columns(grid);
    normalize_line_endings(grid);
}

/// Append empty cells until every row is as long as the longest one
pub fn pad_to_max_columns(grid: &mut RawGrid) {
    let max_columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    for row in grid.iter_mut() {
        row.resize_with(max_columns, CellValue::default);
    }
}

/// Replace Windows line breaks `\r\n` with `\n` inside cell text
pub fn normalize_line_endings(grid: &mut RawGrid) {
    for cell in grid.iter_mut().flatten() {
        if let CellValue::Text(text) = cell {
            if text.contains("\r\n") {
                *text = text.replace("\r\n", "\n");
            }
        }
    }
}
