// ============================================================
// MERGE GEOMETRY
// ============================================================
// Per-cell span records read from legacy binary workbooks

use super::CellValue;

/// Written into cells covered horizontally by a merge (same row as the origin)
pub const COLSPAN_SENTINEL: &str = "#colspan#";

/// Written into cells covered vertically by a merge (same column as the origin)
pub const ROWSPAN_SENTINEL: &str = "#rowspan#";

/// Written into cells covered by a merge spanning both directions
pub const SPAN_SENTINEL: &str = "#span#";

/// One cell of a legacy workbook sheet with its merge spans
#[derive(Debug, Clone, PartialEq)]
pub struct MergeCell {
    pub rowspan: usize,
    pub colspan: usize,
    pub value: CellValue,
}

impl MergeCell {
    pub fn single(value: CellValue) -> Self {
        Self {
            rowspan: 1,
            colspan: 1,
            value,
        }
    }

    pub fn is_merge_origin(&self) -> bool {
        self.rowspan > 1 || self.colspan > 1
    }
}

pub type MergeGeometry = Vec<Vec<MergeCell>>;
