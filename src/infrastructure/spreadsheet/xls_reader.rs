use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Dimensions, Range, Reader, Xls};

use crate::domain::error::{ImportError, Result};
use crate::domain::table::{CellValue, ImportFormat};

use super::{extent, value_at};

/// Cell-by-cell access to a legacy workbook, with merge spans.
///
/// Coordinates are 0-based. `sheet` selects the worksheet by position.
pub trait LegacySheetReader {
    fn row_count(&self, sheet: usize) -> usize;
    fn col_count(&self, sheet: usize) -> usize;
    fn rowspan(&self, row: usize, col: usize, sheet: usize) -> usize;
    fn colspan(&self, row: usize, col: usize, sheet: usize) -> usize;
    fn value(&self, row: usize, col: usize, sheet: usize) -> CellValue;
}

/// Merge spans `(rowspan, colspan)` keyed by their top-left cell
type MergeIndex = HashMap<(u32, u32), (usize, usize)>;

struct LoadedSheet {
    range: Range<Data>,
    merges: MergeIndex,
}

impl LoadedSheet {
    fn new(range: Range<Data>, regions: &[Dimensions]) -> Self {
        let merges = regions
            .iter()
            .map(|region| {
                let rowspan = region.end.0.saturating_sub(region.start.0) as usize + 1;
                let colspan = region.end.1.saturating_sub(region.start.1) as usize + 1;
                (region.start, (rowspan, colspan))
            })
            .collect();
        Self { range, merges }
    }

    /// Spans of the merge region whose top-left cell is (row, col)
    fn merge_at(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        self.merges.get(&(row as u32, col as u32)).copied()
    }
}

/// One worksheet of an Excel 97-2003 workbook read through calamine.
///
/// Built per import call from the in-memory buffer. Only the requested sheet
/// is decoded; every other position reads as an empty sheet.
pub struct XlsSheetReader {
    index: usize,
    sheet: LoadedSheet,
}

impl XlsSheetReader {
    pub fn open(data: &[u8], sheet: usize) -> Result<Self> {
        let mut workbook: Xls<_> = Xls::new(Cursor::new(data)).map_err(|e| {
            ImportError::decode(ImportFormat::Xls, format!("Failed to open Excel file: {}", e))
        })?;

        let names = workbook.sheet_names();
        let name = names.get(sheet).ok_or_else(|| {
            ImportError::decode(
                ImportFormat::Xls,
                format!(
                    "Workbook has {} sheet(s), no sheet at index {}",
                    names.len(),
                    sheet
                ),
            )
        })?;

        let range = workbook.worksheet_range(name).map_err(|e| {
            ImportError::decode(
                ImportFormat::Xls,
                format!("Failed to read worksheet {}: {}", name, e),
            )
        })?;
        let regions = workbook.worksheet_merge_cells(name).unwrap_or_default();

        tracing::debug!(sheet, merges = regions.len(), "Opened XLS worksheet");
        Ok(Self {
            index: sheet,
            sheet: LoadedSheet::new(range, &regions),
        })
    }

    fn sheet(&self, sheet: usize) -> Option<&LoadedSheet> {
        (sheet == self.index).then_some(&self.sheet)
    }
}

impl LegacySheetReader for XlsSheetReader {
    fn row_count(&self, sheet: usize) -> usize {
        self.sheet(sheet).map(|s| extent(&s.range).0).unwrap_or(0)
    }

    fn col_count(&self, sheet: usize) -> usize {
        self.sheet(sheet).map(|s| extent(&s.range).1).unwrap_or(0)
    }

    fn rowspan(&self, row: usize, col: usize, sheet: usize) -> usize {
        self.sheet(sheet)
            .and_then(|s| s.merge_at(row, col))
            .map(|(rowspan, _)| rowspan)
            .unwrap_or(1)
    }

    fn colspan(&self, row: usize, col: usize, sheet: usize) -> usize {
        self.sheet(sheet)
            .and_then(|s| s.merge_at(row, col))
            .map(|(_, colspan)| colspan)
            .unwrap_or(1)
    }

    fn value(&self, row: usize, col: usize, sheet: usize) -> CellValue {
        self.sheet(sheet)
            .map(|s| value_at(&s.range, row, col))
            .unwrap_or(CellValue::Null)
    }
}
