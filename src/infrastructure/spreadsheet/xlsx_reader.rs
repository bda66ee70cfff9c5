use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::domain::error::{ImportError, Result};
use crate::domain::table::{ImportFormat, RawGrid};

use super::range_rows;

/// Excel 2007+ workbook read through calamine from an in-memory buffer.
///
/// Merged regions are not expanded: the anchor cell holds the value and the
/// covered cells read as empty.
pub struct XlsxSheetReader<'a> {
    workbook: Xlsx<Cursor<&'a [u8]>>,
}

impl<'a> XlsxSheetReader<'a> {
    pub fn open(data: &'a [u8]) -> Result<Self> {
        let workbook = Xlsx::new(Cursor::new(data)).map_err(|e| {
            ImportError::decode(ImportFormat::Xlsx, format!("Failed to open Excel file: {}", e))
        })?;
        Ok(Self { workbook })
    }

    /// Rows of the sheet at position `sheet`, starting at A1
    pub fn rows(&mut self, sheet: usize) -> Result<RawGrid> {
        let range = self
            .workbook
            .worksheet_range_at(sheet)
            .ok_or_else(|| {
                ImportError::decode(ImportFormat::Xlsx, format!("No worksheet at index {}", sheet))
            })?
            .map_err(|e| {
                ImportError::decode(
                    ImportFormat::Xlsx,
                    format!("Failed to read Excel range: {}", e),
                )
            })?;

        Ok(range_rows(&range))
    }
}
