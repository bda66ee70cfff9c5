// ============================================================
// SPREADSHEET INFRASTRUCTURE LAYER
// ============================================================
// calamine readers for legacy (.xls) and zipped (.xlsx) workbooks

mod xls_reader;
mod xlsx_reader;

pub use xls_reader::{LegacySheetReader, XlsSheetReader};
pub use xlsx_reader::XlsxSheetReader;

use calamine::{Data, Range};

use crate::domain::table::{CellValue, RawGrid};

/// Convert a calamine cell to a decoded cell value
pub(crate) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Bool(value) => CellValue::Bool(*value),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::String(value) => CellValue::Text(value.clone()),
        other => CellValue::Text(other.to_string()),
    }
}

/// Number of rows and columns from A1 to the last used cell
pub(crate) fn extent(range: &Range<Data>) -> (usize, usize) {
    range
        .end()
        .map(|(row, col)| (row as usize + 1, col as usize + 1))
        .unwrap_or((0, 0))
}

/// Cell at an absolute sheet position, `Null` outside the used range
pub(crate) fn value_at(range: &Range<Data>, row: usize, col: usize) -> CellValue {
    range
        .get_value((row as u32, col as u32))
        .map(cell_value)
        .unwrap_or(CellValue::Null)
}

/// Whole sheet as rows starting at A1
pub(crate) fn range_rows(range: &Range<Data>) -> RawGrid {
    let (rows, cols) = extent(range);
    (0..rows)
        .map(|row| (0..cols).map(|col| value_at(range, row, col)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversion() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Null);
        assert_eq!(cell_value(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(cell_value(&Data::Float(2.5)), CellValue::Float(2.5));
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            cell_value(&Data::String("x".to_string())),
            CellValue::text("x")
        );
    }

    #[test]
    fn test_range_rows_start_at_a1() {
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("b2".to_string()));
        range.set_value((2, 2), Data::Int(3));

        let rows = range_rows(&range);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![CellValue::Null; 3]);
        assert_eq!(rows[1][1], CellValue::text("b2"));
        assert_eq!(rows[2][2], CellValue::Int(3));
        assert_eq!(rows[2][0], CellValue::Null);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert_eq!(extent(&range), (0, 0));
        assert!(range_rows(&range).is_empty());
    }
}
