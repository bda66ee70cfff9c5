// ============================================================
// MERGE RESOLVER
// ============================================================
// Legacy workbook merge spans into continuation sentinels

use crate::domain::table::{
    CellValue, MergeCell, MergeGeometry, RawGrid, COLSPAN_SENTINEL, ROWSPAN_SENTINEL,
    SPAN_SENTINEL,
};
use crate::infrastructure::spreadsheet::LegacySheetReader;

/// Read every cell of `sheet` with its spans
pub fn read_merge_geometry(reader: &impl LegacySheetReader, sheet: usize) -> MergeGeometry {
    let rows = reader.row_count(sheet);
    let cols = reader.col_count(sheet);

    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| MergeCell {
                    rowspan: reader.rowspan(row, col, sheet),
                    colspan: reader.colspan(row, col, sheet),
                    value: reader.value(row, col, sheet),
                })
                .collect()
        })
        .collect()
}

/// Flatten merge geometry into a grid of values.
///
/// Cells covered by a merge get a sentinel instead of their own value:
/// `#colspan#` in the origin's row, `#rowspan#` in the origin's column and
/// `#span#` everywhere else in the merged rectangle. The origin keeps its
/// value. Spans reaching past the sheet are clipped.
pub fn resolve_merges(geometry: MergeGeometry) -> RawGrid {
    let origins: Vec<(usize, usize, usize, usize)> = geometry
        .iter()
        .enumerate()
        .flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_merge_origin())
                .map(move |(col_idx, cell)| (row_idx, col_idx, cell.rowspan, cell.colspan))
        })
        .collect();

    let mut grid: RawGrid = geometry
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell.value).collect())
        .collect();

    for (row_idx, col_idx, rowspan, colspan) in origins {
        for i in 0..rowspan.max(1) {
            for j in 0..colspan.max(1) {
                let sentinel = match (i, j) {
                    (0, 0) => continue,
                    (0, _) => COLSPAN_SENTINEL,
                    (_, 0) => ROWSPAN_SENTINEL,
                    _ => SPAN_SENTINEL,
                };
                if let Some(cell) = grid
                    .get_mut(row_idx + i)
                    .and_then(|row| row.get_mut(col_idx + j))
                {
                    *cell = CellValue::text(sentinel);
                }
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// In-memory legacy sheet: values plus (row, col, rowspan, colspan) merges
    struct FakeSheet {
        values: Vec<Vec<&'static str>>,
        merges: Vec<(usize, usize, usize, usize)>,
    }

    impl FakeSheet {
        fn merge(&self, row: usize, col: usize) -> Option<(usize, usize)> {
            self.merges
                .iter()
                .find(|m| m.0 == row && m.1 == col)
                .map(|m| (m.2, m.3))
        }
    }

    impl LegacySheetReader for FakeSheet {
        fn row_count(&self, _sheet: usize) -> usize {
            self.values.len()
        }

        fn col_count(&self, _sheet: usize) -> usize {
            self.values.first().map(Vec::len).unwrap_or(0)
        }

        fn rowspan(&self, row: usize, col: usize, _sheet: usize) -> usize {
            self.merge(row, col).map(|m| m.0).unwrap_or(1)
        }

        fn colspan(&self, row: usize, col: usize, _sheet: usize) -> usize {
            self.merge(row, col).map(|m| m.1).unwrap_or(1)
        }

        fn value(&self, row: usize, col: usize, _sheet: usize) -> CellValue {
            CellValue::text(self.values[row][col])
        }
    }

    fn texts(grid: RawGrid) -> Vec<Vec<String>> {
        grid.into_iter()
            .map(|row| row.into_iter().map(CellValue::into_text).collect())
            .collect()
    }

    #[test]
    fn test_horizontal_merge() {
        let sheet = FakeSheet {
            values: vec![vec!["X", "", "c"], vec!["1", "2", "3"]],
            merges: vec![(0, 0, 1, 2)],
        };
        let grid = texts(resolve_merges(read_merge_geometry(&sheet, 0)));

        assert_eq!(grid[0], vec!["X", COLSPAN_SENTINEL, "c"]);
        assert_eq!(grid[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_vertical_merge() {
        let sheet = FakeSheet {
            values: vec![vec!["a", "Y"], vec!["b", ""], vec!["c", ""]],
            merges: vec![(0, 1, 3, 1)],
        };
        let grid = texts(resolve_merges(read_merge_geometry(&sheet, 0)));

        assert_eq!(grid[0][1], "Y");
        assert_eq!(grid[1][1], ROWSPAN_SENTINEL);
        assert_eq!(grid[2][1], ROWSPAN_SENTINEL);
        assert_eq!(grid[2][0], "c");
    }

    #[test]
    fn test_block_merge() {
        let sheet = FakeSheet {
            values: vec![
                vec!["Z", "", "", "d"],
                vec!["", "", "", "e"],
                vec!["f", "g", "h", "i"],
            ],
            merges: vec![(0, 0, 2, 3)],
        };
        let grid = texts(resolve_merges(read_merge_geometry(&sheet, 0)));

        assert_eq!(
            grid,
            vec![
                vec!["Z", COLSPAN_SENTINEL, COLSPAN_SENTINEL, "d"],
                vec![ROWSPAN_SENTINEL, SPAN_SENTINEL, SPAN_SENTINEL, "e"],
                vec!["f", "g", "h", "i"],
            ]
        );
    }

    #[test]
    fn test_span_past_sheet_is_clipped() {
        let geometry = vec![vec![
            MergeCell {
                rowspan: 4,
                colspan: 5,
                value: CellValue::text("big"),
            },
            MergeCell::single(CellValue::text("")),
        ]];
        let grid = texts(resolve_merges(geometry));
        assert_eq!(grid, vec![vec!["big", COLSPAN_SENTINEL]]);
    }

    #[test]
    fn test_no_merges_copies_values() {
        let sheet = FakeSheet {
            values: vec![vec!["a", "b"], vec!["c", "d"]],
            merges: Vec::new(),
        };
        let grid = texts(resolve_merges(read_merge_geometry(&sheet, 0)));
        assert_eq!(grid, vec![vec!["a", "b"], vec!["c", "d"]]);
    }
}
