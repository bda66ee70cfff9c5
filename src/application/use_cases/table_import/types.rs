use crate::domain::table::{ImportedTable, RawGrid, TableOptions};

/// Output of one format decoder, before shaping and text coercion
#[derive(Debug, Default)]
pub struct DecodedTable {
    pub data: RawGrid,
    pub options: TableOptions,
    /// Set when the decoder already padded the rows itself
    pub shaped: bool,
}

impl DecodedTable {
    pub fn unshaped(data: RawGrid) -> Self {
        Self {
            data,
            options: TableOptions::new(),
            shaped: false,
        }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Coerce every cell to text
    pub fn into_imported_table(self) -> ImportedTable {
        let data = self
            .data
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.into_text()).collect())
            .collect();

        ImportedTable {
            data,
            options: self.options,
        }
    }
}
