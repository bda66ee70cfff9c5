use super::super::{DecodeResult, DecodedTable, TableImporter};

use crate::infrastructure::spreadsheet::XlsxSheetReader;

impl TableImporter {
    pub(in crate::application::use_cases::table_import) fn import_xlsx(
        &self,
        data: &[u8],
    ) -> DecodeResult {
        let mut reader = XlsxSheetReader::open(data)?;
        let rows = reader.rows(self.config.sheet_index)?;
        Ok(DecodedTable::unshaped(rows))
    }
}
