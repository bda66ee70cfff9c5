use super::super::TableImporter;

use crate::domain::error::Result;
use crate::domain::table::MergeGeometry;
use crate::infrastructure::spreadsheet::XlsSheetReader;

use super::super::merge_resolver::read_merge_geometry;

impl TableImporter {
    /// Read the configured sheet of a legacy workbook with its merge spans
    pub(in crate::application::use_cases::table_import) fn import_xls(
        &self,
        data: &[u8],
    ) -> Result<MergeGeometry> {
        let sheet = self.config.sheet_index;
        let reader = XlsSheetReader::open(data, sheet)?;
        Ok(read_merge_geometry(&reader, sheet))
    }
}
