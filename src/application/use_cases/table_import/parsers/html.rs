use super::super::{DecodeResult, DecodedTable, TableImporter};

use crate::domain::table::CellValue;
use crate::infrastructure::html::HtmlTableParser;

impl TableImporter {
    pub(in crate::application::use_cases::table_import) fn import_html(
        &self,
        data: &[u8],
    ) -> DecodeResult {
        let content = String::from_utf8_lossy(data);
        let table = HtmlTableParser::parse(&content)?;

        let rows = table
            .data
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::Text).collect())
            .collect();

        Ok(DecodedTable::unshaped(rows).with_options(table.options))
    }
}
