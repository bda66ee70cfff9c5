use super::super::{DecodeResult, DecodedTable, TableImporter};

use crate::domain::table::CellValue;
use crate::infrastructure::csv::CsvParser;

impl TableImporter {
    pub(in crate::application::use_cases::table_import) fn import_csv(
        &self,
        data: &[u8],
    ) -> DecodeResult {
        let parser = CsvParser::auto_detect(
            data,
            &self.config.delimiter_bytes(),
            self.config.delimiter_sample_lines,
        );

        tracing::debug!(
            delimiter = %char::from(parser.delimiter()).escape_default(),
            "Detected CSV delimiter"
        );

        let rows = parser
            .parse_rows(data)?
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::Text).collect())
            .collect();

        Ok(DecodedTable::unshaped(rows))
    }
}
