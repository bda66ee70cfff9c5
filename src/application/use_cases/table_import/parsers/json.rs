use serde_json::Value;

use super::super::{grid_shaper, DecodeResult, DecodedTable, TableImporter};

use crate::domain::error::ImportError;
use crate::domain::table::{CellValue, ImportFormat, RawGrid, TableOptions};

impl TableImporter {
    /// Decode a JSON table.
    ///
    /// An object with a `data` key is a full export: `data` holds the rows and
    /// every other key is kept verbatim as a table option. Anything else is
    /// data only, one row per element.
    pub(in crate::application::use_cases::table_import) fn import_json(
        &self,
        data: &[u8],
    ) -> DecodeResult {
        let value: Value = serde_json::from_slice(data)
            .map_err(|e| ImportError::decode(ImportFormat::Json, format!("JSON error: {}", e)))?;

        let (mut rows, options): (RawGrid, TableOptions) = match value {
            Value::Object(mut object) if object.contains_key("data") => {
                let table_data = object.shift_remove("data").unwrap_or(Value::Null);
                let Value::Array(rows) = table_data else {
                    return Err(ImportError::decode(
                        ImportFormat::Json,
                        "The \"data\" entry must be a list of rows",
                    ));
                };
                (rows.into_iter().map(json_row).collect(), object)
            }
            Value::Object(object) => (
                object.into_iter().map(|(_, row)| json_row(row)).collect(),
                TableOptions::new(),
            ),
            Value::Array(rows) => (rows.into_iter().map(json_row).collect(), TableOptions::new()),
            Value::Null => {
                return Err(ImportError::decode(
                    ImportFormat::Json,
                    "JSON error: the document contains no table data",
                ))
            }
            scalar => (vec![vec![json_cell(scalar)]], TableOptions::new()),
        };

        grid_shaper::pad_to_max_columns(&mut rows);

        Ok(DecodedTable {
            data: rows,
            options,
            shaped: true,
        })
    }
}

/// One record as a row: object values in declaration order, array elements
/// as is, a scalar as a single cell and null as an empty row
fn json_row(record: Value) -> Vec<CellValue> {
    match record {
        Value::Object(object) => object.into_iter().map(|(_, v)| json_cell(v)).collect(),
        Value::Array(values) => values.into_iter().map(json_cell).collect(),
        Value::Null => Vec::new(),
        scalar => vec![json_cell(scalar)],
    }
}

fn json_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Int(i)
            } else if let Some(f) = n.as_f64().filter(|_| !n.is_u64()) {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        Value::String(s) => CellValue::Text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => CellValue::Text(nested.to_string()),
    }
}
