use serde::{Deserialize, Serialize};

use super::Grid;

/// Table-level options carried next to the data (name, description, render flags)
pub type TableOptions = serde_json::Map<String, serde_json::Value>;

/// Result of a successful import
///
/// Serializes the same way a full table export does: `data` plus every
/// option key at the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedTable {
    pub data: Grid,

    #[serde(flatten)]
    pub options: TableOptions,
}

impl ImportedTable {
    pub fn new(data: Grid) -> Self {
        Self {
            data,
            options: TableOptions::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn column_count(&self) -> usize {
        self.data.first().map(Vec::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_options_beside_data() {
        let mut table = ImportedTable::new(vec![vec!["a".to_string()]]);
        table.options.insert("name".to_string(), json!("Prices"));

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value, json!({ "data": [["a"]], "name": "Prices" }));
    }

    #[test]
    fn test_counts() {
        let table = ImportedTable::new(vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), String::new()],
        ]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(ImportedTable::default().column_count(), 0);
    }
}
