// ============================================================
// IMPORT FORMAT ENUM
// ============================================================
// The closed set of source formats an import can declare

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ImportError;

/// Declared source format of an import buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    /// Character-delimited text (comma, semicolon, tab, pipe)
    Csv,

    /// Markup document containing a `<table>`
    Html,

    /// Structured-object notation, either a full export or a bare list of records
    Json,

    /// Excel 97-2003 binary workbook
    Xls,

    /// Excel 2007+ zipped workbook
    Xlsx,
}

impl ImportFormat {
    pub const ALL: [ImportFormat; 5] = [
        ImportFormat::Csv,
        ImportFormat::Html,
        ImportFormat::Json,
        ImportFormat::Xls,
        ImportFormat::Xlsx,
    ];

    /// Wire tag of this format
    pub fn tag(&self) -> &'static str {
        match self {
            ImportFormat::Csv => "csv",
            ImportFormat::Html => "html",
            ImportFormat::Json => "json",
            ImportFormat::Xls => "xls",
            ImportFormat::Xlsx => "xlsx",
        }
    }

    /// Text formats go through encoding normalization before decoding.
    /// Spreadsheet containers carry their own encoding handling.
    pub fn is_text_based(&self) -> bool {
        matches!(
            self,
            ImportFormat::Csv | ImportFormat::Html | ImportFormat::Json
        )
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ImportFormat {
    type Err = ImportError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().to_ascii_lowercase();
        ImportFormat::ALL
            .into_iter()
            .find(|format| format.tag() == normalized)
            .ok_or_else(|| ImportError::UnknownFormat(tag.to_string()))
    }
}
