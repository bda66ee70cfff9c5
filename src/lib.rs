//! Multi-format table import.
//!
//! Turns a raw buffer plus its declared format (CSV, HTML, JSON, XLS or XLSX)
//! into one rectangular grid of text cells. Text formats are brought to UTF-8
//! first; merged cells of legacy workbooks become continuation sentinels.
//!
//! ```no_run
//! use tableport::TableImporter;
//!
//! let importer = TableImporter::new();
//! let table = importer.import_table("csv", b"a,b\n1,2,3\n".to_vec())?;
//! assert_eq!(table.data[0], vec!["a", "b", ""]);
//! # Ok::<(), tableport::ImportError>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{TableImporter, MARKUP_SUPPORT_AVAILABLE};
pub use domain::error::{ImportError, Result};
pub use domain::table::{
    CellValue, Grid, ImportFormat, ImportedTable, TableOptions, COLSPAN_SENTINEL,
    ROWSPAN_SENTINEL, SPAN_SENTINEL,
};
pub use infrastructure::config::ImportConfig;
pub use infrastructure::logging::init_logging;
