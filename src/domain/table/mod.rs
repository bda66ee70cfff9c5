// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// Core types and value objects for table import
// No I/O, no external decoders

mod cell;
mod format;
mod imported_table;
mod merge;

pub use cell::{CellValue, Grid, RawGrid};
pub use format::ImportFormat;
pub use imported_table::{ImportedTable, TableOptions};
pub use merge::{MergeCell, MergeGeometry, COLSPAN_SENTINEL, ROWSPAN_SENTINEL, SPAN_SENTINEL};
