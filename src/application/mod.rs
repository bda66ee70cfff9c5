pub mod use_cases;

pub use use_cases::table_import::{TableImporter, MARKUP_SUPPORT_AVAILABLE};
