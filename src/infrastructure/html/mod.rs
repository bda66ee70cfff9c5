// ============================================================
// HTML INFRASTRUCTURE LAYER
// ============================================================
// Table extraction from markup documents

mod table_parser;

pub use table_parser::HtmlTableParser;
