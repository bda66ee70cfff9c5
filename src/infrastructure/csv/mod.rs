// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Delimiter detection and tokenizing of delimited text

mod csv_parser;

pub use csv_parser::CsvParser;
