pub mod error;

// Table import domain types
pub mod table;
