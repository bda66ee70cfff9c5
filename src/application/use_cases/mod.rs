pub mod table_import;
