#[path = "config/mod.rs"]
pub mod config_mod;
pub use config_mod as config;
pub mod csv;
pub mod encoding;
#[cfg(feature = "html")]
pub mod html;
pub mod logging;
pub mod spreadsheet;
