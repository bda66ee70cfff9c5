mod csv;
#[cfg(feature = "html")]
mod html;
mod json;
mod xls;
mod xlsx;
