// ============================================================
// TABLE IMPORT USE CASE
// ============================================================
// Raw bytes + declared format -> one rectangular grid of text cells

use std::fmt;

use tracing::{debug, info, warn};

use crate::domain::error::{ImportError, Result};
use crate::domain::table::{ImportFormat, ImportedTable};
use crate::infrastructure::config::ImportConfig;
use crate::infrastructure::encoding::EncodingNormalizer;

pub mod grid_shaper;
pub mod merge_resolver;
mod parsers;
mod types;

pub use types::DecodedTable;

type DecodeResult = Result<DecodedTable>;

/// Whether HTML import was compiled in
pub const MARKUP_SUPPORT_AVAILABLE: bool = cfg!(feature = "html");

/// Hook applied to the raw buffer before anything else touches it
pub type DataFilter = Box<dyn Fn(Vec<u8>, ImportFormat) -> Vec<u8> + Send + Sync>;

/// Imports tables from CSV, HTML, JSON, XLS and XLSX buffers.
///
/// Holds no per-import state: every call owns its buffer, its workbook
/// readers and its intermediate grids, so one importer can serve
/// concurrent callers.
pub struct TableImporter {
    config: ImportConfig,
    normalizer: EncodingNormalizer,
    data_filter: Option<DataFilter>,
}

impl Default for TableImporter {
    fn default() -> Self {
        Self::with_config(ImportConfig::default())
    }
}

impl fmt::Debug for TableImporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableImporter")
            .field("config", &self.config)
            .field("data_filter", &self.data_filter.is_some())
            .finish()
    }
}

impl TableImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ImportConfig) -> Self {
        let normalizer = EncodingNormalizer::new(config.charset_candidates.clone());
        Self {
            config,
            normalizer,
            data_filter: None,
        }
    }

    /// Replace the encoding normalizer (e.g. one without charset detection)
    pub fn with_normalizer(mut self, normalizer: EncodingNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Install a filter that may rewrite the raw buffer before import
    pub fn with_data_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(Vec<u8>, ImportFormat) -> Vec<u8> + Send + Sync + 'static,
    {
        self.data_filter = Some(Box::new(filter));
        self
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// HTML import needs the compiled-in parser and the host's consent
    pub fn markup_support_available(&self) -> bool {
        MARKUP_SUPPORT_AVAILABLE && self.config.markup_enabled
    }

    /// Formats this importer accepts, in the order they should be offered
    pub fn available_formats(&self) -> Vec<ImportFormat> {
        let mut formats = vec![
            ImportFormat::Csv,
            ImportFormat::Json,
            ImportFormat::Xls,
            ImportFormat::Xlsx,
        ];
        if self.markup_support_available() {
            formats.push(ImportFormat::Html);
        }
        formats
    }

    /// Import a table from a buffer tagged with its format name
    /// ("csv", "html", "json", "xls", "xlsx").
    pub fn import_table(&self, format_tag: &str, data: Vec<u8>) -> Result<ImportedTable> {
        let format = format_tag.parse::<ImportFormat>().map_err(|e| {
            warn!(format = format_tag, "Rejected unknown import format");
            e
        })?;
        self.import(format, data)
    }

    pub fn import(&self, format: ImportFormat, data: Vec<u8>) -> Result<ImportedTable> {
        if format == ImportFormat::Html && !self.markup_support_available() {
            warn!(%format, "HTML import is not available on this host");
            return Err(ImportError::UnsupportedFormat(format));
        }

        debug!(%format, bytes = data.len(), "Starting table import");

        let data = match &self.data_filter {
            Some(filter) => filter(data, format),
            None => data,
        };

        let data = if format.is_text_based() {
            let (data, outcome) = self.normalizer.normalize(data);
            debug!(%format, ?outcome, "Encoding normalized");
            data
        } else {
            data
        };

        let mut decoded = self.decode(format, &data).map_err(|e| {
            warn!(%format, error = %e, "Table import failed");
            e
        })?;

        if !decoded.shaped {
            grid_shaper::shape(&mut decoded.data);
        }

        let table = decoded.into_imported_table();
        info!(
            %format,
            rows = table.row_count(),
            columns = table.column_count(),
            "Imported table"
        );
        Ok(table)
    }

    fn decode(&self, format: ImportFormat, data: &[u8]) -> DecodeResult {
        match format {
            ImportFormat::Csv => self.import_csv(data),
            #[cfg(feature = "html")]
            ImportFormat::Html => self.import_html(data),
            #[cfg(not(feature = "html"))]
            ImportFormat::Html => Err(ImportError::UnsupportedFormat(format)),
            ImportFormat::Json => self.import_json(data),
            ImportFormat::Xls => {
                let geometry = self.import_xls(data)?;
                Ok(DecodedTable::unshaped(merge_resolver::resolve_merges(
                    geometry,
                )))
            }
            ImportFormat::Xlsx => self.import_xlsx(data),
        }
    }
}
