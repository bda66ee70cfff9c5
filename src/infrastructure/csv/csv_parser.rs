// ============================================================
// CSV PARSER
// ============================================================
// Delimiter sniffing and tokenizing of delimited text into rows

use csv::{ByteRecord, ReaderBuilder};

use crate::domain::error::{ImportError, Result};
use crate::domain::table::ImportFormat;

/// Bytes read from the front of the buffer for delimiter detection
const DELIMITER_SAMPLE_BYTES: usize = 4096;

/// CSV parser with delimiter detection
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Parser for `data` with its delimiter sniffed from the leading lines
    pub fn auto_detect(data: &[u8], candidates: &[u8], sample_lines: usize) -> Self {
        let sample = &data[..data.len().min(DELIMITER_SAMPLE_BYTES)];
        let content = String::from_utf8_lossy(sample);
        Self::default().with_delimiter(Self::detect_delimiter(&content, candidates, sample_lines))
    }

    /// Tokenize delimited text into rows of fields.
    ///
    /// No header row, rows may differ in length. Fields that are not valid
    /// UTF-8 are decoded lossily.
    pub fn parse_rows(&self, data: &[u8]) -> Result<Vec<Vec<String>>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true) // Allow rows with different lengths
            .from_reader(data);

        let mut rows = Vec::new();
        let mut record = ByteRecord::new();

        loop {
            match reader.read_byte_record(&mut record) {
                Ok(true) => rows.push(
                    record
                        .iter()
                        .map(|field| String::from_utf8_lossy(field).into_owned())
                        .collect(),
                ),
                Ok(false) => break,
                Err(e) => {
                    return Err(ImportError::decode(
                        ImportFormat::Csv,
                        format!("Failed to parse CSV row {}: {}", rows.len() + 1, e),
                    ))
                }
            }
        }

        Ok(rows)
    }

    /// Detect delimiter from content.
    ///
    /// Each candidate is scored by its average count per sampled line, damped
    /// by the spread of those counts. Ties keep the earlier candidate; comma
    /// wins when nothing scores.
    pub fn detect_delimiter(content: &str, candidates: &[u8], sample_lines: usize) -> u8 {
        let sample_lines: Vec<_> = content.lines().take(sample_lines).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        if sample_lines.is_empty() {
            return best_delimiter;
        }

        for &delimiter in candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}
