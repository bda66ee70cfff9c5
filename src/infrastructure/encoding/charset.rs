// ============================================================
// CHARSET GUESSING AND TRANSCODING
// ============================================================
// encoding_rs backed collaborators for the encoding normalizer

use encoding_rs::Encoding;

/// Outcome of a charset guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedCharset {
    /// Pure 7-bit data, already valid UTF-8
    Ascii,

    /// Well-formed UTF-8
    Utf8,

    /// Any other encoding that needs conversion
    Other(&'static Encoding),
}

/// Guesses the charset of a buffer from an ordered candidate list
pub trait CharsetGuesser: Send + Sync {
    fn guess(&self, data: &[u8], candidates: &[String]) -> Option<DetectedCharset>;
}

/// Converts a buffer from the given encoding to UTF-8
pub trait Transcoder: Send + Sync {
    fn convert(&self, data: &[u8], from: &'static Encoding) -> Option<Vec<u8>>;
}

/// Picks the first candidate the bytes are valid in.
///
/// Single-byte encodings such as ISO-8859-1 accept any input, so they only
/// win when every stricter candidate before them was rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct CandidateGuesser;

impl CharsetGuesser for CandidateGuesser {
    fn guess(&self, data: &[u8], candidates: &[String]) -> Option<DetectedCharset> {
        for label in candidates {
            let label = label.trim();
            match label.to_ascii_lowercase().as_str() {
                "ascii" | "us-ascii" => {
                    if data.is_ascii() {
                        return Some(DetectedCharset::Ascii);
                    }
                }
                "utf-8" | "utf8" => {
                    if Encoding::utf8_valid_up_to(data) == data.len() {
                        return Some(DetectedCharset::Utf8);
                    }
                }
                _ => match Encoding::for_label(label.as_bytes()) {
                    Some(encoding) => {
                        if encoding
                            .decode_without_bom_handling_and_without_replacement(data)
                            .is_some()
                        {
                            return Some(DetectedCharset::Other(encoding));
                        }
                    }
                    None => tracing::debug!(label, "Skipping unknown charset candidate"),
                },
            }
        }
        None
    }
}

/// Strict encoding_rs decoder: malformed input is a failed conversion
#[derive(Debug, Default, Clone, Copy)]
pub struct EncodingRsTranscoder;

impl Transcoder for EncodingRsTranscoder {
    fn convert(&self, data: &[u8], from: &'static Encoding) -> Option<Vec<u8>> {
        from.decode_without_bom_handling_and_without_replacement(data)
            .map(|text| text.into_owned().into_bytes())
    }
}
