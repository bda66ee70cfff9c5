// ============================================================
// ENCODING NORMALIZER
// ============================================================
// Bring text import buffers to UTF-8 before structural parsing

use encoding_rs::Encoding;
use tracing::debug;

use super::charset::{
    CandidateGuesser, CharsetGuesser, DetectedCharset, EncodingRsTranscoder, Transcoder,
};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// What the normalizer did to a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Left as is: already canonical, or every conversion attempt failed
    Unchanged,

    /// UTF-8 byte-order mark removed, rest of the buffer untouched
    BomStripped,

    /// Converted to UTF-8 from the named encoding
    Converted(&'static str),
}

/// Detects and converts text buffers to UTF-8.
///
/// Steps, stopping at the first success:
/// 1. UTF-8 BOM: strip it and trust the rest of the buffer.
/// 2. UTF-16 BOM (either byte order): convert.
/// 3. Guess from the candidate charsets and convert if the guess is not UTF-8.
///
/// A failed conversion is never an error; the original bytes go on to the
/// decoder as a best effort.
pub struct EncodingNormalizer {
    guesser: Option<Box<dyn CharsetGuesser>>,
    transcoder: Box<dyn Transcoder>,
    candidates: Vec<String>,
}

impl EncodingNormalizer {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            guesser: Some(Box::new(CandidateGuesser)),
            transcoder: Box::new(EncodingRsTranscoder),
            candidates,
        }
    }

    /// Normalizer with BOM handling only
    pub fn without_detection() -> Self {
        Self {
            guesser: None,
            transcoder: Box::new(EncodingRsTranscoder),
            candidates: Vec::new(),
        }
    }

    pub fn with_guesser(mut self, guesser: impl CharsetGuesser + 'static) -> Self {
        self.guesser = Some(Box::new(guesser));
        self
    }

    pub fn with_transcoder(mut self, transcoder: impl Transcoder + 'static) -> Self {
        self.transcoder = Box::new(transcoder);
        self
    }

    pub fn normalize(&self, mut data: Vec<u8>) -> (Vec<u8>, Normalization) {
        if data.starts_with(UTF8_BOM) {
            data.drain(..UTF8_BOM.len());
            debug!("Stripped UTF-8 byte-order mark");
            return (data, Normalization::BomStripped);
        }

        if let Some((encoding, bom_length)) = Encoding::for_bom(&data) {
            if encoding != encoding_rs::UTF_8 {
                match self.transcoder.convert(&data[bom_length..], encoding) {
                    Some(converted) => {
                        debug!(encoding = encoding.name(), "Converted UTF-16 data to UTF-8");
                        return (converted, Normalization::Converted(encoding.name()));
                    }
                    None => debug!(
                        encoding = encoding.name(),
                        "UTF-16 conversion failed, trying charset detection"
                    ),
                }
            }
        }

        let Some(guesser) = self.guesser.as_ref() else {
            return (data, Normalization::Unchanged);
        };

        match guesser.guess(&data, &self.candidates) {
            Some(DetectedCharset::Other(encoding)) => {
                match self.transcoder.convert(&data, encoding) {
                    Some(converted) => {
                        debug!(encoding = encoding.name(), "Converted data to UTF-8");
                        (converted, Normalization::Converted(encoding.name()))
                    }
                    None => {
                        debug!(
                            encoding = encoding.name(),
                            "Charset conversion failed, keeping original bytes"
                        );
                        (data, Normalization::Unchanged)
                    }
                }
            }
            Some(_) => (data, Normalization::Unchanged),
            None => {
                debug!("No charset candidate matched, keeping original bytes");
                (data, Normalization::Unchanged)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn normalizer() -> EncodingNormalizer {
        EncodingNormalizer::new(vec![
            "ASCII".to_string(),
            "UTF-8".to_string(),
            "ISO-8859-1".to_string(),
        ])
    }

    struct FailingTranscoder;

    impl Transcoder for FailingTranscoder {
        fn convert(&self, _data: &[u8], _from: &'static Encoding) -> Option<Vec<u8>> {
            None
        }
    }

    #[test]
    fn test_strips_utf8_bom_only() {
        let (data, outcome) = normalizer().normalize(b"\xEF\xBB\xBFa,b\n1,2\n".to_vec());
        assert_eq!(outcome, Normalization::BomStripped);
        assert_eq!(data, b"a,b\n1,2\n".to_vec());
    }

    #[test]
    fn test_trusts_bom_without_validation() {
        // Invalid UTF-8 after the BOM is passed through untouched
        let (data, outcome) = normalizer().normalize(b"\xEF\xBB\xBFcaf\xe9".to_vec());
        assert_eq!(outcome, Normalization::BomStripped);
        assert_eq!(data, b"caf\xe9".to_vec());
    }

    #[test]
    fn test_converts_utf16_le_with_bom() {
        let mut input = vec![0xFF, 0xFE];
        for unit in "a;\u{e9}".encode_utf16() {
            input.extend_from_slice(&unit.to_le_bytes());
        }
        let (data, outcome) = normalizer().normalize(input);
        assert_eq!(outcome, Normalization::Converted("UTF-16LE"));
        assert_eq!(data, "a;\u{e9}".as_bytes().to_vec());
    }

    #[test]
    fn test_converts_utf16_be_with_bom() {
        let mut input = vec![0xFE, 0xFF];
        for unit in "x,y".encode_utf16() {
            input.extend_from_slice(&unit.to_be_bytes());
        }
        let (data, outcome) = normalizer().normalize(input);
        assert_eq!(outcome, Normalization::Converted("UTF-16BE"));
        assert_eq!(data, b"x,y".to_vec());
    }

    #[test]
    fn test_converts_latin1() {
        let (data, outcome) = normalizer().normalize(b"name\ncaf\xe9\n".to_vec());
        assert_eq!(outcome, Normalization::Converted("windows-1252"));
        assert_eq!(data, "name\ncaf\u{e9}\n".as_bytes().to_vec());
    }

    #[test]
    fn test_utf8_left_unchanged() {
        let input = "caf\u{e9}".as_bytes().to_vec();
        let (data, outcome) = normalizer().normalize(input.clone());
        assert_eq!(outcome, Normalization::Unchanged);
        assert_eq!(data, input);
    }

    #[test]
    fn test_failed_conversion_keeps_original() {
        let normalizer = normalizer().with_transcoder(FailingTranscoder);
        let (data, outcome) = normalizer.normalize(b"caf\xe9".to_vec());
        assert_eq!(outcome, Normalization::Unchanged);
        assert_eq!(data, b"caf\xe9".to_vec());
    }

    #[test]
    fn test_without_detection_keeps_legacy_bytes() {
        let (data, outcome) = EncodingNormalizer::without_detection().normalize(b"caf\xe9".to_vec());
        assert_eq!(outcome, Normalization::Unchanged);
        assert_eq!(data, b"caf\xe9".to_vec());
    }
}
