// ============================================================
// ENCODING INFRASTRUCTURE LAYER
// ============================================================
// BOM sniffing, charset guessing and transcoding to UTF-8

mod charset;
mod normalizer;

pub use charset::{CandidateGuesser, CharsetGuesser, DetectedCharset, EncodingRsTranscoder, Transcoder};
pub use normalizer::{EncodingNormalizer, Normalization};
