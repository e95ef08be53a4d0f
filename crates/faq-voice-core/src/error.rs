/// Errors raised by the answer pipeline.
///
/// FAQ text and questions never fail: malformed text degrades to fewer items and
/// an unmatched question produces the fallback answer. The only failure is a
/// brand voice whose recognized fields have an unexpected shape.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid brand voice: {0}")]
    BrandVoice(String),
}
