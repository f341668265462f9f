use thiserror::Error;

/// Typed failure returned by a render call.
///
/// Every variant is terminal for that render: the configuration must change
/// (shorter text, higher correction level, valid logo bytes) before a retry
/// can succeed. No variant is ever converted to a blank placeholder image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The payload contains a character outside ISO-8859-1.
    #[error("text contains a character not representable in ISO-8859-1: {0:?}")]
    UnencodableText(char),

    /// The QR symbol encoder rejected the payload (for example, too long
    /// for the chosen correction level).
    #[error("QR encoding failed: {0}")]
    Encoding(String),

    /// Logo bytes were supplied but do not decode to a usable raster.
    #[error("logo decode error: {0}")]
    LogoDecode(String),

    /// PNG serialization of an output raster failed.
    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
