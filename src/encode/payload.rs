//! Payload preparation: URL wrapping, percent-encoding, byte conversion.
//!
//! QR byte mode carries ISO-8859-1, so the prepared string is converted to
//! single-byte characters with an explicit failure for anything outside
//! that repertoire: no transliteration, no lossy fallback.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::RenderError;

/// Characters percent-encoded in the message: controls plus everything a
/// URL host component must escape. Non-ASCII is always encoded as UTF-8
/// percent escapes.
const HOST_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Wrap a message as a custom-scheme URL with a percent-encoded payload.
///
/// # Example
///
/// ```
/// use qr_tint::encode::custom_url;
///
/// assert_eq!(
///     custom_url("textreader", "hello my friends"),
///     "textreader://hello%20my%20friends"
/// );
/// ```
pub fn custom_url(scheme: &str, text: &str) -> String {
    format!("{scheme}://{}", utf8_percent_encode(text, HOST_UNSAFE))
}

/// The string actually fed to the QR encoder: either the raw text or the
/// custom-scheme URL form.
pub fn prepare(text: &str, use_custom_url: bool, scheme: &str) -> String {
    if use_custom_url {
        custom_url(scheme, text)
    } else {
        text.to_string()
    }
}

/// Convert the prepared string to ISO-8859-1 bytes.
///
/// Every Unicode scalar up to U+00FF maps to exactly one Latin-1 byte; the
/// first character beyond that yields [`RenderError::UnencodableText`].
pub fn to_latin1(text: &str) -> Result<Vec<u8>, RenderError> {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if cp <= 0xFF {
                Ok(cp as u8)
            } else {
                Err(RenderError::UnencodableText(c))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_custom_url_ascii() {
        assert_eq!(
            custom_url("textreader", "hello my friends"),
            "textreader://hello%20my%20friends"
        );
    }

    #[test]
    fn test_custom_url_non_ascii() {
        assert_eq!(
            custom_url("textreader", "Accentué"),
            "textreader://Accentu%C3%A9"
        );
    }

    #[test]
    fn test_custom_url_round_trip() {
        for message in ["hello my friends", "Accentué", "ça va? 👍"] {
            let url = custom_url("textreader", message);
            let (scheme, encoded) = url.split_once("://").unwrap();
            assert_eq!(scheme, "textreader");
            let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
            assert_eq!(decoded, message);
        }
    }

    #[test]
    fn test_prepare_plain_passthrough() {
        assert_eq!(prepare("hello", false, "textreader"), "hello");
    }

    #[test]
    fn test_prepare_url_mode() {
        assert_eq!(
            prepare("hello my friends", true, "textreader"),
            "textreader://hello%20my%20friends"
        );
    }

    #[test]
    fn test_to_latin1_ascii_and_latin1() {
        assert_eq!(to_latin1("hello").unwrap(), b"hello");
        // é is U+00E9, a single Latin-1 byte
        assert_eq!(to_latin1("café").unwrap(), vec![0x63, 0x61, 0x66, 0xE9]);
    }

    #[test]
    fn test_to_latin1_rejects_wide_characters() {
        let result = to_latin1("hello 👍");
        assert!(matches!(
            result,
            Err(RenderError::UnencodableText('👍'))
        ));

        // The same text survives once percent-encoded: the escapes are ASCII.
        let encoded = custom_url("textreader", "hello 👍");
        assert!(to_latin1(&encoded).is_ok());
    }
}
