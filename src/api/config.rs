//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::encode::Ecc;
use crate::logo::Logo;
use crate::mode::Mode;

/// Everything a render needs, as a plain value.
///
/// Mutate fields freely and call [`render_config`](crate::render_config)
/// (or [`QrTinter::render`](crate::QrTinter::render)) when ready. Nothing
/// re-renders implicitly on mutation, and the render reads an immutable
/// snapshot of this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The message to encode.
    pub text: String,

    /// Wrap the message as `<scheme>://<percent-encoded text>` before
    /// encoding.
    pub use_custom_url: bool,

    /// Scheme used when `use_custom_url` is set.
    pub custom_url_scheme: String,

    /// QR error-correction level.
    pub correction: Ecc,

    /// Final raster side length in pixels; `0.0` keeps the encoder's
    /// native resolution (one pixel per module).
    pub target_side: f32,

    /// Recoloring mode applied to the black-on-white symbol.
    pub mode: Mode,

    /// Foreground color consulted by the "colored" modes.
    pub foreground: Rgb,

    /// Optional logo overlaid centered on the symbol.
    pub logo: Option<Logo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: "hello".to_string(),
            use_custom_url: false,
            custom_url_scheme: "qrtint".to_string(),
            correction: Ecc::Q,
            target_side: 0.0,
            mode: Mode::BlackOnWhite,
            // sky blue
            foreground: Rgb::new(0.206, 0.599, 0.860),
            logo: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.text, "hello");
        assert_eq!(config.correction, Ecc::Q);
        assert_eq!(config.correction.recovery_pct(), 25);
        assert_eq!(config.target_side, 0.0);
        assert!(!config.use_custom_url);
        assert_eq!(config.mode, Mode::BlackOnWhite);
        assert!(config.logo.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut config = Config {
            text: "Bye".to_string(),
            correction: Ecc::H,
            target_side: 200.0,
            mode: Mode::ClearOnWhite,
            ..Config::default()
        };
        config.use_custom_url = true;

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"text":"ping"}"#).unwrap();
        assert_eq!(config.text, "ping");
        assert_eq!(config.correction, Ecc::Q);
        assert_eq!(config.mode, Mode::BlackOnWhite);
    }
}
