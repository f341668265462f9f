//! QrTinter builder and the render pipeline.
//!
//! [`QrTinter`] wraps a [`Config`] behind fluent configuration;
//! [`render_config`] is the pipeline itself, a pure function from
//! configuration to raster.

use crate::api::Config;
use crate::color::Rgb;
use crate::encode::{self, Ecc};
use crate::error::RenderError;
use crate::logo::{merge_logo, Logo};
use crate::mode::{resolve, Mode};
use crate::raster::{encode_png, Raster};
use crate::scale::scale_to_side;

/// Render a configuration to a raster.
///
/// Pure with respect to the configuration snapshot: the same `Config`
/// always yields a bit-identical [`Raster`]. The pipeline is
/// prepare payload → ISO-8859-1 bytes → QR symbol → scale → logo merge →
/// mode resolution; nothing is cached between calls.
pub fn render_config(config: &Config) -> Result<Raster, RenderError> {
    let prepared = encode::prepare(
        &config.text,
        config.use_custom_url,
        &config.custom_url_scheme,
    );
    let payload = encode::to_latin1(&prepared)?;
    tracing::debug!(
        bytes = payload.len(),
        correction = ?config.correction,
        "encoding payload"
    );

    let symbol = encode::encode(&payload, config.correction)?;
    let scaled = scale_to_side(&symbol, config.target_side);
    let merged = merge_logo(&scaled, config.logo.as_ref())?;

    tracing::debug!(mode = ?config.mode, side = merged.width(), "resolving mode");
    Ok(resolve(&merged, config.mode, config.foreground))
}

/// High-level QR rendering builder.
///
/// Wraps a [`Config`] with consume-and-return setters. The builder is
/// reusable: [`render()`](Self::render) takes `&self`, so one `QrTinter`
/// can render many times (and stays deterministic each time).
///
/// # Example
///
/// ```
/// use qr_tint::{Mode, QrTinter};
///
/// let tinter = QrTinter::new()
///     .text("hello")
///     .target_side(100.0)
///     .mode(Mode::WhiteOnBlack);
///
/// let image = tinter.render().unwrap();
/// assert_eq!(image.width(), 100);
/// assert_eq!(image.height(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QrTinter {
    config: Config,
}

impl QrTinter {
    /// Create a builder with the default configuration: "hello", level Q,
    /// native resolution, black-on-white, no logo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from an existing configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The message to encode.
    #[inline]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.config.text = text.into();
        self
    }

    /// Wrap the message as `<scheme>://<percent-encoded text>`.
    #[inline]
    pub fn custom_url(mut self, scheme: impl Into<String>) -> Self {
        self.config.custom_url_scheme = scheme.into();
        self.config.use_custom_url = true;
        self
    }

    /// Enable or disable custom-URL wrapping without changing the scheme.
    #[inline]
    pub fn use_custom_url(mut self, enabled: bool) -> Self {
        self.config.use_custom_url = enabled;
        self
    }

    /// Set the error-correction level.
    #[inline]
    pub fn correction(mut self, correction: Ecc) -> Self {
        self.config.correction = correction;
        self
    }

    /// Set the output side length in pixels; `0.0` keeps native resolution.
    #[inline]
    pub fn target_side(mut self, side: f32) -> Self {
        self.config.target_side = side;
        self
    }

    /// Set the recoloring mode.
    #[inline]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the foreground color used by the "colored" modes.
    #[inline]
    pub fn foreground(mut self, color: Rgb) -> Self {
        self.config.foreground = color;
        self
    }

    /// Overlay a logo centered on the symbol.
    #[inline]
    pub fn logo(mut self, logo: Logo) -> Self {
        self.config.logo = Some(logo);
        self
    }

    /// The current configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the current configuration to a raster.
    pub fn render(&self) -> Result<Raster, RenderError> {
        render_config(&self.config)
    }

    /// Render and serialize to 8-bit RGBA PNG bytes.
    pub fn render_png(&self) -> Result<Vec<u8>, RenderError> {
        encode_png(&self.render()?)
    }
}
