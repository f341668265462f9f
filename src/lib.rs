//! qr-tint: QR code rendering with deterministic recoloring.
//!
//! Encodes text into a QR symbol, rasterizes it black-on-white, and then
//! applies one of twelve recoloring modes, each an ordered composition of
//! a small set of pixel filters (invert, luminance-to-alpha masking, color
//! substitution, backdrop compositing), with optional scaling and a
//! centered logo overlay.
//!
//! # Quick Start
//!
//! The [`QrTinter`] builder is the primary entry point:
//!
//! ```
//! use qr_tint::{Mode, QrTinter, Rgb};
//!
//! let image = QrTinter::new()
//!     .text("hello")
//!     .target_side(100.0)
//!     .mode(Mode::ColoredOnWhite)
//!     .foreground(Rgb::from_u8(52, 153, 219))
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(image.width(), 100);
//! assert_eq!(image.height(), 100);
//! ```
//!
//! Or mutate a plain [`Config`] and render it explicitly:
//!
//! ```
//! use qr_tint::{render_config, Config, Mode};
//!
//! let mut config = Config::default();
//! config.text = "hello my friends".to_string();
//! config.mode = Mode::WhiteOnBlack;
//!
//! let image = render_config(&config).unwrap();
//! assert_eq!(image.width(), image.height());
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Config
//!   |
//!   v
//! payload preparation      (optional scheme://percent-encoded wrapping,
//!   |                       ISO-8859-1 bytes; fails on wide characters)
//!   v
//! QR symbol                (fast_qr; side chosen by payload + correction)
//!   |
//!   v
//! scale                    (nearest-neighbor, isotropic; 0 = native)
//!   |
//!   v
//! logo merge               (centered source-over at side/2.5, optional)
//!   |
//!   v
//! mode resolution          (static step table over filter primitives)
//!   |
//!   v
//! Raster                   (RGBA, straight alpha)
//! ```
//!
//! Rendering is pure and synchronous: the same configuration produces a
//! bit-identical raster, every call recomputes from scratch, and
//! independent renders can run on any number of threads with no
//! coordination.
//!
//! # Errors
//!
//! Failures are typed and terminal per render ([`RenderError`]): text
//! outside ISO-8859-1, payloads the symbol encoder rejects, and logo
//! bytes that do not decode. There are no placeholder images and no
//! silent fallbacks.

pub mod api;
pub mod color;
pub mod encode;
pub mod error;
pub mod filter;
pub mod logo;
pub mod mode;
pub mod raster;
pub mod scale;


pub use api::{render_config, Config, QrTinter};
pub use color::{ParseColorError, Rgb, Rgba};
pub use encode::Ecc;
pub use error::RenderError;
pub use logo::Logo;
pub use mode::{Mode, Step};
pub use raster::Raster;
