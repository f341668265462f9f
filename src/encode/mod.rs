//! Text-to-QR-symbol encoding.
//!
//! Two stages: payload preparation (optional custom-URL wrapping with
//! percent-encoding, then ISO-8859-1 byte conversion) and symbol
//! generation via `fast_qr`, emitted as a black-on-white [`Raster`](crate::raster::Raster).

mod payload;
mod qr;

pub use payload::{custom_url, prepare, to_latin1};
pub use qr::{encode, Ecc};
