//! Raster image buffer and PNG I/O.
//!
//! [`Raster`] is the pixel buffer every pipeline stage consumes and
//! produces; [`decode_png`]/[`encode_png`] convert between rasters and
//! in-memory PNG bytes at the crate boundary.

mod png_io;
#[allow(clippy::module_inception)]
mod raster;

pub use png_io::{decode_png, encode_png};
pub use raster::Raster;
