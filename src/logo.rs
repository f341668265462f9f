//! Optional logo overlay, centered on the symbol.
//!
//! The logo is merged after scaling and before mode resolution, so its own
//! colors are never touched by recoloring. Occluded modules are recovered
//! by QR error correction; callers wanting a logo should prefer level Q or
//! H.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::filter;
use crate::raster::{decode_png, Raster};
use crate::scale::resize_nearest;

/// The logo is scaled so its width is this fraction of the symbol width.
const LOGO_DIVISOR: f32 = 2.5;

/// A logo to overlay, either already decoded or as PNG bytes.
///
/// PNG bytes are decoded at render time; undecodable bytes fail that
/// render with [`RenderError::LogoDecode`] rather than being skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Logo {
    /// An already-decoded raster.
    Raster(Raster),
    /// PNG bytes, decoded at render time.
    Png(Vec<u8>),
}

impl Logo {
    fn decode(&self) -> Result<Raster, RenderError> {
        let raster = match self {
            Logo::Raster(raster) => raster.clone(),
            Logo::Png(bytes) => decode_png(bytes)?,
        };
        if raster.is_empty() {
            return Err(RenderError::LogoDecode(
                "logo raster has no pixels".to_string(),
            ));
        }
        Ok(raster)
    }
}

/// Overlay `logo` centered on `qr`, scaled to `qr.width() / 2.5`.
///
/// `None` passes the symbol through unchanged. The logo keeps its aspect
/// ratio; resampling is nearest-neighbor like the symbol scaler.
pub fn merge_logo(qr: &Raster, logo: Option<&Logo>) -> Result<Raster, RenderError> {
    let Some(logo) = logo else {
        return Ok(qr.clone());
    };

    let decoded = logo.decode()?;
    let target_width = ((qr.width() as f32 / LOGO_DIVISOR).round() as usize).max(1);
    let scale = target_width as f32 / decoded.width() as f32;
    let target_height = ((decoded.height() as f32 * scale).round() as usize).max(1);
    let scaled = resize_nearest(&decoded, target_width, target_height);

    tracing::debug!(
        logo_width = target_width,
        logo_height = target_height,
        symbol_side = qr.width(),
        "overlaying logo"
    );

    let (dx, dy) = filter::centered_offset(&scaled, qr);
    Ok(filter::composite_over(&scaled, qr, dx, dy))
}
