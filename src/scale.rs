//! Geometric scaling of rasters.
//!
//! Nearest-neighbor only: QR modules must stay crisp, so no filter that
//! blends neighboring pixels is ever applied. Scaling is always isotropic,
//! preserving the square aspect of QR symbols.

use crate::raster::Raster;

/// Resize a raster to exact target dimensions with nearest-neighbor
/// sampling.
///
/// Each output pixel samples the source pixel whose cell contains it
/// (top-left convention). A no-op when dimensions already match.
pub fn resize_nearest(src: &Raster, new_width: usize, new_height: usize) -> Raster {
    if src.width() == new_width && src.height() == new_height {
        return src.clone();
    }

    let mut out = Vec::with_capacity(new_width * new_height);
    for y in 0..new_height {
        let src_y = (y * src.height() / new_height).min(src.height() - 1);
        for x in 0..new_width {
            let src_x = (x * src.width() / new_width).min(src.width() - 1);
            out.push(src.get(src_x, src_y));
        }
    }
    Raster::new(out, new_width, new_height)
}

/// Scale a raster uniformly so its side length becomes `target_side`.
///
/// A target of `0.0` means native resolution: the raster is returned
/// unchanged (scale factor 1.0). Otherwise the scale factor is
/// `target_side / width`, applied to both axes, and the output side is
/// `target_side` rounded to the nearest pixel.
pub fn scale_to_side(src: &Raster, target_side: f32) -> Raster {
    if target_side == 0.0 {
        return src.clone();
    }

    let scale = target_side / src.width() as f32;
    let new_width = ((src.width() as f32 * scale).round() as usize).max(1);
    let new_height = ((src.height() as f32 * scale).round() as usize).max(1);
    resize_nearest(src, new_width, new_height)
}
