//! Raster filter primitives.
//!
//! Six pure, total operations over [`Raster`]s. Every recoloring mode is a
//! composition of these and nothing else; no mode introduces per-pixel math
//! of its own (see [`crate::mode`]).
//!
//! Pixels use straight alpha. [`composite_add`] and [`composite_over`]
//! premultiply internally and convert back, so callers never see
//! premultiplied values.

use crate::color::{Rgb, Rgba};
use crate::raster::Raster;

/// Invert the RGB channels of every pixel; alpha is unchanged.
///
/// Turns a black-on-white symbol into white-on-black and back. Self-inverse.
pub fn invert(src: &Raster) -> Raster {
    src.map(|p| Rgba::new(1.0 - p.r, 1.0 - p.g, 1.0 - p.b, p.a))
}

/// Convert luminance to opacity: white stays opaque, black becomes clear.
///
/// The output alpha is the pixel's luminance scaled by its existing alpha;
/// output RGB is white. On a black-on-white symbol this erases the dark
/// modules and keeps the light background opaque; compose with [`invert`]
/// first to erase the background instead.
pub fn mask_to_alpha(src: &Raster) -> Raster {
    src.map(|p| Rgba::new(1.0, 1.0, 1.0, p.luminance() * p.a))
}

/// Scale every pixel's RGB by `color`, per channel; alpha is unchanged.
///
/// Equivalent to a diagonal 3x3 color matrix with `color` on the diagonal:
/// white pixels become exactly `color`, black pixels stay black.
pub fn colorize(src: &Raster, color: Rgb) -> Raster {
    src.map(|p| Rgba::new(p.r * color.r, p.g * color.g, p.b * color.b, p.a))
}

/// Produce an opaque raster of uniform `color` with the given extent.
pub fn solid_fill(color: Rgb, width: usize, height: usize) -> Raster {
    Raster::filled(width, height, Rgba::opaque(color))
}

/// Addition-composite `top` over `bottom`, sized to `top`'s extent.
///
/// Premultiplied channels are summed and clamped to 1.0. Where `bottom`
/// does not cover `top`'s extent it contributes transparent black. Used to
/// place a solid backdrop under a masked foreground: fully transparent
/// foreground pixels pass the backdrop through untouched, fully opaque
/// white ones saturate to white.
pub fn composite_add(top: &Raster, bottom: &Raster) -> Raster {
    let mut out = Vec::with_capacity(top.width() * top.height());
    for y in 0..top.height() {
        for x in 0..top.width() {
            let t = top.get(x, y);
            let b = if x < bottom.width() && y < bottom.height() {
                bottom.get(x, y)
            } else {
                Rgba::new(0.0, 0.0, 0.0, 0.0)
            };

            let a = (t.a + b.a).min(1.0);
            let pr = (t.r * t.a + b.r * b.a).min(1.0);
            let pg = (t.g * t.a + b.g * b.a).min(1.0);
            let pb = (t.b * t.a + b.b * b.a).min(1.0);
            out.push(if a > 0.0 {
                Rgba::new((pr / a).min(1.0), (pg / a).min(1.0), (pb / a).min(1.0), a)
            } else {
                Rgba::new(0.0, 0.0, 0.0, 0.0)
            });
        }
    }
    Raster::new(out, top.width(), top.height())
}

/// Source-over composite `top` onto `bottom` with `top`'s origin placed at
/// `(dx, dy)` in `bottom` coordinates. Output has `bottom`'s extent; parts
/// of `top` falling outside it are clipped.
pub fn composite_over(top: &Raster, bottom: &Raster, dx: isize, dy: isize) -> Raster {
    let mut out = bottom.clone();
    for ty in 0..top.height() {
        let by = ty as isize + dy;
        if by < 0 || by as usize >= bottom.height() {
            continue;
        }
        for tx in 0..top.width() {
            let bx = tx as isize + dx;
            if bx < 0 || bx as usize >= bottom.width() {
                continue;
            }

            let t = top.get(tx, ty);
            let b = bottom.get(bx as usize, by as usize);
            let a = t.a + b.a * (1.0 - t.a);
            let pixel = if a > 0.0 {
                Rgba::new(
                    (t.r * t.a + b.r * b.a * (1.0 - t.a)) / a,
                    (t.g * t.a + b.g * b.a * (1.0 - t.a)) / a,
                    (t.b * t.a + b.b * b.a * (1.0 - t.a)) / a,
                    a,
                )
            } else {
                Rgba::new(0.0, 0.0, 0.0, 0.0)
            };
            out.set(bx as usize, by as usize, pixel);
        }
    }
    out
}

/// Offsets that center `overlay` on `base`: `(base - overlay) / 2` per axis.
pub fn centered_offset(overlay: &Raster, base: &Raster) -> (isize, isize) {
    (
        (base.width() as isize - overlay.width() as isize) / 2,
        (base.height() as isize - overlay.height() as isize) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// 2x2: black module top-left, white elsewhere.
    fn module_square() -> Raster {
        let mut raster = Raster::filled(2, 2, WHITE);
        raster.set(0, 0, BLACK);
        raster
    }

    #[test]
    fn test_invert_is_self_inverse() {
        let src = module_square();
        assert_eq!(invert(&invert(&src)), src);
        assert_eq!(invert(&src).get(0, 0), WHITE);
        assert_eq!(invert(&src).get(1, 0), BLACK);
    }

    #[test]
    fn test_invert_preserves_alpha() {
        let src = Raster::filled(1, 1, Rgba::new(0.25, 0.5, 0.75, 0.5));
        let out = invert(&src);
        assert_eq!(out.get(0, 0), Rgba::new(0.75, 0.5, 0.25, 0.5));
    }

    #[test]
    fn test_mask_to_alpha_erases_black_keeps_white() {
        let out = mask_to_alpha(&module_square());
        // Black module is fully transparent, background opaque white.
        assert_eq!(out.get(0, 0).a, 0.0);
        assert_eq!(out.get(1, 0), WHITE);
    }

    #[test]
    fn test_mask_to_alpha_idempotent_on_alpha() {
        let once = mask_to_alpha(&module_square());
        let twice = mask_to_alpha(&once);
        for (p1, p2) in once.pixels().iter().zip(twice.pixels()) {
            assert_eq!(p1.a, p2.a);
        }
    }

    #[test]
    fn test_colorize_replaces_white_scales_rest() {
        let color = Rgb::new(0.2, 0.6, 0.8);
        let out = colorize(&module_square(), color);
        // White becomes exactly the color, black stays black.
        assert_eq!(out.get(1, 1), Rgba::opaque(color));
        assert_eq!(out.get(0, 0), BLACK);

        let gray = Raster::filled(1, 1, Rgba::new(0.5, 0.5, 0.5, 1.0));
        let scaled = colorize(&gray, color);
        assert_eq!(scaled.get(0, 0), Rgba::new(0.1, 0.3, 0.4, 1.0));
    }

    #[test]
    fn test_solid_fill_extent_and_color() {
        let fill = solid_fill(Rgb::new(1.0, 0.0, 0.0), 3, 2);
        assert_eq!(fill.width(), 3);
        assert_eq!(fill.height(), 2);
        assert!(fill
            .pixels()
            .iter()
            .all(|&p| p == Rgba::new(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_composite_add_backdrop_under_mask() {
        // Masked symbol: transparent where the module was, opaque white
        // background. Adding a colored backdrop must show the color only
        // through the transparent holes.
        let masked = mask_to_alpha(&module_square());
        let color = Rgb::new(0.2, 0.6, 0.8);
        let backdrop = solid_fill(color, 2, 2);
        let out = composite_add(&masked, &backdrop);

        assert_eq!(out.get(0, 0), Rgba::opaque(color));
        assert_eq!(out.get(1, 1), WHITE); // 1 + c clamps to white
        assert!(out.pixels().iter().all(|p| p.a == 1.0));
    }

    #[test]
    fn test_composite_add_extends_short_bottom() {
        let top = Raster::filled(2, 2, Rgba::new(0.5, 0.5, 0.5, 1.0));
        let bottom = solid_fill(Rgb::new(1.0, 1.0, 1.0), 1, 1);
        let out = composite_add(&top, &bottom);
        assert_eq!(out.width(), 2);
        // Outside the bottom extent only the top contributes.
        assert_eq!(out.get(1, 1), Rgba::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_composite_over_opaque_top_wins() {
        let top = Raster::filled(1, 1, BLACK);
        let bottom = Raster::filled(3, 3, WHITE);
        let out = composite_over(&top, &bottom, 1, 1);
        assert_eq!(out.get(1, 1), BLACK);
        assert_eq!(out.get(0, 0), WHITE);
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn test_composite_over_transparent_top_is_noop() {
        let top = Raster::filled(2, 2, Rgba::new(1.0, 0.0, 0.0, 0.0));
        let bottom = module_square();
        let out = composite_over(&top, &bottom, 0, 0);
        assert_eq!(out, bottom);
    }

    #[test]
    fn test_composite_over_blends_partial_alpha() {
        let top = Raster::filled(1, 1, Rgba::new(1.0, 0.0, 0.0, 0.5));
        let bottom = Raster::filled(1, 1, WHITE);
        let out = composite_over(&top, &bottom, 0, 0);
        let p = out.get(0, 0);
        assert!((p.r - 1.0).abs() < 1e-6);
        assert!((p.g - 0.5).abs() < 1e-6);
        assert_eq!(p.a, 1.0);
    }

    #[test]
    fn test_composite_over_clips_out_of_bounds() {
        let top = Raster::filled(4, 4, BLACK);
        let bottom = Raster::filled(2, 2, WHITE);
        let out = composite_over(&top, &bottom, -1, -1);
        assert_eq!(out.width(), 2);
        assert!(out.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_centered_offset() {
        let base = Raster::filled(10, 10, WHITE);
        let overlay = Raster::filled(4, 4, BLACK);
        assert_eq!(centered_offset(&overlay, &base), (3, 3));

        let tall = Raster::filled(2, 12, BLACK);
        assert_eq!(centered_offset(&tall, &base), (4, -1));
    }
}
