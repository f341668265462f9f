//! Recoloring modes and their resolution.
//!
//! A [`Mode`] names a foreground/background color-and-transparency
//! combination for the rendered symbol. Each mode is defined as a constant
//! ordered list of primitive [`Step`]s over the black-on-white input (data,
//! not a branch tree), and [`resolve`] is the single interpreter that runs
//! the list. Step order matters: `ClearOnWhite` (mask only) is not
//! `WhiteOnClear` (invert, then mask).

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::filter;
use crate::raster::Raster;

/// One primitive operation in a mode's step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Invert RGB channels, keep alpha.
    Invert,
    /// Luminance becomes opacity; RGB becomes white.
    MaskToAlpha,
    /// Scale RGB per channel by the foreground color.
    Colorize,
    /// Addition-composite over a solid foreground-colored backdrop.
    ColoredBackdrop,
}

/// The twelve recoloring modes.
///
/// Names read foreground-on-background: `ClearOnBlack` keeps the modules
/// transparent against an opaque black background. "Colored" refers to the
/// configured foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    BlackOnClear,
    BlackOnColored,
    BlackOnWhite,
    ClearOnBlack,
    ClearOnColored,
    ClearOnWhite,
    ColoredOnBlack,
    ColoredOnClear,
    ColoredOnWhite,
    WhiteOnBlack,
    WhiteOnClear,
    WhiteOnColored,
}

impl Mode {
    /// All modes, in name order.
    pub const ALL: [Mode; 12] = [
        Mode::BlackOnClear,
        Mode::BlackOnColored,
        Mode::BlackOnWhite,
        Mode::ClearOnBlack,
        Mode::ClearOnColored,
        Mode::ClearOnWhite,
        Mode::ColoredOnBlack,
        Mode::ColoredOnClear,
        Mode::ColoredOnWhite,
        Mode::WhiteOnBlack,
        Mode::WhiteOnClear,
        Mode::WhiteOnColored,
    ];

    /// The primitive steps this mode applies to a black-on-white raster,
    /// in execution order.
    pub fn steps(self) -> &'static [Step] {
        use Step::*;
        match self {
            Mode::BlackOnWhite => &[],
            Mode::WhiteOnBlack => &[Invert],
            Mode::BlackOnClear => &[Invert, MaskToAlpha, Invert],
            Mode::ClearOnBlack => &[MaskToAlpha, Invert],
            Mode::ClearOnWhite => &[MaskToAlpha],
            Mode::WhiteOnClear => &[Invert, MaskToAlpha],
            Mode::BlackOnColored => &[Colorize],
            Mode::ColoredOnBlack => &[Invert, Colorize],
            Mode::ColoredOnClear => &[Invert, MaskToAlpha, Colorize],
            Mode::ClearOnColored => &[MaskToAlpha, Colorize],
            Mode::ColoredOnWhite => &[MaskToAlpha, ColoredBackdrop],
            Mode::WhiteOnColored => &[Invert, MaskToAlpha, ColoredBackdrop],
        }
    }
}

/// Apply `mode`'s step list to a black-on-white raster.
///
/// Total: every step is a total filter primitive, so resolution never
/// fails. `foreground` is consulted only by the `Colorize` and
/// `ColoredBackdrop` steps.
pub fn resolve(input: &Raster, mode: Mode, foreground: Rgb) -> Raster {
    let mut image = input.clone();
    for step in mode.steps() {
        image = match step {
            Step::Invert => filter::invert(&image),
            Step::MaskToAlpha => filter::mask_to_alpha(&image),
            Step::Colorize => filter::colorize(&image, foreground),
            Step::ColoredBackdrop => {
                let backdrop = filter::solid_fill(foreground, image.width(), image.height());
                filter::composite_add(&image, &backdrop)
            }
        };
    }
    image
}
