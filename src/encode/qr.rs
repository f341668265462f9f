//! QR symbol generation.
//!
//! Thin wrapper over `fast_qr`: payload bytes and a correction level go in,
//! a black-on-white [`Raster`] comes out, one pixel per module with a
//! one-module quiet margin on each side. The symbol side length is chosen
//! by the encoder from payload size and correction level; callers control
//! only the final raster side, via the scaler.

use fast_qr::ECL;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::RenderError;
use crate::raster::Raster;

/// Quiet margin, in modules, around the symbol on every side.
const QUIET_ZONE: usize = 1;

/// QR error-correction level.
///
/// Higher levels survive more damage (and logo occlusion) at the cost of a
/// larger symbol for the same payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ecc {
    /// Recovers ~7% of damaged modules.
    L,
    /// Recovers ~15% of damaged modules.
    M,
    /// Recovers ~25% of damaged modules.
    Q,
    /// Recovers ~30% of damaged modules.
    H,
}

impl Ecc {
    /// All levels, weakest first.
    pub const ALL: [Ecc; 4] = [Ecc::L, Ecc::M, Ecc::Q, Ecc::H];

    /// Nominal recoverable damage, in percent.
    pub fn recovery_pct(self) -> u8 {
        match self {
            Ecc::L => 7,
            Ecc::M => 15,
            Ecc::Q => 25,
            Ecc::H => 30,
        }
    }

    fn to_ecl(self) -> ECL {
        match self {
            Ecc::L => ECL::L,
            Ecc::M => ECL::M,
            Ecc::Q => ECL::Q,
            Ecc::H => ECL::H,
        }
    }
}

/// Encode payload bytes into a black-on-white raster at native resolution.
///
/// Output side is `symbol_side + 2 * QUIET_ZONE` pixels (a 21-module
/// symbol becomes a 23x23 raster). Fully opaque: black modules on a white
/// field. Encoder rejection (payload too large for the level, empty input)
/// surfaces as [`RenderError::Encoding`].
pub fn encode(payload: &[u8], correction: Ecc) -> Result<Raster, RenderError> {
    let qr = fast_qr::QRBuilder::new(payload.to_vec())
        .ecl(correction.to_ecl())
        .build()
        .map_err(|e| RenderError::Encoding(format!("{e}")))?;

    let size = qr.size;
    let side = size + 2 * QUIET_ZONE;
    tracing::debug!(modules = size, side, "encoded QR symbol");

    let black = Rgba::new(0.0, 0.0, 0.0, 1.0);
    let white = Rgba::new(1.0, 1.0, 1.0, 1.0);
    let mut raster = Raster::filled(side, side, white);
    for row in 0..size {
        for col in 0..size {
            if qr[row][col].value() {
                raster.set(col + QUIET_ZONE, row + QUIET_ZONE, black);
            }
        }
    }
    Ok(raster)
}
