//! PNG decode and encode for rasters.
//!
//! Decode is the entry point for logo bytes; encode is an output
//! convenience for callers that want a file-ready buffer. Both operate on
//! in-memory byte slices only.

use std::io::Cursor;

use crate::color::Rgba;
use crate::error::RenderError;
use crate::raster::Raster;

/// Decode PNG bytes into a [`Raster`].
///
/// Sub-8-bit, paletted and 16-bit images are normalized to 8-bit channels
/// before conversion. Undecodable bytes yield [`RenderError::LogoDecode`].
pub fn decode_png(bytes: &[u8]) -> Result<Raster, RenderError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::LogoDecode(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::LogoDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let pixels: Vec<Rgba> = match info.color_type {
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| Rgba::from_u8(p[0], p[1], p[2], p[3]))
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|p| Rgba::from_u8(p[0], p[1], p[2], 255))
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| Rgba::from_u8(p[0], p[0], p[0], p[1]))
            .collect(),
        png::ColorType::Grayscale => data
            .iter()
            .map(|&v| Rgba::from_u8(v, v, v, 255))
            .collect(),
        other => {
            return Err(RenderError::LogoDecode(format!(
                "unsupported PNG color type {other:?}"
            )))
        }
    };

    Ok(Raster::new(
        pixels,
        info.width as usize,
        info.height as usize,
    ))
}

/// Encode a [`Raster`] as 8-bit RGBA PNG bytes.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder =
            png::Encoder::new(&mut buf, raster.width() as u32, raster.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&raster.to_rgba_bytes())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let mut raster = Raster::filled(2, 2, Rgba::from_u8(255, 255, 255, 255));
        raster.set(0, 0, Rgba::from_u8(0, 0, 0, 255));
        raster.set(1, 1, Rgba::from_u8(52, 153, 219, 128));

        let bytes = encode_png(&raster).unwrap();
        let decoded = decode_png(&bytes).unwrap();

        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.get(0, 0).to_bytes(), [0, 0, 0, 255]);
        assert_eq!(decoded.get(1, 1).to_bytes(), [52, 153, 219, 128]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode_png(b"definitely not a PNG");
        assert!(matches!(result, Err(RenderError::LogoDecode(_))));
    }

    #[test]
    fn test_decode_rejects_truncated_png() {
        let raster = Raster::filled(4, 4, Rgba::from_u8(10, 20, 30, 255));
        let bytes = encode_png(&raster).unwrap();
        let result = decode_png(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(RenderError::LogoDecode(_))));
    }
}
