//! Bitmap encoding.

use super::error::ExportResult;
use super::format::ExportFormat;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, RgbaImage};

/// Encode `bitmap` as PNG (lossless) or JPEG at `quality` (0.1 ..= 1.0).
///
/// JPEG has no alpha channel; transparent pixels are composited over white.
/// Returns `None` for formats that are not produced from a bitmap.
pub fn encode_bitmap(
    bitmap: &RgbaImage,
    format: ExportFormat,
    quality: f32,
) -> ExportResult<Option<Vec<u8>>> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(
                bitmap.as_raw(),
                bitmap.width(),
                bitmap.height(),
                ExtendedColorType::Rgba8,
            )?;
        }
        ExportFormat::Jpeg => {
            let flattened = flatten_on_white(bitmap);
            JpegEncoder::new_with_quality(&mut bytes, jpeg_quality(quality)).write_image(
                flattened.as_raw(),
                flattened.width(),
                flattened.height(),
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Pdf => return Ok(None),
    }
    Ok(Some(bytes))
}

/// Map a 0.1 ..= 1.0 quality factor to the encoder's 1 ..= 100 scale
pub fn jpeg_quality(quality: f32) -> u8 {
    let q = if quality.is_finite() { quality } else { 1.0 };
    (q.clamp(0.01, 1.0) * 100.0).round() as u8
}

fn flatten_on_white(bitmap: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(bitmap.width(), bitmap.height(), |x, y| {
        let [r, g, b, a] = bitmap.get_pixel(x, y).0;
        let blend = |c: u8| -> u8 {
            let a = a as u32;
            ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}
