//! Face-region masking on garment images.
//!
//! The detector returns a normalized bounding box; this module paints the
//! expanded box over the image in neutral grey. Grey diffuses into the
//! generated lighting better than black, and the expansion covers hair and
//! neck spill the detector tends to miss.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{GenericImage, ImageFormat, Rgba};
use tracing::debug;

use crate::normalize::{decode, EncodedImage};
use crate::ImagingError;

/// Fractional expansion applied to each side of a detected box.
pub const MASK_EXPANSION: f64 = 0.1;

/// Neutral grey mask fill (#BBBBBB).
pub const MASK_COLOR: [u8; 3] = [0xBB, 0xBB, 0xBB];

/// JPEG quality used when re-encoding a masked JPEG.
const MASKED_JPEG_QUALITY: u8 = 95;

/// A bounding box in normalized [0, 1] coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl NormalizedBox {
    /// Build from detector output ordered `[ymin, xmin, ymax, xmax]`.
    pub fn from_detector(coords: [f64; 4]) -> Self {
        Self {
            top: coords[0],
            left: coords[1],
            bottom: coords[2],
            right: coords[3],
        }
    }
}

/// Expand a box by [`MASK_EXPANSION`] of its own size on every side,
/// clamped to the unit square.
pub fn expand_box(b: NormalizedBox) -> NormalizedBox {
    let w = b.right - b.left;
    let h = b.bottom - b.top;
    NormalizedBox {
        top: (b.top - h * MASK_EXPANSION).clamp(0.0, 1.0),
        left: (b.left - w * MASK_EXPANSION).clamp(0.0, 1.0),
        bottom: (b.bottom + h * MASK_EXPANSION).clamp(0.0, 1.0),
        right: (b.right + w * MASK_EXPANSION).clamp(0.0, 1.0),
    }
}

/// Paint the expanded box over the image in [`MASK_COLOR`].
///
/// The source encoding is preserved: PNG stays PNG (lossless), everything
/// else re-encodes as JPEG. Fails only on undecodable input; callers treat
/// that as "send the original" since masking is best-effort.
pub fn mask_region(image: &EncodedImage, b: NormalizedBox) -> Result<EncodedImage, ImagingError> {
    let mut canvas = decode(&image.data)?;
    let (width, height) = (canvas.width(), canvas.height());

    let e = expand_box(b);
    let x0 = (e.left * width as f64).floor().max(0.0) as u32;
    let y0 = (e.top * height as f64).floor().max(0.0) as u32;
    let x1 = ((e.right * width as f64).ceil() as u32).min(width);
    let y1 = ((e.bottom * height as f64).ceil() as u32).min(height);
    debug!(x0, y0, x1, y1, "masking face region");

    let fill = Rgba([MASK_COLOR[0], MASK_COLOR[1], MASK_COLOR[2], 255]);
    for y in y0..y1 {
        for x in x0..x1 {
            canvas.put_pixel(x, y, fill);
        }
    }

    let source_is_png = image::guess_format(&image.data)
        .map(|f| f == ImageFormat::Png)
        .unwrap_or(false);

    let mut out = Vec::new();
    if source_is_png {
        canvas.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
        Ok(EncodedImage { mime_type: "image/png".to_string(), data: out })
    } else {
        JpegEncoder::new_with_quality(&mut out, MASKED_JPEG_QUALITY)
            .encode_image(&canvas.to_rgb8())?;
        Ok(EncodedImage::jpeg(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn png_image(width: u32, height: u32, color: Rgb<u8>) -> EncodedImage {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color))
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .expect("png encode");
        EncodedImage { mime_type: "image/png".to_string(), data: buf }
    }

    #[test]
    fn expansion_grows_each_side_by_a_tenth() {
        let e = expand_box(NormalizedBox { top: 0.1, left: 0.2, bottom: 0.5, right: 0.6 });
        assert!((e.top - 0.06).abs() < 1e-9);
        assert!((e.left - 0.16).abs() < 1e-9);
        assert!((e.bottom - 0.54).abs() < 1e-9);
        assert!((e.right - 0.64).abs() < 1e-9);
    }

    #[test]
    fn expansion_clamps_to_the_unit_square() {
        let e = expand_box(NormalizedBox { top: 0.0, left: 0.0, bottom: 1.0, right: 1.0 });
        assert_eq!(e, NormalizedBox { top: 0.0, left: 0.0, bottom: 1.0, right: 1.0 });
    }

    #[test]
    fn masked_region_is_grey_and_outside_is_untouched() {
        let source = png_image(100, 100, Rgb([0, 0, 255]));
        let b = NormalizedBox { top: 0.4, left: 0.4, bottom: 0.6, right: 0.6 };
        let masked = mask_region(&source, b).expect("mask");

        // PNG round trip is lossless, so exact pixel checks hold.
        assert_eq!(masked.mime_type, "image/png");
        let img = image::load_from_memory(&masked.data).expect("decode").to_rgb8();
        assert_eq!(*img.get_pixel(50, 50), Rgb(MASK_COLOR));
        assert_eq!(*img.get_pixel(5, 5), Rgb([0, 0, 255]));
        assert_eq!(*img.get_pixel(95, 95), Rgb([0, 0, 255]));
    }

    #[test]
    fn jpeg_source_stays_jpeg() {
        let mut buf = Vec::new();
        JpegEncoder::new_with_quality(&mut buf, 90)
            .encode_image(&RgbImage::from_pixel(32, 32, Rgb([200, 200, 200])))
            .expect("jpeg encode");
        let source = EncodedImage::jpeg(buf);
        let b = NormalizedBox { top: 0.0, left: 0.0, bottom: 0.5, right: 0.5 };
        let masked = mask_region(&source, b).expect("mask");
        assert_eq!(masked.mime_type, "image/jpeg");
    }

    #[test]
    fn undecodable_input_fails() {
        let source = EncodedImage::jpeg(b"nope".to_vec());
        let b = NormalizedBox { top: 0.0, left: 0.0, bottom: 1.0, right: 1.0 };
        assert!(mask_region(&source, b).is_err());
    }
}
