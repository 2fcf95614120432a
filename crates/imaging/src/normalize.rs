//! Input standardization.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::ImagingError;

/// Longest allowed edge after normalization, in pixels.
pub const MAX_DIMENSION: u32 = 1536;

/// JPEG quality for normalized output (percent).
pub const JPEG_QUALITY: u8 = 90;

/// An encoded image with its mime type, ready for the vision backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl EncodedImage {
    pub fn jpeg(data: Vec<u8>) -> Self {
        Self { mime_type: "image/jpeg".to_string(), data }
    }
}

/// Whether the face-masking step can operate on this mime type.
///
/// Masking requires a format this crate can decode and re-encode; anything
/// else (raw HEIC pass-through in particular) is sent to the backend as-is.
pub fn is_maskable(mime_type: &str) -> bool {
    mime_type == "image/jpeg" || mime_type == "image/png"
}

/// Guess a mime type from a file extension, for raw pass-through.
pub fn guess_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    match lower.rsplit('.').next() {
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}

/// Standardize an input image.
///
/// Decodable inputs are resized to fit [`MAX_DIMENSION`] (aspect preserved,
/// never upscaled), flattened onto a white background and re-encoded as
/// JPEG at [`JPEG_QUALITY`]. Undecodable inputs pass through unchanged with
/// a mime type guessed from the file name; the backend handles formats we
/// cannot decode, HEIC among them. Empty input is rejected.
pub fn normalize(bytes: &[u8], file_name: &str) -> Result<EncodedImage, ImagingError> {
    if bytes.is_empty() {
        return Err(ImagingError::Unprocessable(format!(
            "empty image payload: {file_name}"
        )));
    }

    let decoded = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(err) => {
            debug!(file_name, %err, "decode failed, passing image through raw");
            return Ok(EncodedImage {
                mime_type: guess_mime(file_name).to_string(),
                data: bytes.to_vec(),
            });
        }
    };

    let bounded = if decoded.width() > MAX_DIMENSION || decoded.height() > MAX_DIMENSION {
        decoded.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3)
    } else {
        decoded
    };

    let flat = flatten_onto_white(&bounded);
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY).encode_image(&flat)?;
    Ok(EncodedImage::jpeg(out))
}

/// Composite the image over an opaque white background.
///
/// Transparent garment cutouts would otherwise render on black after JPEG
/// re-encoding, which reads as a different product.
pub(crate) fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, px) in rgba.enumerate_pixels() {
        let alpha = px[3] as u16;
        let blend = |c: u8| -> u8 {
            ((c as u16 * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        flat.put_pixel(x, y, image::Rgb([blend(px[0]), blend(px[1]), blend(px[2])]));
    }
    flat
}

/// Decode helper shared with the masking step.
pub(crate) fn decode(bytes: &[u8]) -> Result<DynamicImage, ImagingError> {
    image::load_from_memory(bytes).map_err(ImagingError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img.clone())
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .expect("png encode");
        buf
    }

    #[test]
    fn small_image_keeps_its_dimensions() {
        let img = RgbaImage::from_pixel(64, 48, Rgba([10, 20, 30, 255]));
        let out = normalize(&png_bytes(&img), "a.png").expect("normalize");
        assert_eq!(out.mime_type, "image/jpeg");
        let decoded = image::load_from_memory(&out.data).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn oversized_image_is_bounded_with_aspect_preserved() {
        let img = RgbaImage::from_pixel(3072, 1536, Rgba([10, 20, 30, 255]));
        let out = normalize(&png_bytes(&img), "wide.png").expect("normalize");
        let decoded = image::load_from_memory(&out.data).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (1536, 768));
    }

    #[test]
    fn transparent_pixels_flatten_to_white() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        let flat = flatten_onto_white(&DynamicImage::ImageRgba8(img));
        assert_eq!(*flat.get_pixel(4, 4), Rgb([255, 255, 255]));
    }

    #[test]
    fn opaque_pixels_survive_flattening() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
        let flat = flatten_onto_white(&DynamicImage::ImageRgba8(img));
        assert_eq!(*flat.get_pixel(0, 0), Rgb([200, 100, 50]));
    }

    #[test]
    fn undecodable_input_passes_through_raw() {
        let bytes = b"not an image at all".to_vec();
        let out = normalize(&bytes, "photo.heic").expect("raw fallback");
        assert_eq!(out.mime_type, "image/heic");
        assert_eq!(out.data, bytes);
    }

    #[test]
    fn unknown_extension_defaults_to_jpeg_mime() {
        let out = normalize(b"garbage", "mystery.bin").expect("raw fallback");
        assert_eq!(out.mime_type, "image/jpeg");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(normalize(&[], "empty.jpg").is_err());
    }

    #[test]
    fn maskable_formats() {
        assert!(is_maskable("image/jpeg"));
        assert!(is_maskable("image/png"));
        assert!(!is_maskable("image/heic"));
        assert!(!is_maskable("image/webp"));
    }
}
