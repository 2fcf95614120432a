//! Image pre-processing for generation requests.
//!
//! Uploads and fetched reference assets are standardized before they reach
//! the vision backend: decoded, bounded in size, flattened onto white and
//! re-encoded as JPEG. Undecodable formats fall back to raw pass-through
//! since the backend accepts more formats than this crate decodes.

pub mod mask;
pub mod normalize;

pub use mask::{expand_box, mask_region, NormalizedBox, MASK_COLOR, MASK_EXPANSION};
pub use normalize::{guess_mime, is_maskable, normalize, EncodedImage, JPEG_QUALITY, MAX_DIMENSION};

/// Errors from image decoding or re-encoding.
#[derive(Debug, thiserror::Error)]
pub enum ImagingError {
    #[error("Unprocessable image: {0}")]
    Unprocessable(String),
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),
}
