//! Garment face redaction.
//!
//! A face in the garment photo would compete with the explicit model image
//! during generation, so it gets painted over before the garment is sent.
//! The whole step is best-effort: any failure returns the original image.

use tracing::{debug, warn};

use profashion_gemini::{detect_face, VisionCapability};
use profashion_imaging::{is_maskable, mask_region, EncodedImage, NormalizedBox};

/// Mask the face region of a garment image, if one is detected.
///
/// Non-maskable formats (raw HEIC pass-through) are returned unchanged, as
/// are images where detection or masking fails.
pub async fn redact_face_if_present(
    capability: &dyn VisionCapability,
    image: EncodedImage,
) -> EncodedImage {
    if !is_maskable(&image.mime_type) {
        warn!(mime_type = %image.mime_type, "skipping face masking on non-standard format");
        return image;
    }

    let detection = match detect_face(capability, &image).await {
        Ok(detection) => detection,
        Err(err) => {
            warn!(%err, "face detection failed, using original garment image");
            return image;
        }
    };

    let coords = match (detection.has_face, detection.box_2d) {
        (true, Some(coords)) if coords.len() >= 4 => coords,
        _ => {
            debug!("no face detected in garment");
            return image;
        }
    };

    let b = NormalizedBox::from_detector([coords[0], coords[1], coords[2], coords[3]]);
    match mask_region(&image, b) {
        Ok(masked) => {
            debug!("face detected in garment, masked");
            masked
        }
        Err(err) => {
            warn!(%err, "face masking failed, using original garment image");
            image
        }
    }
}
