//! Structured analysis tasks: face detection and quality verdicts.
//!
//! The verdicts fail open. A verification that cannot run must never sink a
//! generation that already produced an image, so transport errors and
//! malformed verdicts all collapse to a pass.

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use profashion_imaging::EncodedImage;

use crate::capability::VisionCapability;
use crate::client::GeminiError;
use crate::types::Part;

/// Face detection result for a garment image.
#[derive(Debug, Clone, Deserialize)]
pub struct FaceDetection {
    pub has_face: bool,
    /// Normalized `[ymin, xmin, ymax, xmax]`, present when a face was found.
    #[serde(default)]
    pub box_2d: Option<Vec<f64>>,
}

/// Pass/fail verdict from a verification pass.
#[derive(Debug, Clone, Deserialize)]
pub struct Verdict {
    pub pass: bool,
    #[serde(default)]
    pub reason: String,
}

impl Verdict {
    fn skipped() -> Self {
        Self { pass: true, reason: "Skip".to_string() }
    }
}

/// Locate a human face in a garment image.
///
/// Errors propagate here; the caller decides whether masking is best-effort.
pub async fn detect_face(
    capability: &dyn VisionCapability,
    image: &EncodedImage,
) -> Result<FaceDetection, GeminiError> {
    let prompt = "Analyze this fashion garment image. \
        Detect the bounding box of the HUMAN FACE / HEAD. \
        Return JSON: { \"has_face\": boolean, \"box_2d\": [ymin, xmin, ymax, xmax] } \
        (Normalized coordinates 0-1). \
        If no face is clearly visible, set has_face to false.";
    let schema = json!({
        "type": "OBJECT",
        "properties": {
            "has_face": { "type": "BOOLEAN" },
            "box_2d": {
                "type": "ARRAY",
                "items": { "type": "NUMBER" },
                "description": "[ymin, xmin, ymax, xmax]"
            }
        }
    });

    let value = capability
        .analyze_json(vec![Part::image(image), Part::text(prompt)], schema)
        .await?;
    serde_json::from_value(value)
        .map_err(|err| GeminiError::Malformed(format!("face detection verdict: {err}")))
}

/// Check the generated image for coherent lighting.
pub async fn verify_lighting(
    capability: &dyn VisionCapability,
    generated: &EncodedImage,
) -> Verdict {
    let prompt = "Act as a Senior Art Director. Pass if lighting is consistent. \
        Return JSON { \"pass\": boolean, \"reason\": string }";
    let parts = vec![Part::image(generated), Part::text(prompt)];
    run_verdict(capability, parts, "lighting").await
}

/// Check that the generated image preserves the reference model's identity.
pub async fn verify_identity(
    capability: &dyn VisionCapability,
    reference: &EncodedImage,
    generated: &EncodedImage,
) -> Verdict {
    let parts = vec![
        Part::text("Reference"),
        Part::image(reference),
        Part::text("Generated"),
        Part::image(generated),
        Part::text("Compare identity. Return JSON { \"pass\": boolean, \"reason\": string }"),
    ];
    run_verdict(capability, parts, "identity").await
}

async fn run_verdict(
    capability: &dyn VisionCapability,
    parts: Vec<Part>,
    check: &'static str,
) -> Verdict {
    let schema = json!({
        "type": "OBJECT",
        "properties": {
            "pass": { "type": "BOOLEAN" },
            "reason": { "type": "STRING" }
        }
    });

    match capability.analyze_json(parts, schema).await {
        Ok(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!(check, %err, "verdict did not parse, passing");
            Verdict::skipped()
        }),
        Err(err) => {
            warn!(check, %err, "verification failed to run, passing");
            Verdict::skipped()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;

    struct FixedAnalysis(Result<Value, fn() -> GeminiError>);

    #[async_trait]
    impl VisionCapability for FixedAnalysis {
        async fn generate_image(&self, _parts: Vec<Part>) -> Result<Vec<Part>, GeminiError> {
            unreachable!("analysis-only mock")
        }

        async fn analyze_json(
            &self,
            _parts: Vec<Part>,
            _schema: Value,
        ) -> Result<Value, GeminiError> {
            match &self.0 {
                Ok(value) => Ok(value.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn image() -> EncodedImage {
        EncodedImage::jpeg(vec![1, 2, 3])
    }

    #[tokio::test]
    async fn failing_verdict_is_reported() {
        let mock = FixedAnalysis(Ok(json!({ "pass": false, "reason": "flat lighting" })));
        let verdict = verify_lighting(&mock, &image()).await;
        assert!(!verdict.pass);
        assert_eq!(verdict.reason, "flat lighting");
    }

    #[tokio::test]
    async fn transport_error_fails_open() {
        let mock = FixedAnalysis(Err(|| GeminiError::Malformed("boom".to_string())));
        let verdict = verify_identity(&mock, &image(), &image()).await;
        assert!(verdict.pass);
        assert_eq!(verdict.reason, "Skip");
    }

    #[tokio::test]
    async fn unparseable_verdict_fails_open() {
        let mock = FixedAnalysis(Ok(json!({ "verdict": "what" })));
        let verdict = verify_lighting(&mock, &image()).await;
        assert!(verdict.pass);
    }

    #[tokio::test]
    async fn face_detection_parses_box() {
        let mock = FixedAnalysis(Ok(json!({
            "has_face": true,
            "box_2d": [0.1, 0.2, 0.5, 0.6]
        })));
        let detection = detect_face(&mock, &image()).await.expect("detect");
        assert!(detection.has_face);
        assert_eq!(detection.box_2d, Some(vec![0.1, 0.2, 0.5, 0.6]));
    }

    #[tokio::test]
    async fn face_detection_error_propagates() {
        let mock = FixedAnalysis(Err(|| GeminiError::Malformed("bad".to_string())));
        assert!(detect_face(&mock, &image()).await.is_err());
    }
}
