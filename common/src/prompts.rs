//! Prompt and schema constants for the diagnosis request
//!
//! Every analysis attempt sends the same instruction, the same persona
//! and the same response schema; only the image changes.

use serde_json::{json, Value};

use crate::types::HealthStatus;

/// User-facing instruction bundled with the image.
pub const ANALYSIS_PROMPT: &str = "Analyze this plant leaf image. Identify if the plant is \
healthy or has a disease. Provide a detailed diagnosis including the disease name, a \
description of the condition, step-by-step treatment options, and preventive measures for \
the future. Ensure the response is in valid JSON format.";

/// System-level persona sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a world-class plant pathologist and \
agricultural expert named \"The Green Oracle\". Your goal is to help farmers and gardeners \
accurately identify plant diseases from images. Be scientific yet accessible. If the image \
is not a plant leaf, set status to \"Unknown\".";

/// Response schema sent as `generationConfig.responseSchema`.
///
/// All six fields are required; `status` is constrained to the three
/// HealthStatus tags.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "diseaseName": { "type": "STRING" },
            "status": {
                "type": "STRING",
                "description": status_description()
            },
            "confidence": { "type": "NUMBER" },
            "description": { "type": "STRING" },
            "treatmentOptions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "preventionMeasures": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "diseaseName",
            "status",
            "confidence",
            "description",
            "treatmentOptions",
            "preventionMeasures"
        ]
    })
}

/// Schema description for `status`, built from `HealthStatus::TAGS` so the
/// schema and the validator cannot drift apart.
fn status_description() -> String {
    let mut quoted: Vec<String> = HealthStatus::TAGS
        .iter()
        .map(|tag| format!("'{}'", tag))
        .collect();
    let last = quoted.pop().unwrap_or_default();
    format!("Must be {}, or {}", quoted.join(", "), last)
}
