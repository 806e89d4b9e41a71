//! Model reply parsing and validation
//!
//! The raw text reply is parsed as JSON and then validated field by
//! field, so a structurally valid reply with an unexpected status tag or
//! an out-of-range confidence is rejected instead of flowing into the UI.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{DiagnosisResult, HealthStatus};

/// Wire shape of the reply before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDiagnosis {
    disease_name: String,
    status: String,
    confidence: f64,
    description: String,
    #[serde(default)]
    treatment_options: Vec<String>,
    #[serde(default)]
    prevention_measures: Vec<String>,
}

/// Extracts the JSON part of a model reply.
///
/// Extraction order:
/// 1. ```json ... ``` fenced block
/// 2. outermost `{ ... }` object
/// 3. error
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON found in reply".into()))
}

/// Parses and validates a diagnosis reply.
///
/// # Arguments
/// * `response` - raw text of the model reply
///
/// # Returns
/// * `Ok(DiagnosisResult)` - validated diagnosis
/// * `Err(Error::Parse)` - the reply is not JSON of the expected shape
/// * `Err(Error::Validation)` - the shape is right but a field is out of range
pub fn parse_diagnosis_response(response: &str) -> Result<DiagnosisResult> {
    let json_str = extract_json(response)?;
    let raw: RawDiagnosis = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("diagnosis JSON: {}", e)))?;
    validate(raw)
}

fn validate(raw: RawDiagnosis) -> Result<DiagnosisResult> {
    let status = HealthStatus::parse(raw.status.trim())
        .ok_or_else(|| Error::Validation(format!("unexpected status tag: {:?}", raw.status)))?;
    let confidence = normalize_confidence(raw.confidence)?;

    Ok(DiagnosisResult {
        disease_name: raw.disease_name,
        status,
        confidence,
        description: raw.description,
        treatment_options: raw.treatment_options,
        prevention_measures: raw.prevention_measures,
    })
}

/// Accepts confidence in [0, 1]. Values in (1, 100] are taken as
/// percentages and scaled down; anything else is rejected.
fn normalize_confidence(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::Validation(format!("confidence is not finite: {}", value)));
    }
    if (0.0..=1.0).contains(&value) {
        return Ok(value);
    }
    if value > 1.0 && value <= 100.0 {
        return Ok(value / 100.0);
    }
    Err(Error::Validation(format!("confidence out of range: {}", value)))
}
