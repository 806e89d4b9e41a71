//! Diagnosis result types
//!
//! Shared between the Gemini client and the web UI:
//! - HealthStatus: the three-way classification tag
//! - DiagnosisResult: one validated model reply

use serde::{Deserialize, Serialize};

/// Classification tag returned by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Diseased,
    Unknown,
}

impl HealthStatus {
    /// Tags the remote model is asked to constrain `status` to.
    pub const TAGS: &'static [&'static str] = &["Healthy", "Diseased", "Unknown"];

    /// Parses an exact tag. Anything else is a validation failure upstream.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "Healthy" => Some(HealthStatus::Healthy),
            "Diseased" => Some(HealthStatus::Diseased),
            "Unknown" => Some(HealthStatus::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Diseased => "Diseased",
            HealthStatus::Unknown => "Unknown",
        }
    }

    /// The treatment panel is rendered only for a diseased plant.
    pub fn shows_treatment(&self) -> bool {
        matches!(self, HealthStatus::Diseased)
    }

    /// Prevention guidance is rendered for healthy and diseased plants,
    /// never for an unrecognized image.
    pub fn shows_prevention(&self) -> bool {
        matches!(self, HealthStatus::Healthy | HealthStatus::Diseased)
    }
}

/// One diagnosis, immutable once produced.
///
/// `treatment_options` and `prevention_measures` keep the order the model
/// returned them in; the panels render them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub disease_name: String,
    pub status: HealthStatus,
    pub confidence: f64,
    pub description: String,
    pub treatment_options: Vec<String>,
    pub prevention_measures: Vec<String>,
}

impl DiagnosisResult {
    /// Display label, e.g. `"93% Confidence"` for a confidence of 0.93.
    pub fn confidence_label(&self) -> String {
        format!("{}% Confidence", (self.confidence * 100.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: HealthStatus) -> DiagnosisResult {
        DiagnosisResult {
            disease_name: "Leaf Rust".to_string(),
            status,
            confidence: 0.93,
            description: "Orange pustules on the underside of leaves.".to_string(),
            treatment_options: vec![
                "Remove infected leaves".to_string(),
                "Apply fungicide".to_string(),
            ],
            prevention_measures: vec!["Rotate crops".to_string()],
        }
    }

    #[test]
    fn test_status_parse_exact_tags() {
        assert_eq!(HealthStatus::parse("Healthy"), Some(HealthStatus::Healthy));
        assert_eq!(HealthStatus::parse("Diseased"), Some(HealthStatus::Diseased));
        assert_eq!(HealthStatus::parse("Unknown"), Some(HealthStatus::Unknown));
    }

    #[test]
    fn test_every_tag_round_trips_through_parse() {
        for tag in HealthStatus::TAGS {
            let status = HealthStatus::parse(tag).unwrap();
            assert_eq!(status.as_str(), *tag);
        }
    }

    #[test]
    fn test_status_parse_rejects_other_tags() {
        assert_eq!(HealthStatus::parse("healthy"), None);
        assert_eq!(HealthStatus::parse("Sick"), None);
        assert_eq!(HealthStatus::parse(""), None);
    }

    #[test]
    fn test_panel_predicates() {
        assert!(HealthStatus::Diseased.shows_treatment());
        assert!(HealthStatus::Diseased.shows_prevention());

        assert!(!HealthStatus::Healthy.shows_treatment());
        assert!(HealthStatus::Healthy.shows_prevention());

        assert!(!HealthStatus::Unknown.shows_treatment());
        assert!(!HealthStatus::Unknown.shows_prevention());
    }

    #[test]
    fn test_confidence_label_rounding() {
        assert_eq!(sample(HealthStatus::Diseased).confidence_label(), "93% Confidence");

        let mut low = sample(HealthStatus::Healthy);
        low.confidence = 0.005;
        assert_eq!(low.confidence_label(), "1% Confidence");

        let mut full = sample(HealthStatus::Healthy);
        full.confidence = 1.0;
        assert_eq!(full.confidence_label(), "100% Confidence");
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_string(&sample(HealthStatus::Diseased)).unwrap();
        assert!(json.contains("\"diseaseName\":\"Leaf Rust\""));
        assert!(json.contains("\"status\":\"Diseased\""));
        assert!(json.contains("\"treatmentOptions\""));
        assert!(json.contains("\"preventionMeasures\""));
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "diseaseName": "Powdery Mildew",
            "status": "Diseased",
            "confidence": 0.87,
            "description": "White powdery spots.",
            "treatmentOptions": ["Prune affected areas"],
            "preventionMeasures": ["Improve air circulation"]
        }"#;
        let result: DiagnosisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.disease_name, "Powdery Mildew");
        assert_eq!(result.status, HealthStatus::Diseased);
        assert_eq!(result.treatment_options.len(), 1);
    }
}
