//! Gemini API client for leaf diagnosis
//!
//! One request per attempt: the base64 image plus the fixed instruction
//! and persona, with a strict JSON response schema. The reply text is
//! handed to `green_oracle_common::parser` for parse-then-validate.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use green_oracle_common::{parse_diagnosis_response, prompts, DiagnosisResult, Error, Result};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// Uploads are tagged as JPEG on the wire regardless of source format.
const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Gemini API request
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini API response
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

fn js_error(value: JsValue) -> Error {
    Error::Api(format!("{:?}", value))
}

fn build_request(image_base64: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: IMAGE_MIME_TYPE.to_string(),
                        data: image_base64.to_string(),
                    },
                },
                Part::Text {
                    text: prompts::ANALYSIS_PROMPT.to_string(),
                },
            ],
        }],
        system_instruction: Content {
            parts: vec![Part::Text {
                text: prompts::SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
            response_schema: prompts::response_schema(),
        },
    }
}

/// Sends one request and returns the first candidate's text.
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Api("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Api(format!("HTTP {}", resp.status())));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let response: GeminiResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or(Error::EmptyResponse)?;

    if text.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }
    Ok(text)
}

/// Analyzes one leaf image.
///
/// # Arguments
/// * `api_key` - Gemini API key
/// * `image_base64` - base64 payload without the data-URL prefix
pub async fn analyze_leaf_image(api_key: &str, image_base64: &str) -> Result<DiagnosisResult> {
    let request = build_request(image_base64);
    let text = call_gemini_api(api_key, &request).await?;
    parse_diagnosis_response(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_image_then_instruction() {
        let request = build_request("aGVsbG8=");
        let json = serde_json::to_string(&request).unwrap();

        let image_at = json.find("aGVsbG8=").unwrap();
        let text_at = json.find("Analyze this plant leaf image").unwrap();
        assert!(image_at < text_at);
        assert!(json.contains("\"mime_type\":\"image/jpeg\""));
    }

    #[test]
    fn test_request_serialize_shape() {
        let request = build_request("data");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"responseSchema\""));
        assert!(json.contains("\"temperature\":0.1"));
    }

    #[test]
    fn test_part_inline_data_serialize() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "base64data".to_string(),
            },
        };
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"inline_data\""));
        assert!(json.contains("\"data\":\"base64data\""));
    }

    #[test]
    fn test_response_deserialize() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"diseaseName\": \"Leaf Rust\"}"
                    }]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert!(response.candidates[0].content.parts[0]
            .text
            .contains("Leaf Rust"));
    }

    #[test]
    fn test_response_without_candidates_yields_empty() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(Error::EmptyResponse);
        assert!(matches!(text, Err(Error::EmptyResponse)));
    }
}
