//! Build-time configuration

/// Gemini API key baked in at build time from the environment.
///
/// A missing key is sent as an empty string; the upstream authentication
/// failure then surfaces through the normal analysis-error path.
pub fn api_key() -> &'static str {
    option_env!("GEMINI_API_KEY").unwrap_or("")
}
