//! Green Oracle shared library
//!
//! Logic shared between the web front end and native tests:
//! - types: DiagnosisResult and HealthStatus
//! - state: view/request state machine as pure reducers
//! - prompts: fixed instruction, persona and response schema
//! - parser: parse-then-validate handling of the model reply

pub mod error;
pub mod parser;
pub mod prompts;
pub mod state;
pub mod types;

pub use error::{Error, Result, ANALYSIS_ERROR_MESSAGE};
pub use parser::{extract_json, parse_diagnosis_response};
pub use state::{AnalysisPhase, AppState, View};
pub use types::{DiagnosisResult, HealthStatus};
