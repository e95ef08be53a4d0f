use serde::{Deserialize, Serialize};
use serde_json::Value;

use faq_voice_core::model::GeneratedAnswer;
use faq_voice_core::pipeline::answer_question_json;

use crate::error::AppError;

/// Body of `POST /api/generate`. Every field is required; they are optional
/// here so that a missing field is reported as a client error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub brand_voice: Option<Value>,
    pub faq: Option<String>,
    pub question: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub answer: String,
    pub sources: Vec<String>,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureResponse {
    pub error: String,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub faq: String,
    pub brand_voice: Value,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl GenerateRequest {
    /// Split into `(faq, brand_voice, question)`, rejecting absent or empty fields.
    pub fn into_parts(self) -> Result<(String, Value, String), AppError> {
        let brand_voice = self.brand_voice.filter(|v| !is_blank(v));
        let faq = self.faq.filter(|s| !s.is_empty());
        let question = self.question.filter(|s| !s.is_empty());

        match (faq, brand_voice, question) {
            (Some(faq), Some(brand_voice), Some(question)) => Ok((faq, brand_voice, question)),
            _ => Err(AppError::MissingFields),
        }
    }
}

/// Run the answer pipeline for one request.
///
/// The brand voice must be a JSON object; its recognized fields are checked by
/// the pipeline itself.
pub fn generate(
    faq: &str,
    brand_voice: Value,
    question: &str,
) -> Result<GeneratedAnswer, AppError> {
    if !brand_voice.is_object() {
        return Err(AppError::InvalidBrandVoice);
    }
    Ok(answer_question_json(faq, brand_voice, question)?)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
