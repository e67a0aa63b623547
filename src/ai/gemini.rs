use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{AnswerGenerator, GeneratedAnswer, GenerationError};
use crate::config::Config;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

const SYSTEM_PROMPT: &str = "\
You are an expert programming assistant. Answer the programming question with:
1. Clean, working code that solves the problem
2. A clear explanation of how the solution works
3. Best practices and any important notes

Respond in JSON with:
{\"code\": \"the complete code solution\", \
\"explanation\": \"detailed explanation of the solution\", \
\"language\": \"the programming language used (lowercase, e.g. 'python', 'javascript', 'java')\"}

Make sure the code is production-ready and follows best practices for the detected language.";

// --- Request types ---

#[derive(Serialize)]
struct Request {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

// --- Response types ---

#[derive(Deserialize)]
struct Response {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Deserialize)]
struct RawAnswer {
    code: Option<String>,
    explanation: Option<String>,
    language: Option<String>,
}

/// Live generator backed by the Gemini `generateContent` endpoint.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiGenerator {
    pub fn new(client: reqwest::Client, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self::new(
            client,
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        ))
    }
}

#[async_trait]
impl AnswerGenerator for GeminiGenerator {
    async fn generate(
        &self,
        question: &str,
        user_code: Option<&str>,
    ) -> Result<GeneratedAnswer, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::NotConfigured)?;

        let response: Response = self
            .client
            .post(format!("{API_BASE}/{}:generateContent", self.model))
            .header(API_KEY_HEADER, api_key)
            .json(&build_request(question, user_code))
            .send()
            .await?
            .json()
            .await?;

        parse_answer(&response.into_text()?)
    }
}

fn build_request(question: &str, user_code: Option<&str>) -> Request {
    let mut text = format!("Question: {question}");
    if let Some(code) = user_code.filter(|c| !c.trim().is_empty()) {
        text.push_str(&format!("\n\nUser's code:\n```\n{code}\n```"));
    }

    Request {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: SYSTEM_PROMPT.to_string(),
            }],
        },
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part { text }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: json!({
                "type": "object",
                "properties": {
                    "code": { "type": "string" },
                    "explanation": { "type": "string" },
                    "language": { "type": "string" },
                },
                "required": ["code", "explanation", "language"],
            }),
        },
    }
}

impl Response {
    /// First text part in the reply. An upstream error or a blank reply is an error.
    fn into_text(self) -> Result<String, GenerationError> {
        if let Some(err) = self.error {
            return Err(GenerationError::Rejected(err.message));
        }

        self.candidates
            .into_iter()
            .flatten()
            .filter_map(|c| c.content?.parts)
            .flatten()
            .find_map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| GenerationError::Malformed("no answer text in reply".to_string()))
    }
}

/// Parses the model's JSON payload. Every field must be present and non-blank.
fn parse_answer(text: &str) -> Result<GeneratedAnswer, GenerationError> {
    // models sometimes wrap JSON in a fenced block
    let json_str = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let raw: RawAnswer =
        serde_json::from_str(json_str).map_err(|e| GenerationError::Malformed(e.to_string()))?;

    let required = |field: Option<String>, name: &str| {
        field
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| GenerationError::Malformed(format!("missing {name}")))
    };

    Ok(GeneratedAnswer {
        code: required(raw.code, "code")?,
        explanation: required(raw.explanation, "explanation")?,
        language: required(raw.language, "language")?.trim().to_lowercase(),
    })
}
