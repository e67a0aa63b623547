pub mod fallback;
pub mod gemini;

use async_trait::async_trait;

pub use fallback::OfflineGenerator;
pub use gemini::GeminiGenerator;

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedAnswer {
    pub code: String,
    pub explanation: String,
    pub language: String,
}

/// Why a generator could not produce an answer. Callers only ever log it.
#[derive(Debug)]
pub enum GenerationError {
    /// No credential configured for the upstream service.
    NotConfigured,
    /// The request never got a usable HTTP response (connect, timeout, body read).
    Transport(String),
    /// The upstream answered with an error of its own.
    Rejected(String),
    /// The upstream answered, but not with a usable answer.
    Malformed(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "answer generator has no API key"),
            Self::Transport(e) => write!(f, "could not reach answer generator: {e}"),
            Self::Rejected(e) => write!(f, "answer generator refused the request: {e}"),
            Self::Malformed(e) => write!(f, "unusable answer from generator: {e}"),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<reqwest::Error> for GenerationError {
    // Request URLs can carry credentials; never keep them in the message.
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url().to_string())
    }
}

/// Something that can turn a programming question into an answer.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate(
        &self,
        question: &str,
        user_code: Option<&str>,
    ) -> Result<GeneratedAnswer, GenerationError>;
}

/// Asks `generator` for an answer and falls back to the offline template on any failure.
/// Never fails.
pub async fn answer_for(
    generator: &dyn AnswerGenerator,
    question: &str,
    user_code: Option<&str>,
) -> GeneratedAnswer {
    match generator.generate(question, user_code).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("답변 생성 실패, 기본 답변으로 대체: {e}");
            fallback::answer(question)
        }
    }
}
