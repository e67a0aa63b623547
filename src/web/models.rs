use serde::{Deserialize, Serialize};

use crate::questions::QuestionRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuestion {
    pub user_name: String,
    pub question: String,
    #[serde(default)]
    pub user_code: Option<String>,
    /// Sent by the form; not used by the server.
    #[serde(default)]
    pub has_code: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AnswerView {
    pub code: String,
    pub explanation: Option<String>,
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: String,
    pub user_name: String,
    pub question: String,
    pub answer: AnswerView,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl QuestionView {
    /// Shape returned from a submission: no expiry field.
    pub fn submitted(record: &QuestionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            user_name: record.user_name.clone(),
            question: record.question.clone(),
            answer: AnswerView {
                code: record.answer_code.clone(),
                explanation: record.answer_explanation.clone(),
                language: record.answer_language.clone(),
            },
            timestamp: iso_timestamp(record.created_at),
            expires_at: None,
        }
    }

    /// Shape used by the live feed.
    pub fn feed(record: &QuestionRecord) -> Self {
        Self {
            expires_at: Some(iso_timestamp(record.expires_at)),
            ..Self::submitted(record)
        }
    }
}

fn iso_timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QUESTION_TTL;
    use chrono::{DateTime, Utc};

    fn record() -> QuestionRecord {
        let created_at = DateTime::parse_from_rfc3339("2026-03-04T05:06:07.089Z")
            .unwrap()
            .with_timezone(&Utc);
        QuestionRecord {
            id: uuid::Uuid::nil(),
            user_name: "Ada".to_string(),
            question: "How do I reverse a string?".to_string(),
            answer_code: "s[::-1]".to_string(),
            answer_explanation: None,
            answer_language: "python".to_string(),
            created_at,
            expires_at: created_at + QUESTION_TTL,
        }
    }

    #[test]
    fn test_submitted_view_json() {
        let json = serde_json::to_value(QuestionView::submitted(&record())).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["userName"], "Ada");
        assert_eq!(json["answer"]["code"], "s[::-1]");
        assert!(json["answer"]["explanation"].is_null());
        assert_eq!(json["timestamp"], "2026-03-04T05:06:07.089Z");
        assert!(json.get("expiresAt").is_none());
    }

    #[test]
    fn test_feed_view_has_expiry() {
        let json = serde_json::to_value(QuestionView::feed(&record())).unwrap();
        assert_eq!(json["expiresAt"], "2026-03-04T08:06:07.089Z");
    }

    #[test]
    fn test_submit_body_optional_fields() {
        let body: SubmitQuestion =
            serde_json::from_str(r#"{"userName": "Ada", "question": "What is Rust?"}"#).unwrap();
        assert!(body.user_code.is_none());
        assert!(body.has_code.is_none());

        let body: SubmitQuestion = serde_json::from_str(
            r#"{"userName": "Ada", "question": "What is Rust?", "userCode": "fn main(){}", "hasCode": true}"#,
        )
        .unwrap();
        assert_eq!(body.user_code.as_deref(), Some("fn main(){}"));
        assert_eq!(body.has_code, Some(true));
    }
}
