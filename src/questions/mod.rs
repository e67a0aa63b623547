pub mod store;
pub mod sweeper;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

pub use store::QuestionStore;
pub use sweeper::Sweeper;

/// How long a question stays in the live feed.
pub const QUESTION_TTL: TimeDelta = TimeDelta::hours(3);

/// Period of the background expiry sweep.
pub const SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Language recorded when an insert does not name one.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// A stored question together with its generated answer. Never mutated after insert.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRecord {
    pub id: Uuid,
    pub user_name: String,
    pub question: String,
    pub answer_code: String,
    pub answer_explanation: Option<String>,
    pub answer_language: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl QuestionRecord {
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Insert input. Validation is the caller's job.
#[derive(Clone, Debug, Default)]
pub struct NewQuestion {
    pub user_name: String,
    pub question: String,
    pub answer_code: String,
    pub answer_explanation: Option<String>,
    pub answer_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_is_three_hours() {
        assert_eq!(QUESTION_TTL.num_seconds(), 3 * 60 * 60);
    }

    #[test]
    fn test_sweep_interval_is_one_minute() {
        assert_eq!(SWEEP_INTERVAL.as_secs(), 60);
    }
}
