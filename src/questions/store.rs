use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewQuestion, QuestionRecord, DEFAULT_LANGUAGE, QUESTION_TTL};

struct Slot {
    seq: u64,
    record: QuestionRecord,
}

#[derive(Default)]
struct Inner {
    next_seq: u64,
    records: HashMap<Uuid, Slot>,
}

/// In-memory question store. Records live until the first sweep after they expire.
#[derive(Default)]
pub struct QuestionStore {
    inner: RwLock<Inner>,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, new: NewQuestion) -> QuestionRecord {
        self.insert_at(new, Utc::now()).await
    }

    pub async fn insert_at(&self, new: NewQuestion, now: DateTime<Utc>) -> QuestionRecord {
        let answer_language = new
            .answer_language
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let record = QuestionRecord {
            id: Uuid::new_v4(),
            user_name: new.user_name,
            question: new.question,
            answer_code: new.answer_code,
            answer_explanation: new.answer_explanation,
            answer_language,
            created_at: now,
            expires_at: now + QUESTION_TTL,
        };

        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.insert(
            record.id,
            Slot {
                seq,
                record: record.clone(),
            },
        );
        record
    }

    pub async fn list_active(&self) -> Vec<QuestionRecord> {
        self.list_active_at(Utc::now()).await
    }

    /// Active records, newest first. Equal timestamps fall back to insertion order, later first.
    pub async fn list_active_at(&self, now: DateTime<Utc>) -> Vec<QuestionRecord> {
        let inner = self.inner.read().await;
        let mut active: Vec<&Slot> = inner
            .records
            .values()
            .filter(|slot| slot.record.is_active_at(now))
            .collect();
        active.sort_by_key(|slot| Reverse((slot.record.created_at, slot.seq)));
        active.into_iter().map(|slot| slot.record.clone()).collect()
    }

    pub async fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Utc::now()).await
    }

    /// Drops every record with `expires_at <= now` and returns how many went.
    pub async fn sweep_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|_, slot| slot.record.is_active_at(now));
        before - inner.records.len()
    }

    /// Number of records held, expired or not.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
