pub mod ai;
pub mod config;
pub mod questions;
pub mod web;

use std::sync::Arc;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct Data {
    pub store: Arc<questions::QuestionStore>,
    pub generator: Arc<dyn ai::AnswerGenerator>,
}
