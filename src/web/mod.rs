pub mod error;
pub mod models;
pub mod validation;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::ai;
use crate::questions::{NewQuestion, QuestionRecord};
use crate::Data;

pub use error::ApiError;
pub use models::{QuestionView, SubmitQuestion};

pub fn router(data: Data) -> Router {
    Router::new()
        .route("/api/questions", get(list_questions).post(submit_question))
        .layer(middleware::from_fn(log_requests))
        .with_state(data)
}

/// Validates, generates an answer and stores the result.
/// Neither the generator nor the store is touched when validation fails.
/// Once validation passes the submission runs to completion even if the caller goes away.
pub async fn submit(data: &Data, body: SubmitQuestion) -> Result<QuestionRecord, ApiError> {
    validation::validate(&body).map_err(ApiError::Validation)?;

    let generator = Arc::clone(&data.generator);
    let store = Arc::clone(&data.store);
    // 생성기 패닉은 500으로 처리
    tokio::spawn(async move {
        let answer =
            ai::answer_for(generator.as_ref(), &body.question, body.user_code.as_deref()).await;

        let record = store
            .insert(NewQuestion {
                user_name: body.user_name,
                question: body.question,
                answer_code: answer.code,
                answer_explanation: Some(answer.explanation),
                answer_language: Some(answer.language),
            })
            .await;

        tracing::info!("질문 등록: {} ({})", record.id, record.answer_language);
        record
    })
    .await
    .map_err(|e| {
        tracing::error!("질문 처리 작업 실패: {e}");
        ApiError::Internal("Failed to generate answer. Please try again.")
    })
}

pub async fn list_for_feed(data: &Data) -> Vec<QuestionView> {
    data.store
        .list_active()
        .await
        .iter()
        .map(QuestionView::feed)
        .collect()
}

async fn submit_question(
    State(data): State<Data>,
    Json(body): Json<SubmitQuestion>,
) -> Result<Json<QuestionView>, ApiError> {
    let record = submit(&data, body).await?;
    Ok(Json(QuestionView::submitted(&record)))
}

async fn list_questions(State(data): State<Data>) -> Json<Vec<QuestionView>> {
    Json(list_for_feed(&data).await)
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        "{method} {path} {} in {}ms",
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
