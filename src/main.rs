use std::sync::Arc;

use codefeed::ai::{AnswerGenerator, GeminiGenerator, OfflineGenerator};
use codefeed::questions::{QuestionStore, SWEEP_INTERVAL};
use codefeed::{config, web, Data, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();
    let store = Arc::new(QuestionStore::new());
    let sweeper = store.spawn_sweeper(SWEEP_INTERVAL);

    let generator: Arc<dyn AnswerGenerator> = if config.gemini_api_key.is_some() {
        Arc::new(GeminiGenerator::from_config(&config)?)
    } else {
        tracing::warn!("GEMINI_API_KEY 미설정: 모든 답변이 기본 템플릿으로 생성됩니다");
        Arc::new(OfflineGenerator)
    };

    let data = Data { store, generator };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("서버 시작: {}", config.bind_addr);

    let result = axum::serve(listener, web::router(data))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    sweeper.shutdown().await;
    tracing::info!("서버 종료");
    result.map_err(Into::into)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("종료 신호 대기 실패: {e}");
        std::future::pending::<()>().await;
    }
}
