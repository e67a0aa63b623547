use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::QuestionStore;

/// Handle to the background expiry sweep. Dropping it also stops the task.
pub struct Sweeper {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl QuestionStore {
    /// Starts a task that sweeps expired questions every `period`.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> Sweeper {
        let store = Arc::clone(self);
        let (stop, mut stopped) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(period) => {
                        let removed = store.sweep_expired().await;
                        if removed > 0 {
                            tracing::debug!("만료된 질문 {removed}개 정리");
                        }
                    }
                    _ = &mut stopped => break,
                }
            }
            tracing::debug!("만료 정리 작업 종료");
        });

        Sweeper {
            stop: Some(stop),
            task: Some(task),
        }
    }
}

impl Sweeper {
    /// Stops the sweep and waits for the task to finish.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("만료 정리 작업 종료 실패: {e}");
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }
}
