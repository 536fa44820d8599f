//! 서버 라이프사이클.
//!
//! 종료 사유를 한 번만 기록하고, 기록되는 순간 실행 중인 웹 서버를
//! graceful shutdown 시킨다.

use mergington_web::WebServer;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 종료 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT / Ctrl+C
    Interrupt,
    /// SIGTERM
    Terminate,
    /// 프로세스 내부 요청 (시그널 핸들러 등록 실패 포함)
    Requested,
}

/// 서버 라이프사이클 관리자
pub struct ServerLifecycle {
    reason_tx: watch::Sender<Option<ShutdownReason>>,
}

impl ServerLifecycle {
    pub fn new() -> Self {
        let (reason_tx, _) = watch::channel(None);
        Self { reason_tx }
    }

    /// 종료 요청. 첫 사유만 기록되며, 기록된 경우 true
    pub fn shutdown(&self, reason: ShutdownReason) -> bool {
        let recorded = self.reason_tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        });
        if recorded {
            info!("종료 요청: {:?}", reason);
        }
        recorded
    }

    /// 기록된 종료 사유
    pub fn reason(&self) -> Option<ShutdownReason> {
        *self.reason_tx.borrow()
    }

    /// 종료 요청 시 사유와 함께 완료되는 future
    pub fn shutdown_signal(&self) -> impl Future<Output = ShutdownReason> + Send + 'static {
        let mut rx = self.reason_tx.subscribe();
        async move {
            loop {
                let current = *rx.borrow_and_update();
                if let Some(reason) = current {
                    return reason;
                }
                if rx.changed().await.is_err() {
                    return ShutdownReason::Requested;
                }
            }
        }
    }

    /// OS 시그널 대기 (SIGINT, SIGTERM) 후 종료 요청
    pub async fn wait_for_signal(&self) -> std::io::Result<ShutdownReason> {
        #[cfg(unix)]
        let reason = {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigint = signal(SignalKind::interrupt())?;
            let mut sigterm = signal(SignalKind::terminate())?;

            tokio::select! {
                _ = sigint.recv() => ShutdownReason::Interrupt,
                _ = sigterm.recv() => ShutdownReason::Terminate,
            }
        };

        #[cfg(not(unix))]
        let reason = {
            tokio::signal::ctrl_c().await?;
            ShutdownReason::Interrupt
        };

        self.shutdown(reason);
        Ok(reason)
    }

    /// 백그라운드 시그널 감시 시작
    ///
    /// 핸들러 등록에 실패하면 서버를 계속 띄워두지 않고 종료를 요청한다.
    pub fn watch_signals(self: &Arc<Self>) -> JoinHandle<()> {
        let lifecycle = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = lifecycle.wait_for_signal().await {
                error!("시그널 핸들러 등록 실패: {}", e);
                lifecycle.shutdown(ShutdownReason::Requested);
            }
        })
    }

    /// 종료 요청이 올 때까지 웹 서버 실행, 종료 사유 반환
    pub async fn serve(&self, server: WebServer) -> std::io::Result<Option<ShutdownReason>> {
        let signal = self.shutdown_signal();
        server
            .run(async move {
                let reason = signal.await;
                info!("웹 서버 종료 시작 ({:?})", reason);
            })
            .await?;
        Ok(self.reason())
    }
}

impl Default for ServerLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergington_core::config::WebConfig;
    use mergington_storage::MemoryDirectory;
    use std::time::Duration;

    fn ephemeral_server() -> WebServer {
        WebServer::new(
            Arc::new(MemoryDirectory::seeded()),
            WebConfig {
                port: 0,
                allow_external: false,
            },
        )
    }

    #[test]
    fn first_reason_wins() {
        let lifecycle = ServerLifecycle::new();
        assert_eq!(lifecycle.reason(), None);

        assert!(lifecycle.shutdown(ShutdownReason::Terminate));
        assert!(!lifecycle.shutdown(ShutdownReason::Interrupt));
        assert_eq!(lifecycle.reason(), Some(ShutdownReason::Terminate));
    }

    #[tokio::test]
    async fn shutdown_signal_resolves_with_reason() {
        let lifecycle = ServerLifecycle::new();
        let signal = tokio::spawn(lifecycle.shutdown_signal());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!signal.is_finished());

        lifecycle.shutdown(ShutdownReason::Interrupt);
        let reason = tokio::time::timeout(Duration::from_secs(1), signal)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reason, ShutdownReason::Interrupt);
    }

    #[tokio::test]
    async fn shutdown_stops_running_server() {
        let lifecycle = Arc::new(ServerLifecycle::new());
        let serving = {
            let lifecycle = Arc::clone(&lifecycle);
            tokio::spawn(async move { lifecycle.serve(ephemeral_server()).await })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!serving.is_finished());

        lifecycle.shutdown(ShutdownReason::Terminate);
        let result = tokio::time::timeout(Duration::from_secs(5), serving)
            .await
            .expect("서버 종료 타임아웃")
            .unwrap();
        assert_eq!(result.unwrap(), Some(ShutdownReason::Terminate));
    }

    #[tokio::test]
    async fn serve_after_shutdown_returns_immediately() {
        let lifecycle = ServerLifecycle::new();
        lifecycle.shutdown(ShutdownReason::Requested);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            lifecycle.serve(ephemeral_server()),
        )
        .await
        .expect("서버 종료 타임아웃");
        assert_eq!(result.unwrap(), Some(ShutdownReason::Requested));
    }
}
