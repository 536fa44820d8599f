//! # mergington-web
//!
//! Mergington 활동 신청 HTTP 서버.
//! Axum 기반 REST API + 정적 프론트엔드 임베드.
//!
//! ## 기능
//! - 활동 목록 조회
//! - 참가 신청 / 취소
//! - 정적 파일 서빙 (`/static/*`, 루트는 `/static/index.html`로 리다이렉트)

pub mod embedded;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use mergington_core::config::WebConfig;
use mergington_core::ports::directory::ActivityDirectory;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// 포트 바인드 최대 시도 횟수
const MAX_PORT_ATTEMPTS: u16 = 10;

/// 웹 서버 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    /// 활동 디렉토리
    pub directory: Arc<dyn ActivityDirectory>,
}

/// 활동 신청 웹 서버
pub struct WebServer {
    config: WebConfig,
    state: AppState,
}

impl WebServer {
    /// 새 웹 서버 생성
    pub fn new(directory: Arc<dyn ActivityDirectory>, config: WebConfig) -> Self {
        Self {
            config,
            state: AppState { directory },
        }
    }

    /// 전체 라우터 구성 (레이어 + 상태 포함)
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::app_routes()
            .fallback(handlers::index::not_found)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// 종료 future가 완료될 때까지 서버 실행
    ///
    /// 바인드는 [`WebServer::bind`]의 포트 대체 규칙을 따른다.
    pub async fn run<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        info!("활동 신청 서버 시작: http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("활동 신청 서버 종료");
        Ok(())
    }

    /// 설정 포트부터 바인드 시도
    ///
    /// 포트가 사용 중이면 다음 포트로 넘어가며, 최대 10개 포트를 시도한 뒤
    /// 마지막 에러를 반환한다.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let host = self.config.host();
        let base_port = self.config.port;
        let mut last_error = None;

        for attempt in 0..MAX_PORT_ATTEMPTS {
            let port = base_port.saturating_add(attempt);

            // u16::MAX 도달 후 같은 포트 반복 방지
            if attempt > 0 && port == base_port.saturating_add(attempt - 1) {
                break;
            }

            let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
                Ok(a) => a,
                Err(e) => {
                    error!("잘못된 주소 {}:{}: {}", host, port, e);
                    continue;
                }
            };

            match TcpListener::bind(addr).await {
                Ok(listener) => {
                    if attempt > 0 {
                        warn!("포트 {} 사용 불가, 대체 포트 {} 사용", base_port, port);
                    }
                    return Ok(listener);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                    warn!("포트 {} 이미 사용 중, 다음 포트 시도...", port);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!(
                    "포트 {}-{} 모두 사용 불가",
                    base_port,
                    base_port.saturating_add(MAX_PORT_ATTEMPTS - 1)
                ),
            )
        }))
    }

    /// 서버 URL 반환
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.config.port)
    }
}
