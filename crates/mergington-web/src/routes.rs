//! 라우트 정의.

use axum::routing::{get, post};
use axum::Router;

use crate::embedded;
use crate::handlers;
use crate::AppState;

/// 애플리케이션 라우트 생성
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // 프론트엔드 진입
        .route("/", get(handlers::index::redirect_to_index))
        // 활동
        .route("/activities", get(handlers::activities::list_activities))
        .route(
            "/activities/{name}/signup",
            post(handlers::activities::signup_for_activity),
        )
        .route(
            "/activities/{name}/unregister",
            post(handlers::activities::unregister_from_activity),
        )
        // 정적 파일
        .route("/static/{*path}", get(embedded::serve_static))
}
