//! 루트 경로 핸들러.

use axum::response::Redirect;

use crate::error::ApiError;

/// 프론트엔드 진입 페이지 경로
pub const INDEX_PATH: &str = "/static/index.html";

/// 루트 → 프론트엔드 리다이렉트 (307)
///
/// GET /
pub async fn redirect_to_index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// 등록되지 않은 경로
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
