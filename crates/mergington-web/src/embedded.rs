//! 정적 파일 임베드 및 서빙.
//!
//! rust-embed를 사용하여 `static/` 프론트엔드를 바이너리에 임베드하고
//! `/static/*` 경로로 제공한다.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

use crate::error::ApiError;

/// 프론트엔드 파일 임베드
#[derive(Embed)]
#[folder = "static"]
struct Assets;

/// 정적 파일 서빙 핸들러
///
/// GET /static/{*path}
pub async fn serve_static(Path(path): Path<String>) -> Response {
    serve_asset(&path)
}

/// 정적 파일 서빙 구현
fn serve_asset(path: &str) -> Response {
    let path = path.trim_start_matches('/');
    if path.split('/').any(|segment| segment == "..") {
        return ApiError::NotFound("Not Found".to_string()).into_response();
    }

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();

            let cache_control = if path.ends_with(".html") {
                "no-cache"
            } else {
                "public, max-age=3600"
            };

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.as_ref()),
                    (header::CACHE_CONTROL, cache_control),
                ],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => ApiError::NotFound("Not Found".to_string()).into_response(),
    }
}
