//! 활동 API 핸들러.

use axum::extract::{Path, Query, State};
use axum::Json;
use mergington_core::models::activity::ActivityCatalog;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// 참가자 이메일 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// 참가자 이메일 (그대로 비교, 정규화 없음)
    pub email: String,
}

/// 신청/취소 성공 응답
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// 확인 메시지
    pub message: String,
}

/// 전체 활동 목록 조회
///
/// GET /activities
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<ActivityCatalog>, ApiError> {
    let catalog = state.directory.list().await?;
    debug!("활동 목록 조회: {}개", catalog.len());
    Ok(Json(catalog))
}

/// 활동 참가 신청
///
/// POST /activities/{name}/signup?email=
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .directory
        .sign_up(&activity_name, &query.email)
        .await?;

    Ok(Json(MessageResponse { message }))
}

/// 활동 참가 취소
///
/// POST /activities/{name}/unregister?email=
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .directory
        .unregister(&activity_name, &query.email)
        .await?;

    Ok(Json(MessageResponse { message }))
}
