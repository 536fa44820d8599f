//! 활동 디렉토리 포트.
//!
//! 구현: `mergington-storage` crate (인메모리)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::activity::ActivityCatalog;

/// 활동 디렉토리: 활동 목록 조회 및 참가 신청/취소
///
/// 모든 검사는 변경 전에 수행된다. 실패한 호출은 상태를 바꾸지 않는다.
#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    /// 전체 카탈로그 스냅샷
    async fn list(&self) -> Result<ActivityCatalog, CoreError>;

    /// 참가 신청
    ///
    /// - 활동이 없으면 `CoreError::NotFound`
    /// - 이미 신청했으면 `CoreError::AlreadyRegistered`
    ///
    /// 성공 시 확인 메시지 반환.
    async fn sign_up(&self, activity: &str, email: &str) -> Result<String, CoreError>;

    /// 참가 취소
    ///
    /// - 활동이 없으면 `CoreError::NotFound`
    /// - 신청 내역이 없으면 `CoreError::NotRegistered`
    ///
    /// 성공 시 확인 메시지 반환.
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, CoreError>;
}
