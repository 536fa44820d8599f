//! Mergington 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러 타입에서 `From<CoreError>`로 변환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 활동 신청 도메인 에러와 설정/직렬화/입출력 등 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 리소스를 찾을 수 없음
    #[error("{resource_type} 미발견: {id}")]
    NotFound {
        /// 리소스 종류 (예: "Activity")
        resource_type: String,
        /// 리소스 식별자
        id: String,
    },

    /// 이미 신청한 참가자
    #[error("이미 신청됨 — {email} → {activity}")]
    AlreadyRegistered {
        /// 참가자 이메일
        email: String,
        /// 활동 이름
        activity: String,
    },

    /// 신청하지 않은 참가자의 취소 시도
    #[error("신청 내역 없음 — {email} → {activity}")]
    NotRegistered {
        /// 참가자 이메일
        email: String,
        /// 활동 이름
        activity: String,
    },

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// 활동 미발견 에러 생성
    pub fn activity_not_found(name: &str) -> Self {
        CoreError::NotFound {
            resource_type: "Activity".to_string(),
            id: name.to_string(),
        }
    }
}
