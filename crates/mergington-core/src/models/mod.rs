//! Mergington 도메인 모델.
//!
//! 활동 레코드, 카탈로그, 기본 시드 카탈로그를 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod activity;
pub mod seed;
