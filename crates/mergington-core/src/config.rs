//! 애플리케이션 설정 구조체.
//!
//! 웹 서버 바인드 설정과 활동 카탈로그 시드 경로를 정의한다.
//! `config` crate를 통해 파일/환경변수에서 로드.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CoreError;

/// 환경변수 접두사 (`MERGINGTON__WEB__PORT=9000`)
pub const ENV_PREFIX: &str = "MERGINGTON";

/// 환경변수 키 구분자
const ENV_SEPARATOR: &str = "__";

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 웹 서버 설정
    #[serde(default)]
    pub web: WebConfig,
    /// 활동 카탈로그 설정
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// ============================================================
// 웹 서버 설정
// ============================================================

/// 웹 서버 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebConfig {
    /// 웹 서버 포트 (기본: 8000)
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// 외부 접근 허용 여부 (false: 127.0.0.1 only)
    #[serde(default)]
    pub allow_external: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            allow_external: false,
        }
    }
}

impl WebConfig {
    /// 바인드할 호스트 주소
    pub fn host(&self) -> &'static str {
        if self.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}

// ============================================================
// 카탈로그 설정
// ============================================================

/// 활동 카탈로그 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 시드 JSON 파일 경로 (없으면 내장 기본 카탈로그)
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 설정 파일 + 환경변수에서 설정 로드
    ///
    /// 우선순위: 환경변수 > 설정 파일 > 기본값.
    /// 파일 형식은 확장자로 판별한다 (toml, json, yaml 등).
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("설정 파일 로드: {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| CoreError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.web.port == 0 {
            return Err(CoreError::Validation {
                field: "web.port".to_string(),
                message: "포트는 0일 수 없음".to_string(),
            });
        }
        Ok(())
    }
}

fn default_web_port() -> u16 {
    8000
}
