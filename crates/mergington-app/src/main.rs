//! # mergington-app
//!
//! Mergington 활동 신청 서버 바이너리 진입점.
//! 설정 로드, DI 와이어링, 라이프사이클 관리.

mod lifecycle;

use anyhow::{Context, Result};
use clap::Parser;
use mergington_core::config::AppConfig;
use mergington_core::models::seed;
use mergington_storage::MemoryDirectory;
use mergington_web::WebServer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::lifecycle::ServerLifecycle;

/// 로그 필터를 적용할 워크스페이스 크레이트
const LOG_TARGETS: &[&str] = &[
    "mergington",
    "mergington_app",
    "mergington_core",
    "mergington_storage",
    "mergington_web",
    "tower_http",
];

/// Mergington 고등학교 과외 활동 신청 서버
#[derive(Parser, Debug)]
#[command(name = "mergington")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (toml, json, yaml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 웹 서버 포트 (기본: 8000)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// 외부 접근 허용 (0.0.0.0 바인드)
    #[arg(long)]
    external: bool,

    /// 시드 카탈로그 JSON 경로 (기본: 내장 카탈로그)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// 설정 로드 후 CLI 인자로 오버라이드
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::load(args.config.as_deref()).context("설정 로드 실패")?;

    if let Some(port) = args.port {
        config.web.port = port;
    }
    if args.external {
        config.web.allow_external = true;
    }
    if let Some(ref seed_path) = args.seed {
        config.catalog.seed_path = Some(seed_path.clone());
    }

    config.validate().context("설정 검증 실패")?;
    Ok(config)
}

/// 설정에 따라 인메모리 디렉토리 생성
fn build_directory(config: &AppConfig) -> Result<MemoryDirectory> {
    let catalog = match config.catalog.seed_path {
        Some(ref path) => seed::load_catalog(path)
            .with_context(|| format!("시드 카탈로그 로드 실패: {}", path.display()))?,
        None => seed::default_catalog(),
    };
    Ok(MemoryDirectory::new(catalog))
}

fn log_filter(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_filter(&args.log_level))),
        )
        .init();

    info!("Mergington 활동 신청 서버 시작");

    let config = resolve_config(&args)?;
    let directory = build_directory(&config)?;
    info!("활동 디렉토리 준비: {}개 활동", directory.len());

    let server = WebServer::new(Arc::new(directory), config.web.clone());
    info!("서버 URL: {}", server.url());

    let lifecycle = Arc::new(ServerLifecycle::new());
    lifecycle.watch_signals();

    let reason = lifecycle.serve(server).await.context("웹 서버 실행 실패")?;
    info!("종료 사유: {:?}", reason);

    info!("Mergington 활동 신청 서버 종료");
    Ok(())
}
