//! 설정 및 DI 와이어링 통합 테스트.
//!
//! AppConfig → 디렉토리 어댑터 → 웹 서버 생성 검증.

use mergington_core::config::AppConfig;
use mergington_core::models::seed;
use mergington_core::ports::directory::ActivityDirectory;
use mergington_storage::MemoryDirectory;
use mergington_web::WebServer;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn config_defaults_are_valid() {
    let config = AppConfig::default_config();

    assert!(config.validate().is_ok());
    assert!(config.web.port > 0);
    assert_eq!(config.web.host(), "127.0.0.1");
    assert!(config.catalog.seed_path.is_none());
}

#[test]
fn config_serde_roundtrip() {
    let mut config = AppConfig::default_config();
    config.web.port = 8765;
    config.catalog.seed_path = Some("catalog.json".into());

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: AppConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized, config);
}

#[test]
fn web_server_instantiates_from_config() {
    let config = AppConfig::default_config();
    let directory: Arc<dyn ActivityDirectory> = Arc::new(MemoryDirectory::seeded());

    let server = WebServer::new(directory, config.web.clone());
    assert_eq!(server.url(), format!("http://localhost:{}", config.web.port));
    let _router = server.router();
}

#[tokio::test]
async fn directory_adapter_implements_port() {
    let directory: Arc<dyn ActivityDirectory> = Arc::new(MemoryDirectory::seeded());

    // trait object로 사용 가능한지 확인
    let catalog = directory.list().await.unwrap();
    assert_eq!(catalog, seed::default_catalog());
}

#[tokio::test]
async fn seed_file_drives_directory() {
    let temp_dir = TempDir::new().unwrap();
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(
        &seed_path,
        r#"{
            "Robotics": {"description": "Build robots", "schedule": "Saturdays", "max_participants": 8},
            "Choir": {"description": "Sing together", "schedule": "Mondays", "max_participants": 25, "participants": ["lucy@mergington.edu"]}
        }"#,
    )
    .unwrap();

    let config_path = temp_dir.path().join("mergington.json");
    fs::write(
        &config_path,
        serde_json::json!({ "catalog": { "seed_path": seed_path } }).to_string(),
    )
    .unwrap();

    let config = AppConfig::load(Some(&config_path)).unwrap();
    let seed_path = config.catalog.seed_path.as_deref().unwrap();
    let directory = MemoryDirectory::new(seed::load_catalog(seed_path).unwrap());

    let catalog = directory.list().await.unwrap();
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Robotics", "Choir"]);

    let msg = directory.sign_up("Choir", "x@y.edu").await.unwrap();
    assert_eq!(msg, "Signed up x@y.edu for Choir");
}
