//! 시드 카탈로그.
//!
//! 프로세스 시작 시 디렉토리를 채우는 기본 활동 목록과
//! JSON 시드 파일 로더.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::CoreError;
use crate::models::activity::{Activity, ActivityCatalog};

/// 기본 시드 항목: (이름, 설명, 일정, 정원, 참가자)
type SeedEntry = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const DEFAULT_SEED: &[SeedEntry] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in inter-school matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice drills and play competitive basketball games",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore painting, drawing and sculpture with fellow artists",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct and stage plays and school performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

/// 내장 기본 카탈로그
pub fn default_catalog() -> ActivityCatalog {
    DEFAULT_SEED
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                *name,
                Activity::new(*description, *schedule, *max)
                    .with_participants(participants.iter().copied()),
            )
        })
        .collect()
}

/// JSON 시드 파일에서 카탈로그 로드
///
/// 형식은 `GET /activities` 응답과 같다. 키 순서를 유지하며
/// 로드 후 [`ActivityCatalog::validate`]를 통과해야 한다.
pub fn load_catalog(path: &Path) -> Result<ActivityCatalog, CoreError> {
    let raw = fs::read_to_string(path)?;
    let catalog: ActivityCatalog = serde_json::from_str(&raw)?;
    catalog.validate()?;
    info!("시드 카탈로그 로드: {} ({}개 활동)", path.display(), catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), DEFAULT_SEED.len());
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.names().next(), Some("Chess Club"));

        for (_, activity) in catalog.iter() {
            assert!(!activity.description.is_empty());
            assert!(!activity.schedule.is_empty());
            assert!(activity.max_participants > 0);
        }
    }

    #[test]
    fn load_catalog_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        fs::write(
            &path,
            r#"{"Robotics": {"description": "Build robots", "schedule": "Saturdays", "max_participants": 8, "participants": ["r@mergington.edu"]}}"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get("Robotics").unwrap().participants,
            vec!["r@mergington.edu"]
        );
    }

    #[test]
    fn load_catalog_rejects_bad_input() {
        let temp_dir = TempDir::new().unwrap();

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(load_catalog(&missing), Err(CoreError::Io(_))));

        let malformed = temp_dir.path().join("malformed.json");
        fs::write(&malformed, "{ not json").unwrap();
        assert!(matches!(
            load_catalog(&malformed),
            Err(CoreError::Serialization(_))
        ));

        let zero = temp_dir.path().join("zero.json");
        fs::write(
            &zero,
            r#"{"Empty": {"description": "d", "schedule": "s", "max_participants": 0}}"#,
        )
        .unwrap();
        assert!(matches!(
            load_catalog(&zero),
            Err(CoreError::Validation { .. })
        ));

        let dup_participant = temp_dir.path().join("dup_participant.json");
        fs::write(
            &dup_participant,
            r#"{"Choir": {"description": "d", "schedule": "s", "max_participants": 5, "participants": ["a@x.edu", "a@x.edu"]}}"#,
        )
        .unwrap();
        assert!(matches!(
            load_catalog(&dup_participant),
            Err(CoreError::Validation { ref field, .. }) if field == "Choir.participants"
        ));

        let dup_activity = temp_dir.path().join("dup_activity.json");
        fs::write(
            &dup_activity,
            r#"{"Choir": {"description": "d", "schedule": "s", "max_participants": 5}, "Choir": {"description": "e", "schedule": "t", "max_participants": 6}}"#,
        )
        .unwrap();
        assert!(matches!(
            load_catalog(&dup_activity),
            Err(CoreError::Serialization(_))
        ));
    }
}
