//! 인메모리 활동 디렉토리 (ActivityDirectory 포트 구현).
//!
//! 활동 이름 집합은 생성 시 고정된다. 각 활동 레코드는 개별
//! `parking_lot::Mutex`로 보호되므로 신청/취소의 검사-변경 구간은
//! 활동 단위로 원자적이며, 서로 다른 활동 간에는 경합이 없다.

use async_trait::async_trait;
use mergington_core::error::CoreError;
use mergington_core::models::activity::{
    signed_up_message, unregistered_message, Activity, ActivityCatalog,
};
use mergington_core::models::seed;
use mergington_core::ports::directory::ActivityDirectory;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{debug, info};

/// 인메모리 활동 디렉토리
pub struct MemoryDirectory {
    /// 카탈로그 순서대로 정렬된 활동 레코드
    entries: Vec<(String, Mutex<Activity>)>,
    /// 이름 → `entries` 인덱스
    index: HashMap<String, usize>,
}

impl MemoryDirectory {
    /// 카탈로그로부터 디렉토리 생성
    pub fn new(catalog: ActivityCatalog) -> Self {
        let mut entries = Vec::with_capacity(catalog.len());
        let mut index = HashMap::with_capacity(catalog.len());

        for (name, activity) in catalog {
            index.insert(name.clone(), entries.len());
            entries.push((name, Mutex::new(activity)));
        }

        info!("인메모리 활동 디렉토리 초기화: {}개 활동", entries.len());
        Self { entries, index }
    }

    /// 내장 기본 카탈로그로 디렉토리 생성
    pub fn seeded() -> Self {
        Self::new(seed::default_catalog())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 이름으로 활동 잠금 조회 (대소문자 구분)
    fn slot(&self, activity: &str) -> Result<&Mutex<Activity>, CoreError> {
        self.index
            .get(activity)
            .map(|&idx| &self.entries[idx].1)
            .ok_or_else(|| CoreError::activity_not_found(activity))
    }

    /// 현재 상태 스냅샷
    pub fn snapshot(&self) -> ActivityCatalog {
        self.entries
            .iter()
            .map(|(name, slot)| (name.as_str(), slot.lock().clone()))
            .collect()
    }

    /// 참가 신청 (동기)
    pub fn register(&self, activity: &str, email: &str) -> Result<String, CoreError> {
        let slot = self.slot(activity)?;
        let mut record = slot.lock();

        if !record.add_participant(email) {
            debug!("중복 신청 거부: {} → {}", email, activity);
            return Err(CoreError::AlreadyRegistered {
                email: email.to_string(),
                activity: activity.to_string(),
            });
        }

        info!(
            "참가 신청: {} → {} ({}/{})",
            email,
            activity,
            record.participants.len(),
            record.max_participants
        );
        Ok(signed_up_message(email, activity))
    }

    /// 참가 취소 (동기)
    pub fn withdraw(&self, activity: &str, email: &str) -> Result<String, CoreError> {
        let slot = self.slot(activity)?;
        let mut record = slot.lock();

        if !record.remove_participant(email) {
            debug!("미신청 참가자 취소 거부: {} → {}", email, activity);
            return Err(CoreError::NotRegistered {
                email: email.to_string(),
                activity: activity.to_string(),
            });
        }

        info!("참가 취소: {} → {}", email, activity);
        Ok(unregistered_message(email, activity))
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ActivityDirectory for MemoryDirectory {
    async fn list(&self) -> Result<ActivityCatalog, CoreError> {
        Ok(self.snapshot())
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<String, CoreError> {
        self.register(activity, email)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, CoreError> {
        self.withdraw(activity, email)
    }
}
