//! 활동 및 카탈로그 모델.
//!
//! 과외 활동 레코드와 이름 → 활동 매핑(카탈로그)을 표현.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use crate::error::CoreError;

/// 과외 활동 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// 활동 설명
    pub description: String,
    /// 모임 일정 (자유 형식)
    pub schedule: String,
    /// 정원 (정보용, 신청 시 검사하지 않음)
    pub max_participants: u32,
    /// 참가자 이메일 (신청 순서)
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// 참가자 없는 새 활동 생성
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// 초기 참가자 목록 설정
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// 참가 여부 확인 (대소문자 구분, 정확히 일치)
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// 참가자 추가. 이미 등록된 경우 false
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.is_registered(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// 참가자 제거. 등록되지 않은 경우 false
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }

    /// 남은 자리 수
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// 레코드 유효성 검증
    pub fn validate(&self, name: &str) -> Result<(), CoreError> {
        if self.description.trim().is_empty() {
            return Err(validation(name, "description", "설명이 비어 있음"));
        }
        if self.schedule.trim().is_empty() {
            return Err(validation(name, "schedule", "일정이 비어 있음"));
        }
        if self.max_participants == 0 {
            return Err(validation(name, "max_participants", "정원은 1 이상이어야 함"));
        }

        let mut seen = HashSet::with_capacity(self.participants.len());
        for email in &self.participants {
            if !seen.insert(email.as_str()) {
                return Err(validation(
                    name,
                    "participants",
                    &format!("중복 참가자: {email}"),
                ));
            }
        }
        Ok(())
    }
}

fn validation(activity: &str, field: &str, message: &str) -> CoreError {
    CoreError::Validation {
        field: format!("{activity}.{field}"),
        message: message.to_string(),
    }
}

/// 신청 확인 메시지
pub fn signed_up_message(email: &str, activity: &str) -> String {
    format!("Signed up {email} for {activity}")
}

/// 취소 확인 메시지
pub fn unregistered_message(email: &str, activity: &str) -> String {
    format!("Unregistered {email} from {activity}")
}

/// 이름 → 활동 카탈로그 (삽입 순서 유지)
///
/// JSON 객체로 직렬화되며 키 순서는 카탈로그 순서를 따른다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    /// 빈 카탈로그 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 활동 추가. 같은 이름이 있으면 제자리에서 교체하고 이전 값 반환
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, activity)),
            None => {
                self.entries.push((name, activity));
                None
            }
        }
    }

    /// 이름으로 활동 조회
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 활동 이름 (카탈로그 순서)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// 전체 활동 유효성 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        self.iter()
            .try_for_each(|(name, activity)| activity.validate(name))
    }
}

impl IntoIterator for ActivityCatalog {
    type Item = (String, Activity);
    type IntoIter = std::vec::IntoIter<(String, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (S, Activity)>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::new();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, a)| (n, a)))
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("활동 이름을 키로 하는 JSON 객체")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut catalog = ActivityCatalog {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            if catalog.get(&name).is_some() {
                return Err(de::Error::custom(format!("중복 활동 이름: {name}")));
            }
            catalog.entries.push((name, activity));
        }
        Ok(catalog)
    }
}
