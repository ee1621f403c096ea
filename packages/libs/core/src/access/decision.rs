//! 접근 평가 결과
//!
//! `false | { id }` 형태의 느슨한 반환값 대신 명시적인 3-상태 결과를 사용합니다.
//! 필터가 붙은 허용을 무조건 허용으로 착각할 수 없게 합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Owner 필터 (`id == <사용자 ID>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerFilter {
    pub id: String,
}

impl OwnerFilter {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// 레코드가 필터 조건을 만족하는지
    pub fn matches(&self, record: &serde_json::Map<String, Value>) -> bool {
        record.get("id").and_then(Value::as_str) == Some(self.id.as_str())
    }
}

/// 접근 평가 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// 거부
    Denied,

    /// 리스트 전체 허용
    AllowAll,

    /// 필터에 맞는 아이템만 허용
    AllowFiltered(OwnerFilter),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        !self.is_denied()
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, AccessDecision::Denied)
    }

    pub fn filter(&self) -> Option<&OwnerFilter> {
        match self {
            AccessDecision::AllowFiltered(filter) => Some(filter),
            _ => None,
        }
    }

    /// 특정 레코드에 대해 허용되는지
    pub fn permits(&self, record: &serde_json::Map<String, Value>) -> bool {
        match self {
            AccessDecision::Denied => false,
            AccessDecision::AllowAll => true,
            AccessDecision::AllowFiltered(filter) => filter.matches(record),
        }
    }

    /// 두 결과의 교집합 (list 규칙 ∧ field 규칙)
    ///
    /// Denied가 하나라도 있으면 Denied, 필터는 AllowAll을 좁히고,
    /// 서로 다른 필터 둘은 만족하는 아이템이 없으므로 Denied.
    pub fn and(self, other: AccessDecision) -> AccessDecision {
        use AccessDecision::*;

        match (self, other) {
            (Denied, _) | (_, Denied) => Denied,
            (AllowAll, AllowAll) => AllowAll,
            (AllowAll, AllowFiltered(f)) | (AllowFiltered(f), AllowAll) => AllowFiltered(f),
            (AllowFiltered(a), AllowFiltered(b)) => {
                if a == b {
                    AllowFiltered(a)
                } else {
                    Denied
                }
            }
        }
    }

    /// 짧은 표시용 문자열
    pub fn describe(&self) -> String {
        match self {
            AccessDecision::Denied => "denied".to_string(),
            AccessDecision::AllowAll => "allowed".to_string(),
            AccessDecision::AllowFiltered(filter) => format!("allowed where id = {}", filter.id),
        }
    }
}

impl From<bool> for AccessDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            AccessDecision::AllowAll
        } else {
            AccessDecision::Denied
        }
    }
}
