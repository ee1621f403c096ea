//! 필드 타입 정의
//!
//! 저장 엔진에 독립적인 논리적 타입입니다. 값은 JSON으로 주고받습니다.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 필드 타입
///
/// # JSON 표현
///
/// - `calendar_day`는 `YYYY-MM-DD` 문자열입니다.
/// - `date_time`은 RFC 3339 문자열입니다.
/// - `relationship`은 대상 아이템 ID 문자열 (many면 배열)입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// 문자열
    Text,

    /// 불리언
    Checkbox,

    /// 비밀번호 (읽을 때 값 대신 `<name>_is_set` 반환)
    Password,

    /// 정수
    Integer,

    /// 날짜 (시각 없음)
    CalendarDay,

    /// 타임스탬프
    DateTime,

    /// 다른 아이템을 가리키는 느슨한 ID (참조 무결성 검사 없음)
    Identifier,

    /// 다른 리스트와의 관계
    Relationship {
        target: RelationshipRef,
        #[serde(default)]
        many: bool,
    },
}

/// 관계 대상 (`List` 또는 양방향 `List.field`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRef {
    pub list: String,

    /// 대상 리스트의 역참조 필드
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl RelationshipRef {
    /// `Team.games` 형태의 ref 문자열 파싱
    pub fn parse(s: &str) -> Self {
        match s.split_once('.') {
            Some((list, field)) => Self {
                list: list.to_string(),
                field: Some(field.to_string()),
            },
            None => Self {
                list: s.to_string(),
                field: None,
            },
        }
    }
}

impl fmt::Display for RelationshipRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}", self.list, field),
            None => f.write_str(&self.list),
        }
    }
}

impl FieldType {
    /// 간단한 타입 문자열에서 파싱
    ///
    /// relationship은 `ref`가 필요하므로 파서가 따로 처리합니다.
    pub fn from_simple_str(s: &str) -> Option<Self> {
        match s {
            "text" | "string" => Some(FieldType::Text),
            "checkbox" | "boolean" | "bool" => Some(FieldType::Checkbox),
            "password" => Some(FieldType::Password),
            "integer" | "int" => Some(FieldType::Integer),
            "calendar_day" => Some(FieldType::CalendarDay),
            "date_time" | "timestamp" => Some(FieldType::DateTime),
            "identifier" | "mongo_id" => Some(FieldType::Identifier),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Checkbox => "checkbox",
            FieldType::Password => "password",
            FieldType::Integer => "integer",
            FieldType::CalendarDay => "calendar_day",
            FieldType::DateTime => "date_time",
            FieldType::Identifier => "identifier",
            FieldType::Relationship { .. } => "relationship",
        }
    }

    /// 읽기 결과에서 값을 숨겨야 하는지
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldType::Password)
    }

    /// JSON 값 검증을 위한 예상 타입
    pub fn expected_json_type(&self) -> &'static str {
        match self {
            FieldType::Text | FieldType::Password => "string",
            FieldType::Checkbox => "boolean",
            FieldType::Integer => "integer",
            FieldType::CalendarDay => "string (YYYY-MM-DD)",
            FieldType::DateTime => "string (RFC 3339)",
            FieldType::Identifier => "string (id)",
            FieldType::Relationship { many: true, .. } => "array of ids",
            FieldType::Relationship { many: false, .. } => "string (id)",
        }
    }

    /// 값이 타입에 맞는지 검사 (null은 required 검사에서 다룸)
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            return true;
        }

        match self {
            FieldType::Text | FieldType::Password => value.is_string(),
            FieldType::Checkbox => value.is_boolean(),
            FieldType::Integer => value.as_i64().is_some(),
            FieldType::CalendarDay => value
                .as_str()
                .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()),
            FieldType::DateTime => value
                .as_str()
                .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok()),
            FieldType::Identifier | FieldType::Relationship { many: false, .. } => is_id(value),
            FieldType::Relationship { many: true, .. } => value
                .as_array()
                .is_some_and(|items| items.iter().all(is_id)),
        }
    }
}

fn is_id(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}
