//! 필드 정의
//!
//! 리스트의 필드 메타데이터를 정의합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::FieldType;
use crate::access::FieldAccess;

/// 필드 정의
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// 필드 이름
    pub name: String,

    /// 필드 타입
    #[serde(flatten)]
    pub field_type: FieldType,

    /// 필수 여부
    #[serde(default)]
    pub required: bool,

    /// 유니크 제약
    #[serde(default)]
    pub unique: bool,

    /// 기본값 (생성 시 값이 없으면 적용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// 표시 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// 필드 레벨 접근 override
    #[serde(default, skip_serializing_if = "FieldAccess::is_empty")]
    pub access: FieldAccess,

    /// 시스템 필드 (tracking 등, 클라이언트 쓰기 불가)
    #[serde(default)]
    pub system: bool,
}

impl Field {
    /// 기본 속성의 필드 생성
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            unique: false,
            default: None,
            label: None,
            access: FieldAccess::default(),
            system: false,
        }
    }

    /// 시스템 필드로 표시
    pub fn system(mut self) -> Self {
        self.system = true;
        self
    }

    /// 클라이언트가 create/update 할 수 있는지
    pub fn allows_write(&self) -> bool {
        !self.system
    }

    /// 읽기 결과에서 숨겨야 하는지
    pub fn is_secret(&self) -> bool {
        self.field_type.is_secret()
    }

    /// 표시 이름 (label이 없으면 필드 이름)
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
