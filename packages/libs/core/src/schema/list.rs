//! 리스트 정의

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::types::FieldType;
use crate::access::ListAccess;

/// 리스트 정의 (이름, 필드, 접근 정책)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSchema {
    /// 리스트 이름 (예: `Game`)
    pub name: String,

    /// 필드 목록 (이름순, tracking 필드는 마지막)
    pub fields: Vec<Field>,

    /// 리스트 레벨 접근 정책
    pub access: ListAccess,

    /// created/updated 자동 기록 여부
    #[serde(default)]
    pub tracking: bool,
}

impl ListSchema {
    /// 필드 조회
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// 관계 필드들
    pub fn relationship_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| matches!(f.field_type, FieldType::Relationship { .. }))
    }

    /// 유니크 필드들
    pub fn unique_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.unique)
    }
}
