//! Schema Registry
//!
//! 초기화 단계에서 한 번 만들어지고 이후 변경되지 않는 리스트 정의 집합입니다.
//! 전역 singleton 대신 `Arc<SchemaRegistry>`로 공유합니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::list::ListSchema;
use super::types::FieldType;
use crate::error::{Error, Result};

/// 리스트 정의 집합
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaRegistry {
    /// 리스트 맵 (리스트 이름 -> 리스트 정의)
    pub lists: HashMap<String, ListSchema>,
}

impl SchemaRegistry {
    /// 빈 registry 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 리스트 추가
    pub fn add_list(&mut self, list: ListSchema) {
        self.lists.insert(list.name.clone(), list);
    }

    /// 리스트 조회
    pub fn get_list(&self, name: &str) -> Option<&ListSchema> {
        self.lists.get(name)
    }

    /// 리스트 조회 (없으면 에러)
    pub fn require_list(&self, name: &str) -> Result<&ListSchema> {
        self.get_list(name).ok_or_else(|| Error::UnknownList {
            name: name.to_string(),
        })
    }

    /// 모든 리스트 이름 (이름순)
    pub fn list_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// 모든 리스트 (이름순)
    pub fn all_lists(&self) -> Vec<&ListSchema> {
        let mut lists: Vec<&ListSchema> = self.lists.values().collect();
        lists.sort_by(|a, b| a.name.cmp(&b.name));
        lists
    }

    /// 관계 참조 검증
    ///
    /// 대상 리스트가 존재하는지, 양방향 ref라면 역참조 필드가
    /// 선언한 리스트를 다시 가리키는지 확인합니다.
    pub fn validate_references(&self) -> Vec<ReferenceError> {
        let mut errors = Vec::new();

        for list in self.all_lists() {
            for field in list.relationship_fields() {
                let FieldType::Relationship { target, .. } = &field.field_type else {
                    continue;
                };

                let Some(target_list) = self.get_list(&target.list) else {
                    errors.push(ReferenceError::ListNotFound {
                        from_list: list.name.clone(),
                        from_field: field.name.clone(),
                        target: target.to_string(),
                    });
                    continue;
                };

                let Some(back_field_name) = &target.field else {
                    continue;
                };

                let points_back = target_list
                    .find_field(back_field_name)
                    .is_some_and(|back| match &back.field_type {
                        FieldType::Relationship { target: back_target, .. } => {
                            back_target.list == list.name
                                && back_target.field.as_deref() == Some(field.name.as_str())
                        }
                        _ => false,
                    });

                if !points_back {
                    errors.push(ReferenceError::NotReciprocal {
                        from_list: list.name.clone(),
                        from_field: field.name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        errors
    }
}

/// 참조 검증 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    ListNotFound {
        from_list: String,
        from_field: String,
        target: String,
    },
    NotReciprocal {
        from_list: String,
        from_field: String,
        target: String,
    },
}

impl From<ReferenceError> for Error {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::ListNotFound {
                from_list,
                from_field,
                target,
            }
            | ReferenceError::NotReciprocal {
                from_list,
                from_field,
                target,
            } => Error::InvalidReference {
                list: from_list,
                field: from_field,
                target,
            },
        }
    }
}
