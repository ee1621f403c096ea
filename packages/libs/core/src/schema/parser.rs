//! 리스트 YAML 파서
//!
//! `config/lists.yaml` 형태의 선언을 파싱하여 Schema Registry로 변환합니다.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde_json::Value;

use super::field::Field;
use super::list::ListSchema;
use super::registry::SchemaRegistry;
use super::types::{FieldType, RelationshipRef};
use crate::access::{FieldAccess, ListAccess};
use crate::error::{Error, Result};
use crate::tracking;

/// 리스트 파서
pub struct SchemaParser;

impl SchemaParser {
    /// 단일 YAML 문자열 파싱
    pub fn parse_yaml(yaml: &str) -> Result<Vec<ListSchema>> {
        let raw: RawSchema = serde_yaml::from_str(yaml)?;
        Self::convert_raw_schema(raw)
    }

    /// 여러 YAML 문서를 파싱하여 Registry 생성
    pub fn parse_multiple(yamls: &[&str]) -> Result<SchemaRegistry> {
        let mut all_lists = Vec::new();

        for yaml in yamls {
            let lists = Self::parse_yaml(yaml)?;
            all_lists.extend(lists);
        }

        Self::build_registry(all_lists)
    }

    /// 리스트 목록을 Registry로 변환
    pub fn build_registry(lists: Vec<ListSchema>) -> Result<SchemaRegistry> {
        let mut registry = SchemaRegistry::new();
        let mut names = HashSet::new();

        for list in lists {
            // 리스트 이름 중복 검사
            if !names.insert(list.name.clone()) {
                return Err(Error::DuplicateList {
                    name: list.name.clone(),
                });
            }

            registry.add_list(list);
        }

        // 참조 검증
        if let Some(error) = registry.validate_references().into_iter().next() {
            return Err(error.into());
        }

        tracing::debug!(lists = registry.lists.len(), "schema registry built");

        Ok(registry)
    }

    /// Raw 스키마를 리스트 목록으로 변환
    fn convert_raw_schema(raw: RawSchema) -> Result<Vec<ListSchema>> {
        let mut lists = Vec::new();

        for (name, raw_list) in raw.lists {
            lists.push(Self::convert_raw_list(name, raw_list)?);
        }

        // 이름순 정렬 (일관성)
        lists.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(lists)
    }

    /// Raw 리스트 변환
    fn convert_raw_list(name: String, raw: RawList) -> Result<ListSchema> {
        let tracking = raw.tracking.unwrap_or(false);
        let mut fields = Self::convert_raw_fields(&name, raw.fields)?;

        if tracking {
            for field in tracking::tracking_fields() {
                if fields.iter().any(|f| f.name == field.name) {
                    return Err(Error::SchemaValidation {
                        message: format!(
                            "list '{}' declares '{}' which is reserved for tracking",
                            name, field.name
                        ),
                    });
                }
                fields.push(field);
            }
        }

        Ok(ListSchema {
            name,
            fields,
            access: raw.access.unwrap_or_default(),
            tracking,
        })
    }

    /// Raw 필드들 변환
    fn convert_raw_fields(list: &str, raw: Option<HashMap<String, RawField>>) -> Result<Vec<Field>> {
        let Some(raw_fields) = raw else {
            return Ok(Vec::new());
        };

        let mut fields = Vec::new();

        for (name, raw_field) in raw_fields {
            fields.push(Self::convert_raw_field(list, name, raw_field)?);
        }

        // 이름순 정렬 (일관성)
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(fields)
    }

    /// Raw 필드 변환
    fn convert_raw_field(list: &str, name: String, raw: RawField) -> Result<Field> {
        let field_type = Self::parse_field_type(list, &name, &raw)?;

        if let Some(default) = &raw.default {
            if default.is_null() || !field_type.accepts(default) {
                return Err(Error::SchemaValidation {
                    message: format!(
                        "default for {}.{} must be {}",
                        list,
                        name,
                        field_type.expected_json_type()
                    ),
                });
            }
        }

        Ok(Field {
            name,
            field_type,
            required: raw.required.unwrap_or(false),
            unique: raw.unique.unwrap_or(false),
            default: raw.default,
            label: raw.label,
            access: raw.access.unwrap_or_default(),
            system: false,
        })
    }

    /// 필드 타입 파싱
    fn parse_field_type(list: &str, name: &str, raw: &RawField) -> Result<FieldType> {
        let type_str = raw.field_type.as_deref().unwrap_or("text");

        // Simple types
        if let Some(simple) = FieldType::from_simple_str(type_str) {
            return Ok(simple);
        }

        // Relationship type
        if type_str == "relationship" {
            let target = raw.target.as_deref().ok_or_else(|| Error::SchemaValidation {
                message: format!("relationship {}.{} requires 'ref'", list, name),
            })?;

            return Ok(FieldType::Relationship {
                target: RelationshipRef::parse(target),
                many: raw.many.unwrap_or(false),
            });
        }

        Err(Error::InvalidFieldType {
            type_name: type_str.to_string(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw YAML 구조체 (serde 역직렬화용)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawSchema {
    #[serde(default = "default_version")]
    #[allow(dead_code)]
    version: u32,
    lists: HashMap<String, RawList>,
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawList {
    tracking: Option<bool>,
    access: Option<ListAccess>,
    fields: Option<HashMap<String, RawField>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    #[serde(rename = "type")]
    field_type: Option<String>,
    required: Option<bool>,
    unique: Option<bool>,
    default: Option<Value>,
    label: Option<String>,
    access: Option<FieldAccess>,
    // Relationship specific
    #[serde(rename = "ref")]
    target: Option<String>,
    many: Option<bool>,
}
