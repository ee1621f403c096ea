//! Created/Updated tracking
//!
//! `tracking: true`인 리스트는 쓰기마다 시각과 작성자 ID를 기록합니다.
//! 필드는 시스템 필드라 클라이언트가 직접 쓸 수 없습니다.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::schema::{Field, FieldType};

pub const CREATED_AT: &str = "createdAt";
pub const UPDATED_AT: &str = "updatedAt";
pub const CREATED_BY: &str = "createdBy";
pub const UPDATED_BY: &str = "updatedBy";

/// tracking 리스트에 붙는 시스템 필드
pub fn tracking_fields() -> Vec<Field> {
    vec![
        Field::new(CREATED_AT, FieldType::DateTime).system(),
        Field::new(UPDATED_AT, FieldType::DateTime).system(),
        Field::new(CREATED_BY, FieldType::Identifier).system(),
        Field::new(UPDATED_BY, FieldType::Identifier).system(),
    ]
}

/// 생성 시 기록 (created/updated 모두)
pub fn stamp_create(
    record: &mut serde_json::Map<String, Value>,
    actor: Option<&str>,
    now: DateTime<Utc>,
) {
    let at = timestamp(now);
    let by = actor_value(actor);

    record.insert(CREATED_AT.to_string(), at.clone());
    record.insert(CREATED_BY.to_string(), by.clone());
    record.insert(UPDATED_AT.to_string(), at);
    record.insert(UPDATED_BY.to_string(), by);
}

/// 수정 시 기록 (updated만)
pub fn stamp_update(
    record: &mut serde_json::Map<String, Value>,
    actor: Option<&str>,
    now: DateTime<Utc>,
) {
    record.insert(UPDATED_AT.to_string(), timestamp(now));
    record.insert(UPDATED_BY.to_string(), actor_value(actor));
}

fn timestamp(now: DateTime<Utc>) -> Value {
    Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn actor_value(actor: Option<&str>) -> Value {
    actor.map_or(Value::Null, |id| Value::String(id.to_string()))
}
