//! 리스트 스키마(YAML) 파싱 및 Registry 생성
//!
//! # 개요
//!
//! Team Corner의 리스트는 `config/lists.yaml`로 선언됩니다.
//! 이 모듈은 YAML을 파싱하여 변경되지 않는 Schema Registry로 변환합니다.
//!
//! # 모듈 구조
//!
//! - `types`: 필드 타입 정의 (text, checkbox, relationship, etc.)
//! - `field`: 필드 정의
//! - `list`: 리스트 정의
//! - `registry`: Schema Registry (evaluator와 store가 사용하는 최종 형태)
//! - `parser`: YAML 파싱 로직

mod field;
mod list;
mod parser;
mod registry;
mod types;

pub use field::Field;
pub use list::ListSchema;
pub use parser::SchemaParser;
pub use registry::{ReferenceError, SchemaRegistry};
pub use types::{FieldType, RelationshipRef};
