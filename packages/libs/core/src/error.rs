//! 공통 에러 타입
//!
//! Team Corner 전체에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Team Corner 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Schema Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("schema validation error: {message}")]
    SchemaValidation { message: String },

    #[error("duplicate list name: {name}")]
    DuplicateList { name: String },

    #[error("invalid field type: {type_name}")]
    InvalidFieldType { type_name: String },

    #[error("invalid reference: list '{list}' field '{field}' references '{target}'")]
    InvalidReference {
        list: String,
        field: String,
        target: String,
    },

    #[error("unknown list: {name}")]
    UnknownList { name: String },

    #[error("unknown field: {list}.{field}")]
    UnknownField { list: String, field: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Data Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("validation error on {list}.{field}: {message}")]
    Validation {
        list: String,
        field: String,
        message: String,
    },

    #[error("{list} item not found: {id}")]
    NotFound { list: String, id: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Access Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("access denied: {operation} on {list} ({reason})")]
    AccessDenied {
        list: String,
        operation: String,
        reason: String,
    },

    #[error("invalid operation: {name}")]
    InvalidOperation { name: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Config / ID Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("config error: {message}")]
    Config { message: String },

    #[error("unsupported id generation strategy: {strategy}")]
    UnsupportedIdStrategy { strategy: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // IO/Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 거부 에러 생성 헬퍼
    pub fn access_denied(
        list: impl Into<String>,
        operation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Error::AccessDenied {
            list: list.into(),
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// 검증 에러 생성 헬퍼
    pub fn validation(
        list: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::Validation {
            list: list.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// 권한 거부 여부 (데이터 검증 에러와 구분)
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::AccessDenied { .. })
    }

    /// HTTP 상태 코드로 변환
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Error::SchemaValidation { .. }
            | Error::InvalidFieldType { .. }
            | Error::InvalidOperation { .. }
            | Error::UnknownField { .. }
            | Error::Validation { .. }
            | Error::Yaml(_)
            | Error::Json(_) => 400,

            // 403 Forbidden
            Error::AccessDenied { .. } => 403,

            // 404 Not Found
            Error::UnknownList { .. } | Error::NotFound { .. } => 404,

            // 500 Internal Server Error
            _ => 500,
        }
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::SchemaValidation { .. } => "SCHEMA_VALIDATION_ERROR",
            Error::DuplicateList { .. } => "DUPLICATE_LIST",
            Error::InvalidFieldType { .. } => "INVALID_FIELD_TYPE",
            Error::InvalidReference { .. } => "INVALID_REFERENCE",
            Error::UnknownList { .. } => "UNKNOWN_LIST",
            Error::UnknownField { .. } => "UNKNOWN_FIELD",
            Error::Validation { .. } => "VALIDATION_ERROR",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::AccessDenied { .. } => "ACCESS_DENIED",
            Error::InvalidOperation { .. } => "INVALID_OPERATION",
            Error::Config { .. } => "CONFIG_ERROR",
            Error::UnsupportedIdStrategy { .. } => "UNSUPPORTED_ID_STRATEGY",
            Error::Yaml(_) => "YAML_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
