//! 접근 평가 컨텍스트
//!
//! 호스트 프레임워크가 요청마다 넘겨주는 인증 정보입니다.
//! JSON 형태: `{ "authentication": { "item": { "id", "isAdmin", "isMember" } | null } }`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// 접근 평가 컨텍스트
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessContext {
    /// 인증 정보
    #[serde(default)]
    pub authentication: Authentication,
}

/// 인증 정보 (item = 로그인한 User, 없으면 익명)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    #[serde(default)]
    pub item: Option<AuthenticatedUser>,
}

/// 인증된 사용자
///
/// 평가에 필요한 최소 필드만 담습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// User ID
    pub id: String,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    pub is_member: bool,
}

impl AccessContext {
    /// 익명 컨텍스트
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// 사용자 컨텍스트
    pub fn for_user(user: AuthenticatedUser) -> Self {
        Self {
            authentication: Authentication { item: Some(user) },
        }
    }

    /// 현재 사용자
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.authentication.item.as_ref()
    }

    /// 현재 사용자 ID
    pub fn user_id(&self) -> Option<&str> {
        self.user().map(|u| u.id.as_str())
    }

    /// 인증되었는지 확인
    pub fn is_authenticated(&self) -> bool {
        self.authentication.item.is_some()
    }
}

impl AuthenticatedUser {
    /// 권한 플래그 없는 사용자
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_admin: false,
            is_member: false,
        }
    }

    pub fn member(id: impl Into<String>) -> Self {
        Self::new(id).with_member(true)
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Self::new(id).with_admin(true)
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn with_member(mut self, is_member: bool) -> Self {
        self.is_member = is_member;
        self
    }

    /// User 레코드에서 생성
    ///
    /// 인증 전략이 로그인 성공 후 세션 item으로 사용하는 형태입니다.
    pub fn from_record(record: &serde_json::Map<String, Value>) -> Result<Self> {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::validation("User", "id", "authenticated item has no id"))?;

        let flag = |name: &str| record.get(name).and_then(Value::as_bool).unwrap_or(false);

        Ok(Self {
            id: id.to_string(),
            is_admin: flag("isAdmin"),
            is_member: flag("isMember"),
        })
    }
}
