//! 접근 정책 정의
//!
//! `config/lists.yaml`의 `access` 블록 구조를 정의합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::context::AccessContext;
use super::decision::AccessDecision;
use super::predicates;
use crate::error::Error;

/// 접근 규칙 (predicate 이름)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRule {
    /// admin만 허용
    #[serde(alias = "userIsAdmin")]
    Admin,

    /// member만 허용 (리스트 전체)
    #[serde(alias = "userIsMember")]
    Member,

    /// 자기 아이템만 허용
    #[serde(alias = "userOwnsItem")]
    Owner,

    /// admin이면 전체, 아니면 자기 아이템만
    #[serde(alias = "userIsAdminOrOwner")]
    AdminOrOwner,
}

impl AccessRule {
    /// 규칙 평가
    pub fn evaluate(&self, ctx: &AccessContext) -> AccessDecision {
        match self {
            AccessRule::Admin => predicates::is_admin(ctx).into(),
            AccessRule::Member => predicates::is_member(ctx).into(),
            AccessRule::Owner => predicates::owns_item(ctx),
            AccessRule::AdminOrOwner => predicates::is_admin_or_owner(ctx),
        }
    }

    /// owner 필터를 만들 수 있는 규칙인지
    ///
    /// 익명 read에서 에러 대신 빈 결과를 돌려줄지 결정할 때 사용합니다.
    pub fn is_owner_scoped(&self) -> bool {
        matches!(self, AccessRule::Owner | AccessRule::AdminOrOwner)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRule::Admin => "admin",
            AccessRule::Member => "member",
            AccessRule::Owner => "owner",
            AccessRule::AdminOrOwner => "admin_or_owner",
        }
    }
}

impl fmt::Display for AccessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 리스트 레벨 접근 정책
///
/// 규칙이 없는 작업은 거부됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAccess {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<AccessRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<AccessRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<AccessRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<AccessRule>,

    /// 인증 전략의 대상이 될 수 있는지
    #[serde(default)]
    pub auth: bool,
}

impl ListAccess {
    /// 특정 작업의 규칙 가져오기
    pub fn get_rule(&self, op: Operation) -> Option<AccessRule> {
        match op {
            Operation::Read => self.read,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

/// 필드 레벨 접근 override
///
/// 설정된 작업만 리스트 규칙에 더해 추가로 검사합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAccess {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<AccessRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<AccessRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<AccessRule>,
}

impl FieldAccess {
    /// 특정 작업의 override 규칙 (delete는 필드 단위가 없음)
    pub fn get_rule(&self, op: Operation) -> Option<AccessRule> {
        match op {
            Operation::Read => self.read,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.read.is_none() && self.create.is_none() && self.update.is_none()
    }
}

/// CRUD 작업 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Read,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    /// 문자열로 변환
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" | "select" => Ok(Operation::Read),
            "create" | "insert" => Ok(Operation::Create),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            other => Err(Error::InvalidOperation {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_access_yaml() {
        let yaml = r#"
read: admin_or_owner
update: userIsAdminOrOwner
delete: admin
auth: true
"#;

        let access: ListAccess = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(access.get_rule(Operation::Read), Some(AccessRule::AdminOrOwner));
        assert_eq!(access.get_rule(Operation::Update), Some(AccessRule::AdminOrOwner));
        assert_eq!(access.get_rule(Operation::Create), None);
        assert_eq!(access.get_rule(Operation::Delete), Some(AccessRule::Admin));
        assert!(access.auth);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let result: Result<ListAccess, _> = serde_yaml::from_str("read: everyone");
        assert!(result.is_err());
    }

    #[test]
    fn test_field_access_has_no_delete() {
        let access = FieldAccess {
            update: Some(AccessRule::Admin),
            ..Default::default()
        };

        assert_eq!(access.get_rule(Operation::Update), Some(AccessRule::Admin));
        assert_eq!(access.get_rule(Operation::Delete), None);
        assert!(!access.is_empty());
        assert!(FieldAccess::default().is_empty());
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("READ".parse::<Operation>().unwrap(), Operation::Read);
        assert_eq!("insert".parse::<Operation>().unwrap(), Operation::Create);
        assert!("upsert".parse::<Operation>().is_err());
    }

    #[test]
    fn test_owner_scoped_rules() {
        assert!(AccessRule::AdminOrOwner.is_owner_scoped());
        assert!(AccessRule::Owner.is_owner_scoped());
        assert!(!AccessRule::Member.is_owner_scoped());
        assert!(!AccessRule::Admin.is_owner_scoped());
    }
}
