//! 접근 평가기
//!
//! 요청 컨텍스트에 대해 리스트/필드 접근 정책을 평가합니다.

use super::context::AccessContext;
use super::decision::AccessDecision;
use super::policy::Operation;
use crate::error::{Error, Result};
use crate::schema::SchemaRegistry;

/// 접근 평가기
///
/// Schema Registry에 선언된 정책을 읽기만 합니다. 상태가 없으므로
/// 요청마다 만들어 써도 됩니다.
#[derive(Debug, Clone, Copy)]
pub struct AccessEvaluator<'a> {
    schema: &'a SchemaRegistry,
}

impl<'a> AccessEvaluator<'a> {
    /// 새 평가기 생성
    pub fn new(schema: &'a SchemaRegistry) -> Self {
        Self { schema }
    }

    /// 리스트 작업 권한 평가
    ///
    /// 규칙이 없는 작업은 거부됩니다.
    pub fn evaluate(&self, list: &str, op: Operation, ctx: &AccessContext) -> Result<AccessDecision> {
        let list_schema = self.schema.require_list(list)?;

        let decision = match list_schema.access.get_rule(op) {
            Some(rule) => rule.evaluate(ctx),
            None => AccessDecision::Denied,
        };

        tracing::debug!(
            list,
            operation = op.as_str(),
            user = ctx.user_id(),
            decision = %decision.describe(),
            "list access evaluated"
        );

        Ok(decision)
    }

    /// 필드 작업 권한 평가
    ///
    /// 필드 override가 있으면 그 결과, 없으면 리스트 결과를 돌려줍니다.
    pub fn evaluate_field(
        &self,
        list: &str,
        field: &str,
        op: Operation,
        ctx: &AccessContext,
    ) -> Result<AccessDecision> {
        let list_schema = self.schema.require_list(list)?;
        let field_schema = list_schema
            .find_field(field)
            .ok_or_else(|| Error::UnknownField {
                list: list.to_string(),
                field: field.to_string(),
            })?;

        match field_schema.access.get_rule(op) {
            Some(rule) => Ok(rule.evaluate(ctx)),
            None => self.evaluate(list, op, ctx),
        }
    }

    /// 리스트 작업 권한 확인 (거부 시 에러)
    pub fn authorize(&self, list: &str, op: Operation, ctx: &AccessContext) -> Result<AccessDecision> {
        let decision = self.evaluate(list, op, ctx)?;

        if decision.is_denied() {
            let reason = match self.schema.require_list(list)?.access.get_rule(op) {
                Some(rule) => format!("{} required", rule),
                None => "no access rule declared".to_string(),
            };
            return Err(Error::access_denied(list, op.as_str(), reason));
        }

        Ok(decision)
    }

    /// 리스트 권한 + 쓰려는 각 필드의 override 확인
    ///
    /// 결과는 리스트 결과와 모든 필드 결과의 교집합입니다.
    /// 하나라도 거부되면 전체 작업이 거부됩니다 (부분 적용 없음).
    pub fn authorize_fields<'f>(
        &self,
        list: &str,
        op: Operation,
        fields: impl IntoIterator<Item = &'f str>,
        ctx: &AccessContext,
    ) -> Result<AccessDecision> {
        let mut decision = self.authorize(list, op, ctx)?;
        let list_schema = self.schema.require_list(list)?;

        for name in fields {
            let field = list_schema.find_field(name).ok_or_else(|| Error::UnknownField {
                list: list.to_string(),
                field: name.to_string(),
            })?;

            let Some(rule) = field.access.get_rule(op) else {
                continue;
            };

            decision = decision.and(rule.evaluate(ctx));
            if decision.is_denied() {
                tracing::debug!(list, field = name, operation = op.as_str(), "field access denied");
                return Err(Error::access_denied(
                    list,
                    op.as_str(),
                    format!("field '{}' requires {}", name, rule),
                ));
            }
        }

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::context::AuthenticatedUser;
    use crate::access::decision::OwnerFilter;
    use crate::schema::SchemaParser;

    fn sample_schema() -> SchemaRegistry {
        let yaml = r#"
lists:
  User:
    access:
      read: admin_or_owner
      update: admin_or_owner
      delete: admin
      auth: true
    fields:
      email: { type: text, unique: true }
      isAdmin:
        type: checkbox
        access:
          update: admin
      isMember: { type: checkbox }
  Game:
    tracking: true
    access:
      read: member
      update: admin_or_owner
      create: admin
      delete: admin
    fields:
      venue: { type: text, required: true }
  Team:
    access:
      read: member
      update: admin_or_owner
      create: admin
      delete: admin
    fields:
      name: { type: text, required: true }
"#;
        SchemaParser::parse_multiple(&[yaml]).unwrap()
    }

    fn member(id: &str) -> AccessContext {
        AccessContext::for_user(AuthenticatedUser::member(id))
    }

    #[test]
    fn test_anonymous_read_game_denied() {
        let schema = sample_schema();
        let evaluator = AccessEvaluator::new(&schema);

        let result = evaluator
            .evaluate("Game", Operation::Read, &AccessContext::anonymous())
            .unwrap();
        assert_eq!(result, AccessDecision::Denied);

        let err = evaluator
            .authorize("Game", Operation::Read, &AccessContext::anonymous())
            .unwrap_err();
        assert!(err.is_access_denied());
    }

    #[test]
    fn test_member_read_game_unscoped() {
        let schema = sample_schema();
        let evaluator = AccessEvaluator::new(&schema);

        let result = evaluator.evaluate("Game", Operation::Read, &member("42")).unwrap();
        assert_eq!(result, AccessDecision::AllowAll);
    }

    #[test]
    fn test_member_update_user_scoped_to_self() {
        let schema = sample_schema();
        let evaluator = AccessEvaluator::new(&schema);

        let result = evaluator.authorize("User", Operation::Update, &member("7")).unwrap();
        assert_eq!(result, AccessDecision::AllowFiltered(OwnerFilter::new("7")));

        let own = serde_json::json!({ "id": "7" }).as_object().cloned().unwrap();
        let other = serde_json::json!({ "id": "8" }).as_object().cloned().unwrap();
        assert!(result.permits(&own));
        assert!(!result.permits(&other));
    }

    #[test]
    fn test_admin_delete_team() {
        let schema = sample_schema();
        let evaluator = AccessEvaluator::new(&schema);
        let ctx = AccessContext::for_user(AuthenticatedUser::admin("7"));

        let result = evaluator.authorize("Team", Operation::Delete, &ctx).unwrap();
        assert_eq!(result, AccessDecision::AllowAll);
    }

    #[test]
    fn test_unset_create_defaults_to_deny() {
        let schema = sample_schema();
        let evaluator = AccessEvaluator::new(&schema);
        let ctx = AccessContext::for_user(AuthenticatedUser::admin("1"));

        let result = evaluator.evaluate("User", Operation::Create, &ctx).unwrap();
        assert_eq!(result, AccessDecision::Denied);
    }

    #[test]
    fn test_is_admin_field_override() {
        let schema = sample_schema();
        let evaluator = AccessEvaluator::new(&schema);
        let owner = member("7");

        // 리스트 레벨에서는 owner 수정 허용
        assert!(evaluator.evaluate("User", Operation::Update, &owner).unwrap().is_allowed());

        // isAdmin 필드는 admin만
        let field = evaluator
            .evaluate_field("User", "isAdmin", Operation::Update, &owner)
            .unwrap();
        assert_eq!(field, AccessDecision::Denied);

        let err = evaluator
            .authorize_fields("User", Operation::Update, ["email", "isAdmin"], &owner)
            .unwrap_err();
        assert!(err.is_access_denied());

        // override 없는 필드는 리스트 결과를 따름
        let scoped = evaluator
            .authorize_fields("User", Operation::Update, ["email"], &owner)
            .unwrap();
        assert_eq!(scoped, AccessDecision::AllowFiltered(OwnerFilter::new("7")));

        let admin = AccessContext::for_user(AuthenticatedUser::admin("1"));
        let allowed = evaluator
            .authorize_fields("User", Operation::Update, ["isAdmin"], &admin)
            .unwrap();
        assert_eq!(allowed, AccessDecision::AllowAll);
    }

    #[test]
    fn test_unknown_list_and_field() {
        let schema = sample_schema();
        let evaluator = AccessEvaluator::new(&schema);
        let ctx = member("1");

        assert!(matches!(
            evaluator.evaluate("Season", Operation::Read, &ctx),
            Err(Error::UnknownList { .. })
        ));
        assert!(matches!(
            evaluator.evaluate_field("Game", "score", Operation::Update, &ctx),
            Err(Error::UnknownField { .. })
        ));
    }
}
