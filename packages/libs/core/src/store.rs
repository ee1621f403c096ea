//! In-memory 리스트 스토어
//!
//! 호스트 프레임워크 역할을 하는 레퍼런스 구현입니다. 모든 CRUD 호출에서
//! 접근 정책을 적용하고, 기본값/필수/유니크/타입 검증, tracking 기록,
//! 비밀번호 숨김을 처리합니다. 영속 저장소가 아닙니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::access::{AccessContext, AccessDecision, AccessEvaluator, Operation};
use crate::error::{Error, Result};
use crate::id::{IdGenerator, IdStrategy};
use crate::schema::{FieldType, ListSchema, SchemaRegistry};
use crate::tracking;

/// 리스트 아이템 (스키마 없는 JSON object)
pub type Record = serde_json::Map<String, Value>;

/// In-memory 리스트 스토어
#[derive(Debug)]
pub struct ListStore {
    schema: Arc<SchemaRegistry>,
    id_strategy: IdStrategy,
    /// 리스트 이름 -> (ID -> 아이템)
    items: HashMap<String, BTreeMap<String, Record>>,
}

impl ListStore {
    /// 빈 스토어 생성
    pub fn new(schema: Arc<SchemaRegistry>, id_strategy: IdStrategy) -> Self {
        Self {
            schema,
            id_strategy,
            items: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    /// 리스트의 아이템 수 (접근 검사 없음, 초기화 용도)
    pub fn count(&self, list: &str) -> Result<usize> {
        self.schema.require_list(list)?;
        Ok(self.items.get(list).map_or(0, BTreeMap::len))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // CRUD
    // ─────────────────────────────────────────────────────────────────────────

    /// 아이템 생성
    pub fn create(&mut self, list: &str, data: Record, ctx: &AccessContext) -> Result<Record> {
        let schema = Arc::clone(&self.schema);
        let evaluator = AccessEvaluator::new(&schema);

        evaluator.authorize_fields(list, Operation::Create, data.keys().map(String::as_str), ctx)?;

        self.insert(list, data, ctx.user_id(), Some(ctx))
    }

    /// 신뢰된 생성 (접근 검사 생략, 검증/기록은 동일)
    ///
    /// initial data seeding에서만 사용합니다.
    pub fn seed(&mut self, list: &str, data: Record) -> Result<Record> {
        self.insert(list, data, None, None)
    }

    /// 리스트 조회
    ///
    /// owner 필터가 있으면 해당 아이템만 돌려줍니다. owner 규칙 리스트를
    /// 익명으로 읽으면 에러 대신 빈 결과입니다.
    pub fn query(&self, list: &str, ctx: &AccessContext) -> Result<Vec<Record>> {
        let list_schema = self.schema.require_list(list)?;
        let Some(decision) = self.authorize_read(list_schema, ctx)? else {
            return Ok(Vec::new());
        };

        let records = self
            .items
            .get(list)
            .into_iter()
            .flat_map(|items| items.values())
            .filter(|record| decision.permits(record))
            .map(|record| present(list_schema, record, Some(ctx)))
            .collect();

        Ok(records)
    }

    /// 단일 아이템 조회 (없거나 필터 밖이면 None)
    pub fn get(&self, list: &str, id: &str, ctx: &AccessContext) -> Result<Option<Record>> {
        let list_schema = self.schema.require_list(list)?;
        let Some(decision) = self.authorize_read(list_schema, ctx)? else {
            return Ok(None);
        };

        Ok(self
            .items
            .get(list)
            .and_then(|items| items.get(id))
            .filter(|record| decision.permits(record))
            .map(|record| present(list_schema, record, Some(ctx))))
    }

    /// 아이템 수정
    pub fn update(&mut self, list: &str, id: &str, data: Record, ctx: &AccessContext) -> Result<Record> {
        let schema = Arc::clone(&self.schema);
        let evaluator = AccessEvaluator::new(&schema);
        let list_schema = schema.require_list(list)?;

        let decision =
            evaluator.authorize_fields(list, Operation::Update, data.keys().map(String::as_str), ctx)?;
        check_writable(list_schema, &data)?;

        let existing = self.find_scoped(list, id, &decision, Operation::Update)?;

        let mut merged = existing.clone();
        merged.extend(data);
        self.validate(list_schema, &merged, Some(id))?;

        if list_schema.tracking {
            tracking::stamp_update(&mut merged, ctx.user_id(), Utc::now());
        }

        tracing::debug!(list, id, user = ctx.user_id(), "item updated");

        let output = present(list_schema, &merged, Some(ctx));
        let previous = self
            .items
            .entry(list.to_string())
            .or_default()
            .insert(id.to_string(), merged.clone());
        self.sync_back_references(list_schema, id, previous.as_ref(), Some(&merged));

        Ok(output)
    }

    /// 아이템 삭제 (hard delete)
    pub fn delete(&mut self, list: &str, id: &str, ctx: &AccessContext) -> Result<Record> {
        let schema = Arc::clone(&self.schema);
        let evaluator = AccessEvaluator::new(&schema);
        let list_schema = schema.require_list(list)?;

        let decision = evaluator.authorize(list, Operation::Delete, ctx)?;

        self.find_scoped(list, id, &decision, Operation::Delete)?;

        let removed = self
            .items
            .get_mut(list)
            .and_then(|items| items.remove(id))
            .ok_or_else(|| not_found(list, id))?;
        self.sync_back_references(list_schema, id, Some(&removed), None);

        tracing::debug!(list, id, user = ctx.user_id(), "item deleted");

        Ok(present(list_schema, &removed, Some(ctx)))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn insert(
        &mut self,
        list: &str,
        data: Record,
        actor: Option<&str>,
        ctx: Option<&AccessContext>,
    ) -> Result<Record> {
        let schema = Arc::clone(&self.schema);
        let list_schema = schema.require_list(list)?;

        check_writable(list_schema, &data)?;

        let mut record = data;
        for field in &list_schema.fields {
            if let Some(default) = &field.default {
                record
                    .entry(field.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }

        self.validate(list_schema, &record, None)?;

        let id = IdGenerator::generate(self.id_strategy);
        record.insert("id".to_string(), Value::String(id.clone()));

        if list_schema.tracking {
            tracking::stamp_create(&mut record, actor, Utc::now());
        }

        tracing::debug!(list, id = %id, user = actor, "item created");

        let output = present(list_schema, &record, ctx);
        self.items
            .entry(list.to_string())
            .or_default()
            .insert(id.clone(), record.clone());
        self.sync_back_references(list_schema, &id, None, Some(&record));

        Ok(output)
    }

    /// read 권한 확인
    ///
    /// `Ok(None)`은 익명 사용자가 owner 규칙 리스트를 읽는 경우로, 빈 결과를 뜻합니다.
    fn authorize_read(
        &self,
        list_schema: &ListSchema,
        ctx: &AccessContext,
    ) -> Result<Option<AccessDecision>> {
        let owner_scoped = list_schema
            .access
            .get_rule(Operation::Read)
            .is_some_and(|rule| rule.is_owner_scoped());

        match AccessEvaluator::new(&self.schema).authorize(&list_schema.name, Operation::Read, ctx) {
            Ok(decision) => Ok(Some(decision)),
            Err(err) if err.is_access_denied() && owner_scoped && !ctx.is_authenticated() => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn find(&self, list: &str, id: &str) -> Result<&Record> {
        self.items
            .get(list)
            .and_then(|items| items.get(id))
            .ok_or_else(|| not_found(list, id))
    }

    /// 결정의 필터를 적용해 아이템 조회
    ///
    /// owner 필터가 있으면 없는 아이템과 필터 밖 아이템을 똑같이 거부합니다.
    fn find_scoped(
        &self,
        list: &str,
        id: &str,
        decision: &AccessDecision,
        op: Operation,
    ) -> Result<&Record> {
        let outside = || Error::access_denied(list, op.as_str(), "item outside owner filter");

        match self.find(list, id) {
            Ok(record) if decision.permits(record) => Ok(record),
            Ok(_) => Err(outside()),
            Err(_) if decision.filter().is_some() => Err(outside()),
            Err(err) => Err(err),
        }
    }

    /// 필수/타입/유니크 검증
    fn validate(&self, list_schema: &ListSchema, record: &Record, self_id: Option<&str>) -> Result<()> {
        for field in list_schema.fields.iter().filter(|f| !f.system) {
            let value = record.get(&field.name).unwrap_or(&Value::Null);

            if value.is_null() {
                if field.required {
                    return Err(Error::validation(&list_schema.name, &field.name, "required field missing"));
                }
                continue;
            }

            if !field.field_type.accepts(value) {
                return Err(Error::validation(
                    &list_schema.name,
                    &field.name,
                    format!("expected {}", field.field_type.expected_json_type()),
                ));
            }

            if let FieldType::Relationship { target, .. } = &field.field_type {
                if let Some(missing) = relationship_ids(value)
                    .into_iter()
                    .find(|id| !self.contains(&target.list, id))
                {
                    return Err(Error::validation(
                        &list_schema.name,
                        &field.name,
                        format!("{} item '{}' does not exist", target.list, missing),
                    ));
                }
            }
        }

        for field in list_schema.unique_fields() {
            let Some(value) = record.get(&field.name).filter(|v| !v.is_null()) else {
                continue;
            };
            if self.is_taken(&list_schema.name, &field.name, value, self_id) {
                return Err(Error::validation(&list_schema.name, &field.name, "value must be unique"));
            }
        }

        Ok(())
    }

    fn contains(&self, list: &str, id: &str) -> bool {
        self.items.get(list).is_some_and(|items| items.contains_key(id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Back references
    // ─────────────────────────────────────────────────────────────────────────

    /// 양방향 관계(`ref: List.field`)의 역참조 필드 갱신
    ///
    /// `before`에만 있는 대상에서는 이 아이템을 빼고, `after`에만 있는 대상에는 넣습니다.
    fn sync_back_references(
        &mut self,
        list_schema: &ListSchema,
        id: &str,
        before: Option<&Record>,
        after: Option<&Record>,
    ) {
        let schema = Arc::clone(&self.schema);

        for field in list_schema.relationship_fields() {
            let FieldType::Relationship { target, .. } = &field.field_type else {
                continue;
            };
            let Some(back_field) = target.field.as_deref() else {
                continue;
            };
            let back_many = schema
                .get_list(&target.list)
                .and_then(|t| t.find_field(back_field))
                .is_some_and(|f| matches!(f.field_type, FieldType::Relationship { many: true, .. }));

            let old_ids = relationship_ids(before.and_then(|r| r.get(&field.name)).unwrap_or(&Value::Null));
            let new_ids = relationship_ids(after.and_then(|r| r.get(&field.name)).unwrap_or(&Value::Null));

            for target_id in old_ids.iter().filter(|t| !new_ids.contains(t)) {
                self.unlink(&target.list, target_id, back_field, id);
            }

            for target_id in new_ids.iter().filter(|t| !old_ids.contains(t)) {
                if !back_many {
                    // 단일 역참조를 덮어쓰면 이전 소유자의 정방향 참조도 끊음
                    let previous = self
                        .items
                        .get(&target.list)
                        .and_then(|items| items.get(target_id))
                        .and_then(|r| r.get(back_field))
                        .and_then(Value::as_str)
                        .filter(|prev| *prev != id)
                        .map(str::to_string);
                    if let Some(previous) = previous {
                        self.unlink(&list_schema.name, &previous, &field.name, target_id);
                    }
                }
                self.link(&target.list, target_id, back_field, back_many, id);
            }
        }
    }

    fn link(&mut self, list: &str, id: &str, field: &str, many: bool, value: &str) {
        let Some(record) = self.items.get_mut(list).and_then(|items| items.get_mut(id)) else {
            return;
        };

        if many {
            let ids = record
                .entry(field.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            if !ids.is_array() {
                *ids = Value::Array(Vec::new());
            }
            if let Value::Array(ids) = ids {
                if !ids.iter().any(|v| v.as_str() == Some(value)) {
                    ids.push(Value::String(value.to_string()));
                }
            }
        } else {
            record.insert(field.to_string(), Value::String(value.to_string()));
        }

        tracing::debug!(list, id, field, linked = value, "back reference linked");
    }

    fn unlink(&mut self, list: &str, id: &str, field: &str, value: &str) {
        let Some(record) = self.items.get_mut(list).and_then(|items| items.get_mut(id)) else {
            return;
        };

        match record.get_mut(field) {
            Some(Value::Array(ids)) => ids.retain(|v| v.as_str() != Some(value)),
            Some(current) if current.as_str() == Some(value) => *current = Value::Null,
            _ => return,
        }

        tracing::debug!(list, id, field, unlinked = value, "back reference unlinked");
    }

    fn is_taken(&self, list: &str, field: &str, value: &Value, self_id: Option<&str>) -> bool {
        self.items.get(list).is_some_and(|items| {
            items
                .iter()
                .any(|(id, record)| Some(id.as_str()) != self_id && record.get(field) == Some(value))
        })
    }
}

/// 클라이언트가 쓸 수 없는 필드 거부
fn check_writable(list_schema: &ListSchema, data: &Record) -> Result<()> {
    for name in data.keys() {
        let field = list_schema.find_field(name).ok_or_else(|| Error::UnknownField {
            list: list_schema.name.clone(),
            field: name.clone(),
        })?;

        if !field.allows_write() {
            return Err(Error::validation(&list_schema.name, name, "field is read-only"));
        }
    }

    Ok(())
}

/// 응답용 아이템 생성
///
/// 비밀번호는 `<name>_is_set`으로 바꾸고, read override가 거부하는 필드는 뺍니다.
fn present(list_schema: &ListSchema, record: &Record, ctx: Option<&AccessContext>) -> Record {
    let mut output = record.clone();

    for field in &list_schema.fields {
        if field.is_secret() {
            let is_set = output
                .remove(&field.name)
                .is_some_and(|v| v.as_str().is_some_and(|s| !s.is_empty()));
            output.insert(format!("{}_is_set", field.name), Value::Bool(is_set));
        }

        if let (Some(ctx), Some(rule)) = (ctx, field.access.get_rule(Operation::Read)) {
            if !rule.evaluate(ctx).permits(record) {
                output.remove(&field.name);
            }
        }
    }

    output
}

/// 관계 값에서 ID 목록 추출 (단일/다중 공통)
fn relationship_ids(value: &Value) -> Vec<String> {
    match value {
        Value::String(id) => vec![id.clone()],
        Value::Array(ids) => ids
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn not_found(list: &str, id: &str) -> Error {
    Error::NotFound {
        list: list.to_string(),
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AuthenticatedUser;
    use crate::schema::SchemaParser;
    use serde_json::json;

    fn sample_store() -> ListStore {
        let yaml = r#"
lists:
  User:
    access:
      read: admin_or_owner
      update: admin_or_owner
      delete: admin
    fields:
      email: { type: text, unique: true }
      isAdmin:
        type: checkbox
        access:
          update: admin
      isMember: { type: checkbox }
      password: { type: password }
  Game:
    tracking: true
    access:
      read: member
      update: admin_or_owner
      create: admin
      delete: admin
    fields:
      competition: { type: text, required: true, default: League }
      venue: { type: text, required: true }
      date: { type: calendar_day }
      team: { type: relationship, ref: Team.games }
  Team:
    access:
      read: member
      update: admin_or_owner
      create: admin
      delete: admin
    fields:
      name: { type: text, required: true }
      games: { type: relationship, ref: Game.team, many: true }
"#;
        let schema = SchemaParser::parse_multiple(&[yaml]).unwrap();
        ListStore::new(Arc::new(schema), IdStrategy::Ulid)
    }

    fn data(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn id_of(record: &Record) -> String {
        record["id"].as_str().unwrap().to_string()
    }

    fn admin() -> AccessContext {
        AccessContext::for_user(AuthenticatedUser::admin("admin").with_member(true))
    }

    fn member(id: &str) -> AccessContext {
        AccessContext::for_user(AuthenticatedUser::member(id))
    }

    #[test]
    fn test_create_applies_defaults_and_tracking() {
        let mut store = sample_store();

        let game = store
            .create("Game", data(json!({ "venue": "Castlelyons" })), &admin())
            .unwrap();

        assert_eq!(game["competition"], json!("League"));
        assert_eq!(game[tracking::CREATED_BY], json!("admin"));
        assert!(game[tracking::CREATED_AT].is_string());
        assert_eq!(id_of(&game).len(), 26);
    }

    #[test]
    fn test_member_cannot_create_game() {
        let mut store = sample_store();

        let err = store
            .create("Game", data(json!({ "venue": "Fermoy" })), &member("42"))
            .unwrap_err();
        assert!(err.is_access_denied());
        assert_eq!(store.count("Game").unwrap(), 0);
    }

    #[test]
    fn test_validation_errors_are_not_access_errors() {
        let mut store = sample_store();

        let missing = store.create("Game", data(json!({})), &admin()).unwrap_err();
        assert!(matches!(missing, Error::Validation { .. }));

        let bad_date = store
            .create("Game", data(json!({ "venue": "Fermoy", "date": "May 30" })), &admin())
            .unwrap_err();
        assert!(matches!(bad_date, Error::Validation { .. }));

        let system = store
            .create("Game", data(json!({ "venue": "Fermoy", "createdBy": "x" })), &admin())
            .unwrap_err();
        assert!(matches!(system, Error::Validation { .. }));
    }

    #[test]
    fn test_read_game_by_role() {
        let mut store = sample_store();
        store
            .create("Game", data(json!({ "venue": "Castlelyons" })), &admin())
            .unwrap();

        let err = store.query("Game", &AccessContext::anonymous()).unwrap_err();
        assert!(err.is_access_denied());

        let games = store.query("Game", &member("42")).unwrap();
        assert_eq!(games.len(), 1);
    }

    #[test]
    fn test_user_owner_scoping() {
        let mut store = sample_store();
        let seven = store
            .seed("User", data(json!({ "email": "seven@club.ie", "isMember": true })))
            .unwrap();
        let eight = store
            .seed("User", data(json!({ "email": "eight@club.ie", "isMember": true })))
            .unwrap();
        let seven_id = id_of(&seven);
        let eight_id = id_of(&eight);
        let ctx = member(&seven_id);

        // read: 자기 것만
        let users = store.query("User", &ctx).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(id_of(&users[0]), seven_id);
        assert!(store.get("User", &eight_id, &ctx).unwrap().is_none());

        // update: 자기 것은 허용, 남의 것은 거부
        let updated = store
            .update("User", &seven_id, data(json!({ "email": "7@club.ie" })), &ctx)
            .unwrap();
        assert_eq!(updated["email"], json!("7@club.ie"));

        let err = store
            .update("User", &eight_id, data(json!({ "email": "x@club.ie" })), &ctx)
            .unwrap_err();
        assert!(err.is_access_denied());

        // 익명: owner 규칙 read는 빈 결과
        assert!(store.query("User", &AccessContext::anonymous()).unwrap().is_empty());
    }

    #[test]
    fn test_owner_cannot_promote_self() {
        let mut store = sample_store();
        let user = store
            .seed("User", data(json!({ "email": "seven@club.ie", "isAdmin": false })))
            .unwrap();
        let id = id_of(&user);

        let err = store
            .update("User", &id, data(json!({ "isAdmin": true })), &member(&id))
            .unwrap_err();
        assert!(err.is_access_denied());

        let promoted = store
            .update("User", &id, data(json!({ "isAdmin": true })), &admin())
            .unwrap();
        assert_eq!(promoted["isAdmin"], json!(true));
    }

    #[test]
    fn test_password_never_returned() {
        let mut store = sample_store();
        let user = store
            .seed("User", data(json!({ "email": "a@club.ie", "password": "hurling123" })))
            .unwrap();

        assert!(user.get("password").is_none());
        assert_eq!(user["password_is_set"], json!(true));

        let fetched = store.get("User", &id_of(&user), &admin()).unwrap().unwrap();
        assert!(fetched.get("password").is_none());
    }

    #[test]
    fn test_unique_email() {
        let mut store = sample_store();
        store.seed("User", data(json!({ "email": "a@club.ie" }))).unwrap();

        let err = store.seed("User", data(json!({ "email": "a@club.ie" }))).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_update_stamps_tracking() {
        let mut store = sample_store();
        let game = store
            .create("Game", data(json!({ "venue": "Castlelyons" })), &admin())
            .unwrap();
        let id = id_of(&game);

        let other_admin = AccessContext::for_user(AuthenticatedUser::admin("admin2"));
        let updated = store
            .update("Game", &id, data(json!({ "venue": "Páirc Uí Chaoimh" })), &other_admin)
            .unwrap();

        assert_eq!(updated[tracking::CREATED_BY], json!("admin"));
        assert_eq!(updated[tracking::UPDATED_BY], json!("admin2"));
    }

    #[test]
    fn test_delete_requires_admin() {
        let mut store = sample_store();
        let game = store
            .create("Game", data(json!({ "venue": "Castlelyons" })), &admin())
            .unwrap();
        let id = id_of(&game);

        assert!(store.delete("Game", &id, &member("42")).unwrap_err().is_access_denied());

        store.delete("Game", &id, &admin()).unwrap();
        assert_eq!(store.count("Game").unwrap(), 0);

        let err = store.delete("Game", &id, &admin()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_unique_email_on_update() {
        let mut store = sample_store();
        let a = store.seed("User", data(json!({ "email": "a@club.ie" }))).unwrap();
        let b = store.seed("User", data(json!({ "email": "b@club.ie" }))).unwrap();

        let err = store
            .update("User", &id_of(&b), data(json!({ "email": "a@club.ie" })), &admin())
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));

        // 자기 자신의 값은 중복이 아님
        let same = store
            .update("User", &id_of(&a), data(json!({ "email": "a@club.ie" })), &admin())
            .unwrap();
        assert_eq!(same["email"], json!("a@club.ie"));
    }

    #[test]
    fn test_anonymous_get_user_is_none() {
        let mut store = sample_store();
        let user = store.seed("User", data(json!({ "email": "a@club.ie" }))).unwrap();

        let fetched = store.get("User", &id_of(&user), &AccessContext::anonymous()).unwrap();
        assert!(fetched.is_none());
    }

    #[test]
    fn test_scoped_write_hides_missing_items() {
        let mut store = sample_store();
        let seven = store.seed("User", data(json!({ "email": "seven@club.ie" }))).unwrap();
        let other = store.seed("User", data(json!({ "email": "other@club.ie" }))).unwrap();
        let ctx = member(&id_of(&seven));

        let existing = store
            .update("User", &id_of(&other), data(json!({ "email": "x@club.ie" })), &ctx)
            .unwrap_err();
        let missing = store
            .update("User", "no-such-user", data(json!({ "email": "x@club.ie" })), &ctx)
            .unwrap_err();

        assert!(missing.is_access_denied());
        assert_eq!(existing.status_code(), missing.status_code());
        assert_eq!(existing.code(), missing.code());

        // 필터 없는 admin은 그대로 NotFound
        let err = store
            .update("User", "no-such-user", data(json!({ "email": "x@club.ie" })), &admin())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_relationship_target_must_exist() {
        let mut store = sample_store();

        let err = store
            .create(
                "Game",
                data(json!({ "venue": "Fermoy", "team": "no-such-team" })),
                &admin(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "team"));
        assert_eq!(store.count("Game").unwrap(), 0);
    }

    #[test]
    fn test_back_references_follow_writes() {
        let mut store = sample_store();
        let seniors = store
            .create("Team", data(json!({ "name": "Seniors" })), &admin())
            .unwrap();
        let minors = store
            .create("Team", data(json!({ "name": "Minors" })), &admin())
            .unwrap();
        let (seniors, minors) = (id_of(&seniors), id_of(&minors));

        let games_of = |store: &ListStore, team: &str| {
            store.get("Team", team, &admin()).unwrap().unwrap()["games"].clone()
        };

        let game = store
            .create("Game", data(json!({ "venue": "Fermoy", "team": seniors })), &admin())
            .unwrap();
        let game_id = id_of(&game);
        assert_eq!(games_of(&store, &seniors), json!([game_id]));

        store
            .update("Game", &game_id, data(json!({ "team": minors })), &admin())
            .unwrap();
        assert_eq!(games_of(&store, &seniors), json!([]));
        assert_eq!(games_of(&store, &minors), json!([game_id]));

        // 반대 방향: Team.games를 쓰면 Game.team이 바뀜
        store
            .update("Team", &seniors, data(json!({ "games": [game_id] })), &admin())
            .unwrap();
        let moved = store.get("Game", &game_id, &admin()).unwrap().unwrap();
        assert_eq!(moved["team"], json!(seniors));
        assert_eq!(games_of(&store, &minors), json!([]));

        store.delete("Game", &game_id, &admin()).unwrap();
        assert_eq!(games_of(&store, &seniors), json!([]));
    }
}
