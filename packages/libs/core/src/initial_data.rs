//! 초기 데이터
//!
//! 스토어를 처음 열 때 User 리스트가 비어 있으면 admin 계정을 하나 만듭니다.
//! User.create 규칙이 없으므로 신뢰된 `seed` 경로를 사용합니다.

use serde_json::json;

use crate::access::AuthenticatedUser;
use crate::error::Result;
use crate::id::random_string;
use crate::store::{ListStore, Record};

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

const USER_LIST: &str = "User";
const PASSWORD_LENGTH: usize = 16;

/// 생성된 admin 계정 정보 (비밀번호는 이때 한 번만 노출)
#[derive(Debug, Clone)]
pub struct SeededAdmin {
    pub id: String,
    pub email: String,
    pub password: String,
}

/// User 리스트가 비어 있으면 admin 생성
pub fn initialise_data(store: &mut ListStore, admin_email: &str) -> Result<Option<SeededAdmin>> {
    if store.count(USER_LIST)? > 0 {
        tracing::debug!("users already present, skipping initial data");
        return Ok(None);
    }

    let password = random_string(PASSWORD_LENGTH);
    let data: Record = serde_json::from_value(json!({
        "firstName": "Admin",
        "lastName": "User",
        "email": admin_email,
        "isAdmin": true,
        "isMember": true,
        "password": password,
    }))?;

    let created = store.seed(USER_LIST, data)?;
    let admin = AuthenticatedUser::from_record(&created)?;

    tracing::info!(
        email = admin_email,
        password = %password,
        is_admin = admin.is_admin,
        "initial admin user created"
    );

    Ok(Some(SeededAdmin {
        id: admin.id,
        email: admin_email.to_string(),
        password,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{AccessContext, AuthenticatedUser};
    use crate::id::IdStrategy;
    use crate::schema::SchemaParser;
    use std::sync::Arc;

    fn user_store() -> ListStore {
        let yaml = r#"
lists:
  User:
    access:
      read: admin_or_owner
    fields:
      firstName: { type: text }
      lastName: { type: text }
      email: { type: text, unique: true }
      isAdmin: { type: checkbox }
      isMember: { type: checkbox }
      password: { type: password }
"#;
        let schema = SchemaParser::parse_multiple(&[yaml]).unwrap();
        ListStore::new(Arc::new(schema), IdStrategy::Ulid)
    }

    #[test]
    fn test_seeds_admin_once() {
        let mut store = user_store();

        let admin = initialise_data(&mut store, "coach@castlelyons.ie").unwrap().unwrap();
        assert_eq!(admin.email, "coach@castlelyons.ie");
        assert_eq!(admin.password.len(), PASSWORD_LENGTH);

        let ctx = AccessContext::for_user(AuthenticatedUser::admin(admin.id.clone()));
        let record = store.get("User", &admin.id, &ctx).unwrap().unwrap();
        assert_eq!(record["isAdmin"], json!(true));
        assert_eq!(record["password_is_set"], json!(true));

        assert!(initialise_data(&mut store, "coach@castlelyons.ie").unwrap().is_none());
        assert_eq!(store.count("User").unwrap(), 1);
    }
}
