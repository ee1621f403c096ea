//! 프로세스 설정
//!
//! 환경변수에서 읽는 실행 설정입니다. DB 연결, 쿠키 처리 자체는 호스트
//! 프레임워크 몫이고, 여기서는 값만 모아 한 번 만들어진 뒤 변경하지 않습니다.

use std::env;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::id::IdStrategy;
use crate::initial_data::DEFAULT_ADMIN_EMAIL;

pub const PROJECT_NAME: &str = "Team Corner";

const DEV_DATABASE_URI: &str = "mongodb://127.0.0.1:27017/team-corner";
const DEV_COOKIE_SECRET: &str = "team-corner-development-cookie-secret";
const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30; // 30 days

/// 실행 설정
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// 프로젝트 이름
    pub name: String,

    /// production 모드 여부 (`TC_ENV=production`)
    pub production: bool,

    /// DB 연결 문자열
    pub database_uri: String,

    /// 세션 쿠키 설정
    pub cookie: CookieConfig,

    /// 초기 admin 이메일
    pub admin_email: String,

    /// 아이템 ID 생성 방식
    pub id_strategy: IdStrategy,
}

/// 세션 쿠키 설정
#[derive(Clone, Serialize)]
pub struct CookieConfig {
    /// HTTPS 전용 (production에서 true)
    pub secure: bool,

    /// 세션 유지 시간 (초)
    pub max_age_secs: u64,

    pub same_site: bool,

    /// 쿠키 서명 비밀값
    #[serde(skip_serializing)]
    pub secret: String,
}

impl std::fmt::Debug for CookieConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieConfig")
            .field("secure", &self.secure)
            .field("max_age_secs", &self.max_age_secs)
            .field("same_site", &self.same_site)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AppConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 key lookup에서 설정 로드
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let production = lookup("TC_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production"));

        let database_uri = match lookup("MONGO_URI") {
            Some(uri) => uri,
            None if production => return Err(missing("MONGO_URI")),
            None => DEV_DATABASE_URI.to_string(),
        };

        let secret = match lookup("TC_COOKIE_SECRET") {
            Some(secret) => secret,
            None if production => return Err(missing("TC_COOKIE_SECRET")),
            None => DEV_COOKIE_SECRET.to_string(),
        };

        let max_age_secs = match lookup("TC_COOKIE_MAX_AGE_SECS") {
            Some(raw) => raw.parse().map_err(|_| Error::Config {
                message: format!("TC_COOKIE_MAX_AGE_SECS must be a number of seconds, got '{}'", raw),
            })?,
            None => DEFAULT_COOKIE_MAX_AGE_SECS,
        };

        let id_strategy = match lookup("TC_ID_STRATEGY") {
            Some(raw) => raw.parse()?,
            None => IdStrategy::default(),
        };

        Ok(Self {
            name: PROJECT_NAME.to_string(),
            production,
            database_uri,
            cookie: CookieConfig {
                secure: production,
                max_age_secs,
                same_site: false,
                secret,
            },
            admin_email: lookup("TC_ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            id_strategy,
        })
    }
}

fn missing(key: &str) -> Error {
    Error::Config {
        message: format!("{} must be set in production", key),
    }
}
