//! ID 생성 전략
//!
//! Store가 새 아이템을 만들 때 사용하는 ID 생성 방식입니다.
//!
//! # 지원되는 전략
//!
//! - `ulid`: ULID (기본값, 시간순 정렬 가능)
//! - `uuid_v4`: UUID v4 (랜덤)
//! - `uuid_v7`: UUID v7 (시간순 정렬 가능)
//! - `nanoid`: NanoID (짧은 ID)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// ID 생성 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// ULID (기본값) - 시간순 정렬 가능한 26자 문자열
    #[default]
    Ulid,

    /// UUID v4 - 완전 랜덤
    UuidV4,

    /// UUID v7 - 시간 기반, 정렬 가능
    UuidV7,

    /// NanoID - 짧은 랜덤 ID (21자)
    Nanoid,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Ulid => "ulid",
            IdStrategy::UuidV4 => "uuid_v4",
            IdStrategy::UuidV7 => "uuid_v7",
            IdStrategy::Nanoid => "nanoid",
        }
    }
}

impl FromStr for IdStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ulid" => Ok(IdStrategy::Ulid),
            "uuid_v4" | "uuid" => Ok(IdStrategy::UuidV4),
            "uuid_v7" => Ok(IdStrategy::UuidV7),
            "nanoid" => Ok(IdStrategy::Nanoid),
            other => Err(Error::UnsupportedIdStrategy {
                strategy: other.to_string(),
            }),
        }
    }
}

/// ID 생성기
pub struct IdGenerator;

impl IdGenerator {
    /// 전략에 따라 ID 생성
    pub fn generate(strategy: IdStrategy) -> String {
        match strategy {
            IdStrategy::Ulid => ulid::Ulid::new().to_string(),
            IdStrategy::UuidV4 => uuid::Uuid::new_v4().to_string(),
            IdStrategy::UuidV7 => uuid::Uuid::now_v7().to_string(),
            IdStrategy::Nanoid => random_string(NANOID_SIZE),
        }
    }
}

const NANOID_SIZE: usize = 21;

/// URL-safe 알파벳 랜덤 문자열 (NanoID, 초기 비밀번호 생성에 사용)
pub fn random_string(size: usize) -> String {
    use rand::Rng;

    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_-";

    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}
