//! tc-core: Team Corner 핵심 라이브러리
//!
//! 스포츠 클럽(팀, 경기, 선수, 통계) 관리 백엔드의 리스트 선언과 접근 정책을
//! 제공합니다. 호스트 프레임워크는 매 read/create/update/delete마다 이 정책을
//! 평가합니다.
//!
//! # 모듈 구조
//!
//! - `access`: 접근 규칙, 컨텍스트, 평가기
//! - `schema`: 리스트 선언(YAML) 파싱 및 Registry
//! - `store`: 정책을 적용하는 in-memory 레퍼런스 스토어
//! - `tracking`: created/updated 자동 기록
//! - `initial_data`: 첫 admin 계정 생성
//! - `config`: 환경변수 설정
//! - `team_corner`: 초기화 진입점
//! - `error`: 공통 에러 타입
//! - `id`: ID 생성 전략

pub mod access;
pub mod config;
pub mod error;
pub mod id;
pub mod initial_data;
pub mod schema;
pub mod store;
pub mod team_corner;
pub mod tracking;

pub use error::{Error, Result};
pub use team_corner::TeamCorner;
