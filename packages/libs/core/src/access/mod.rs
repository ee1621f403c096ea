//! 접근 정책 및 평가
//!
//! # 개요
//!
//! 리스트/필드마다 선언된 규칙(`admin`, `member`, `owner`, `admin_or_owner`)을
//! 요청의 인증 컨텍스트에 대해 평가합니다. 평가는 순수 함수이며 I/O가 없습니다.
//!
//! # 모듈 구조
//!
//! - `context`: 인증 컨텍스트
//! - `decision`: 평가 결과 (Denied / AllowAll / AllowFiltered)
//! - `predicates`: 기본 검사 함수
//! - `policy`: 규칙/정책 정의
//! - `evaluator`: 접근 평가기

mod context;
mod decision;
mod evaluator;
mod policy;
pub mod predicates;

pub use context::{AccessContext, AuthenticatedUser, Authentication};
pub use decision::{AccessDecision, OwnerFilter};
pub use evaluator::AccessEvaluator;
pub use policy::{AccessRule, FieldAccess, ListAccess, Operation};
