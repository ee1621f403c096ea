//! 접근 제어 predicate
//!
//! 정책 규칙이 참조하는 네 가지 기본 검사입니다. 모두 부수효과 없는 순수 함수입니다.

use super::context::AccessContext;
use super::decision::{AccessDecision, OwnerFilter};

/// 인증된 사용자이고 `isAdmin`이 true인지
pub fn is_admin(ctx: &AccessContext) -> bool {
    ctx.user().is_some_and(|user| user.is_admin)
}

/// 인증된 사용자이고 `isMember`가 true인지
pub fn is_member(ctx: &AccessContext) -> bool {
    ctx.user().is_some_and(|user| user.is_member)
}

/// 자기 아이템만 허용 (익명이면 거부)
pub fn owns_item(ctx: &AccessContext) -> AccessDecision {
    match ctx.user() {
        Some(user) => AccessDecision::AllowFiltered(OwnerFilter::new(user.id.clone())),
        None => AccessDecision::Denied,
    }
}

/// Admin이면 전체 허용, 아니면 `owns_item` 결과
pub fn is_admin_or_owner(ctx: &AccessContext) -> AccessDecision {
    if is_admin(ctx) {
        AccessDecision::AllowAll
    } else {
        owns_item(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::context::AuthenticatedUser;
    use proptest::prelude::*;

    fn user_ctx(id: &str, is_admin: bool, is_member: bool) -> AccessContext {
        AccessContext::for_user(
            AuthenticatedUser::new(id)
                .with_admin(is_admin)
                .with_member(is_member),
        )
    }

    #[test]
    fn test_anonymous() {
        let ctx = AccessContext::anonymous();

        assert!(!is_admin(&ctx));
        assert!(!is_member(&ctx));
        assert_eq!(owns_item(&ctx), AccessDecision::Denied);
        assert_eq!(is_admin_or_owner(&ctx), AccessDecision::Denied);
    }

    #[test]
    fn test_flags() {
        assert!(is_admin(&user_ctx("1", true, false)));
        assert!(!is_member(&user_ctx("1", true, false)));
        assert!(is_member(&user_ctx("1", false, true)));
    }

    proptest! {
        #[test]
        fn admin_is_always_allowed(id in "[a-z0-9]{1,24}", is_member in any::<bool>()) {
            let ctx = user_ctx(&id, true, is_member);
            prop_assert_eq!(is_admin_or_owner(&ctx), AccessDecision::AllowAll);
        }

        #[test]
        fn non_admin_is_scoped_to_own_id(id in "[a-z0-9]{1,24}", is_member in any::<bool>()) {
            let ctx = user_ctx(&id, false, is_member);
            let expected = AccessDecision::AllowFiltered(OwnerFilter::new(id.clone()));

            prop_assert_eq!(owns_item(&ctx), expected.clone());
            prop_assert_eq!(is_admin_or_owner(&ctx), expected);
        }
    }
}
