//! Check 명령어
//!
//! 주어진 사용자 컨텍스트로 정책을 평가해 결정을 출력합니다.

use anyhow::Context;
use serde::Serialize;
use serde_json::json;
use tc_core::access::{AccessContext, AccessDecision, AuthenticatedUser, Operation};
use tc_core::TeamCorner;

use crate::OutputFormat;

pub struct CheckArgs<'a> {
    pub list: &'a str,
    pub op: &'a str,
    pub user: Option<&'a str>,
    pub field: Option<&'a str>,
    pub record_id: Option<&'a str>,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    list: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    operation: Operation,
    user: Option<&'a AuthenticatedUser>,
    decision: &'a AccessDecision,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    record_allowed: Option<bool>,
}

pub fn run(app: &TeamCorner, args: &CheckArgs<'_>, format: OutputFormat) -> anyhow::Result<()> {
    let op: Operation = args.op.parse()?;
    let ctx = match args.user {
        Some(raw) => {
            let user: AuthenticatedUser =
                serde_json::from_str(raw).context("--user must be a JSON object with an id")?;
            AccessContext::for_user(user)
        }
        None => AccessContext::anonymous(),
    };

    let evaluator = app.evaluator();
    let decision = match args.field {
        Some(field) => evaluator.evaluate_field(args.list, field, op, &ctx)?,
        None => evaluator.evaluate(args.list, op, &ctx)?,
    };

    let record_allowed = args.record_id.map(|id| {
        let record = json!({ "id": id });
        record
            .as_object()
            .is_some_and(|record| decision.permits(record))
    });

    let report = CheckReport {
        list: args.list,
        field: args.field,
        operation: op,
        user: ctx.user(),
        decision: &decision,
        allowed: decision.is_allowed(),
        record_allowed,
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let target = match args.field {
        Some(field) => format!("{}.{}", args.list, field),
        None => args.list.to_string(),
    };
    let who = ctx.user_id().unwrap_or("anonymous");

    println!("{} {} as {}: {}", op, target, who, decision.describe());
    if let (Some(id), Some(allowed)) = (args.record_id, record_allowed) {
        println!("  item {}: {}", id, if allowed { "allowed" } else { "denied" });
    }

    Ok(())
}
