//! Lists 명령어

use serde::Serialize;
use tc_core::access::{AccessRule, Operation};
use tc_core::schema::ListSchema;
use tc_core::TeamCorner;

use crate::OutputFormat;

#[derive(Serialize)]
struct ListSummary<'a> {
    name: &'a str,
    tracking: bool,
    auth: bool,
    read: Option<AccessRule>,
    create: Option<AccessRule>,
    update: Option<AccessRule>,
    delete: Option<AccessRule>,
    fields: Vec<FieldSummary<'a>>,
}

#[derive(Serialize)]
struct FieldSummary<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    type_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    read: Option<AccessRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    create: Option<AccessRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<AccessRule>,
}

pub fn run(app: &TeamCorner, format: OutputFormat) -> anyhow::Result<()> {
    let summaries: Vec<_> = app.schema().all_lists().into_iter().map(summarize).collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!(
        "{:<18} {:<16} {:<16} {:<16} {:<16} TRACKING",
        "LIST", "READ", "CREATE", "UPDATE", "DELETE"
    );
    for summary in &summaries {
        println!(
            "{:<18} {:<16} {:<16} {:<16} {:<16} {}",
            summary.name,
            rule_label(summary.read),
            rule_label(summary.create),
            rule_label(summary.update),
            rule_label(summary.delete),
            if summary.tracking { "yes" } else { "no" },
        );
    }

    let overrides: Vec<_> = summaries
        .iter()
        .flat_map(|list| {
            list.fields
                .iter()
                .filter(|f| f.read.is_some() || f.create.is_some() || f.update.is_some())
                .map(move |f| (list.name, f))
        })
        .collect();

    if !overrides.is_empty() {
        println!();
        println!("Field overrides:");
        for (list, field) in overrides {
            for (op, rule) in [
                (Operation::Read, field.read),
                (Operation::Create, field.create),
                (Operation::Update, field.update),
            ] {
                if let Some(rule) = rule {
                    println!("  {}.{} {}: {}", list, field.name, op, rule);
                }
            }
        }
    }

    Ok(())
}

fn summarize(list: &ListSchema) -> ListSummary<'_> {
    ListSummary {
        name: &list.name,
        tracking: list.tracking,
        auth: list.access.auth,
        read: list.access.get_rule(Operation::Read),
        create: list.access.get_rule(Operation::Create),
        update: list.access.get_rule(Operation::Update),
        delete: list.access.get_rule(Operation::Delete),
        fields: list
            .fields
            .iter()
            .map(|field| FieldSummary {
                name: &field.name,
                type_name: field.field_type.as_str(),
                read: field.access.get_rule(Operation::Read),
                create: field.access.get_rule(Operation::Create),
                update: field.access.get_rule(Operation::Update),
            })
            .collect(),
    }
}

fn rule_label(rule: Option<AccessRule>) -> &'static str {
    rule.map_or("deny", |r| r.as_str())
}
