//! Validation command implementation

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    model::{LiveEvent, Match},
    stats::compute_match_statistics,
    validation::{ValidationEngine, ValidationIssue, ValidationResult},
};

use super::common::SessionContext;

/// Per-event rules over the whole log plus the statistics rules, merged.
pub fn validate_session(m: &Match, events: &[LiveEvent]) -> ValidationResult {
    let engine = ValidationEngine::with_default_rules();
    let statistics = compute_match_statistics(m, events);
    ValidationResult::merge([
        engine.validate_all_events(m, events),
        engine.validate_statistics(&statistics, m, events),
    ])
}

fn print_issue(marker: &str, issue: &ValidationIssue) {
    match &issue.field {
        Some(field) => println!("{} [{}] {} ({})", marker, issue.rule_id, issue.message, field),
        None => println!("{} [{}] {}", marker, issue.rule_id, issue.message),
    }
}

pub fn handle_validate(session: Option<PathBuf>, as_json: bool) -> Result<()> {
    let ctx = SessionContext::open(session)?;
    let m = ctx.require_match()?;
    let result = validate_session(m, ctx.store.events());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for issue in &result.errors {
        print_issue("✗", issue);
    }
    for issue in &result.warnings {
        print_issue("⚠", issue);
    }
    if result.valid {
        println!(
            "✓ {} events valid ({} warnings)",
            ctx.store.event_count(),
            result.warnings.len()
        );
    } else {
        println!(
            "{} errors, {} warnings",
            result.errors.len(),
            result.warnings.len()
        );
    }
    Ok(())
}
