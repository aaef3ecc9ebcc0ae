//! Validation rule engine.
//!
//! Rules are independent checks over a [`ValidationContext`]. The engine
//! runs every registered rule and merges the results: the merged result is
//! valid only if every rule's result is, and errors and warnings are
//! concatenated in registration order. Rule failures are data, never
//! `Err`s.
//!
//! # Examples
//!
//! ```rust
//! use match_tagger::validation::ValidationEngine;
//! use match_tagger::{stats, Match};
//!
//! let m = Match::demo();
//! let mut statistics = stats::compute_match_statistics(&m, &[]);
//! statistics.home_team.shots = 3;
//! statistics.home_team.shots_on_target = 5;
//!
//! let engine = ValidationEngine::with_default_rules();
//! let result = engine.validate_statistics(&statistics, &m, &[]);
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].rule_id, "shots_consistency");
//! ```

pub mod rules;


use crate::model::{LiveEvent, Match};
use crate::stats::MatchStatistics;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCategory {
    DataConsistency,
    LogicalConstraint,
    FieldBoundary,
    TeamAssignment,
    Temporal,
    Statistical,
}

impl fmt::Display for ValidationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidationCategory::DataConsistency => "data_consistency",
            ValidationCategory::LogicalConstraint => "logical_constraint",
            ValidationCategory::FieldBoundary => "field_boundary",
            ValidationCategory::TeamAssignment => "team_assignment",
            ValidationCategory::Temporal => "temporal",
            ValidationCategory::Statistical => "statistical",
        };
        write!(f, "{}", s)
    }
}

/// One finding reported by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub rule_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn error(rule_id: &str, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            message: message.into(),
            field: None,
            severity: Severity::Error,
        }
    }

    pub fn warning(rule_id: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(rule_id, message)
        }
    }

    pub fn on_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Valid exactly when `errors` is empty.
    pub fn from_errors(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    /// Always valid.
    pub fn from_warnings(warnings: Vec<ValidationIssue>) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings,
        }
    }

    pub fn merge(results: impl IntoIterator<Item = ValidationResult>) -> Self {
        results
            .into_iter()
            .fold(ValidationResult::ok(), |mut acc, r| {
                acc.valid &= r.valid;
                acc.errors.extend(r.errors);
                acc.warnings.extend(r.warnings);
                acc
            })
    }
}

/// What a rule gets to look at. Any part may be missing; rules whose
/// subject is absent report nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    pub event: Option<&'a LiveEvent>,
    pub all_events: &'a [LiveEvent],
    pub match_data: Option<&'a Match>,
    pub statistics: Option<&'a MatchStatistics>,
}

/// A single independent check.
///
/// `validate` must be pure and must not panic.
pub trait ValidationRule {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn severity(&self) -> Severity;
    fn category(&self) -> ValidationCategory;
    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult;
}

type CheckFn = Box<dyn Fn(&ValidationContext<'_>) -> ValidationResult>;

/// Rule built from a closure.
pub struct FnRule {
    id: String,
    name: String,
    description: String,
    severity: Severity,
    category: ValidationCategory,
    check: CheckFn,
}

impl FnRule {
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        category: ValidationCategory,
        check: impl Fn(&ValidationContext<'_>) -> ValidationResult + 'static,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            description: String::new(),
            id,
            severity,
            category,
            check: Box::new(check),
        }
    }

    pub fn named(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.name = name.into();
        self.description = description.into();
        self
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("category", &self.category)
            .finish()
    }
}

impl ValidationRule for FnRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn category(&self) -> ValidationCategory {
        self.category
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        (self.check)(context)
    }
}

/// Ordered set of active rules.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.rules.iter().map(|r| r.id()).collect();
        f.debug_struct("ValidationEngine").field("rules", &ids).finish()
    }
}

impl ValidationEngine {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Engine loaded with the built-in catalogue.
    pub fn with_default_rules() -> Self {
        Self {
            rules: rules::default_rules(),
        }
    }

    pub fn add_rule(&mut self, rule: impl ValidationRule + 'static) {
        debug!("Registered validation rule {}", rule.id());
        self.rules.push(Box::new(rule));
    }

    /// Remove every rule with this id. Returns whether any was removed.
    pub fn remove_rule(&mut self, id: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.id() != id);
        self.rules.len() != before
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn ValidationRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn rules_by_category(&self, category: ValidationCategory) -> Vec<&dyn ValidationRule> {
        self.rules().filter(|r| r.category() == category).collect()
    }

    /// Run every rule against `context` and merge.
    pub fn run(&self, context: &ValidationContext<'_>) -> ValidationResult {
        ValidationResult::merge(self.rules.iter().map(|r| r.validate(context)))
    }

    pub fn validate_event(&self, event: &LiveEvent, m: &Match, all_events: &[LiveEvent]) -> ValidationResult {
        self.run(&ValidationContext {
            event: Some(event),
            all_events,
            match_data: Some(m),
            statistics: None,
        })
    }

    pub fn validate_statistics(
        &self,
        statistics: &MatchStatistics,
        m: &Match,
        all_events: &[LiveEvent],
    ) -> ValidationResult {
        self.run(&ValidationContext {
            event: None,
            all_events,
            match_data: Some(m),
            statistics: Some(statistics),
        })
    }

    /// Validate each event in turn and merge the per-event results.
    pub fn validate_all_events(&self, m: &Match, events: &[LiveEvent]) -> ValidationResult {
        ValidationResult::merge(events.iter().map(|e| self.validate_event(e, m, events)))
    }
}
