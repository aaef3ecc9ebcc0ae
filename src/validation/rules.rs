//! Built-in validation rules.

use super::{
    Severity, ValidationCategory, ValidationContext, ValidationIssue, ValidationResult,
    ValidationRule,
};
use crate::model::FieldCoordinates;
use crate::stats::TeamStatistics;

/// Allowed drift of the possession sum from 100.
pub const POSSESSION_TOLERANCE: f64 = 0.1;

/// The built-in catalogue, in registration order.
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(PassesConsistency),
        Box::new(ShotsConsistency),
        Box::new(PossessionTotal),
        Box::new(FieldBoundaries),
        Box::new(PlayerTeamAssignment),
        Box::new(TemporalOrder),
        Box::new(GoalsVsShots),
    ]
}

/// Compare a counter pair on both sides and report each side that breaks
/// `lesser <= greater`.
fn per_side(
    context: &ValidationContext<'_>,
    rule_id: &str,
    what: &str,
    pick: impl Fn(&TeamStatistics) -> (u32, u32),
) -> ValidationResult {
    let Some(stats) = context.statistics else {
        return ValidationResult::ok();
    };
    let errors = [("Home", &stats.home_team), ("Away", &stats.away_team)]
        .into_iter()
        .filter(|(_, team)| {
            let (lesser, greater) = pick(team);
            lesser > greater
        })
        .map(|(side, _)| ValidationIssue::error(rule_id, format!("{} team {}", side, what)))
        .collect();
    ValidationResult::from_errors(errors)
}

pub struct PassesConsistency;

impl ValidationRule for PassesConsistency {
    fn id(&self) -> &str {
        "passes_consistency"
    }

    fn name(&self) -> &str {
        "Pass Consistency"
    }

    fn description(&self) -> &str {
        "Successful passes must not exceed total passes"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> ValidationCategory {
        ValidationCategory::DataConsistency
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        per_side(context, self.id(), "successful passes exceed total passes", |t| {
            (t.successful_passes, t.total_passes)
        })
    }
}

pub struct ShotsConsistency;

impl ValidationRule for ShotsConsistency {
    fn id(&self) -> &str {
        "shots_consistency"
    }

    fn name(&self) -> &str {
        "Shots Consistency"
    }

    fn description(&self) -> &str {
        "Shots on target must not exceed total shots"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> ValidationCategory {
        ValidationCategory::DataConsistency
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        per_side(context, self.id(), "shots on target exceed total shots", |t| {
            (t.shots_on_target, t.shots)
        })
    }
}

pub struct GoalsVsShots;

impl ValidationRule for GoalsVsShots {
    fn id(&self) -> &str {
        "goals_vs_shots"
    }

    fn name(&self) -> &str {
        "Goals vs Shots"
    }

    fn description(&self) -> &str {
        "Goals must not exceed shots"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> ValidationCategory {
        ValidationCategory::LogicalConstraint
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        per_side(context, self.id(), "goals exceed total shots", |t| (t.goals, t.shots))
    }
}

/// Possession shares must add up to 100.
///
/// Skipped when neither side completed a pass, since possession is then
/// undefined and reported as 0/0.
pub struct PossessionTotal;

impl ValidationRule for PossessionTotal {
    fn id(&self) -> &str {
        "possession_total"
    }

    fn name(&self) -> &str {
        "Possession Total"
    }

    fn description(&self) -> &str {
        "Home and away possession must sum to 100%"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> ValidationCategory {
        ValidationCategory::Statistical
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        let Some(stats) = context.statistics else {
            return ValidationResult::ok();
        };
        let no_passes = stats.home_team.successful_passes == 0
            && stats.away_team.successful_passes == 0
            && stats.home_team.possession == 0.0
            && stats.away_team.possession == 0.0;
        if no_passes {
            return ValidationResult::ok();
        }

        let total = stats.home_team.possession + stats.away_team.possession;
        if (total - 100.0).abs() > POSSESSION_TOLERANCE {
            ValidationResult::from_errors(vec![ValidationIssue::error(
                self.id(),
                format!("Possession totals {:.1}% instead of 100%", total),
            )])
        } else {
            ValidationResult::ok()
        }
    }
}

/// Event coordinates, origin and destination must lie on the field.
pub struct FieldBoundaries;

impl ValidationRule for FieldBoundaries {
    fn id(&self) -> &str {
        "field_boundaries"
    }

    fn name(&self) -> &str {
        "Field Boundaries"
    }

    fn description(&self) -> &str {
        "Event coordinates must be within field boundaries (0-100)"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> ValidationCategory {
        ValidationCategory::FieldBoundary
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        let Some(event) = context.event else {
            return ValidationResult::ok();
        };
        let points: [(&str, Option<FieldCoordinates>); 3] = [
            ("coordinates", Some(event.coordinates)),
            ("originCoordinates", event.origin_coordinates),
            ("destinationCoordinates", event.destination_coordinates),
        ];
        let errors = points
            .into_iter()
            .filter_map(|(field, point)| point.map(|p| (field, p)))
            .filter(|(_, p)| !p.is_within_bounds())
            .map(|(field, p)| {
                ValidationIssue::error(
                    self.id(),
                    format!("Event {} {} are outside field boundaries", field, p),
                )
                .on_field(field)
            })
            .collect();
        ValidationResult::from_errors(errors)
    }
}

/// The acting player must be on the roster of the event's team.
pub struct PlayerTeamAssignment;

impl ValidationRule for PlayerTeamAssignment {
    fn id(&self) -> &str {
        "player_team_assignment"
    }

    fn name(&self) -> &str {
        "Player Team Assignment"
    }

    fn description(&self) -> &str {
        "Player must belong to the team specified in the event"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> ValidationCategory {
        ValidationCategory::TeamAssignment
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        let (Some(event), Some(m)) = (context.event, context.match_data) else {
            return ValidationResult::ok();
        };
        if m.team(event.team).has_player(&event.player_id) {
            return ValidationResult::ok();
        }
        ValidationResult::from_errors(vec![ValidationIssue::error(
            self.id(),
            format!("Player {} not found in {} team", event.player_id, event.team),
        )
        .on_field("playerId")])
    }
}

/// Timestamps outside the match video only warn.
pub struct TemporalOrder;

impl ValidationRule for TemporalOrder {
    fn id(&self) -> &str {
        "temporal_order"
    }

    fn name(&self) -> &str {
        "Temporal Order"
    }

    fn description(&self) -> &str {
        "Event timestamp must be within match duration"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn category(&self) -> ValidationCategory {
        ValidationCategory::Temporal
    }

    fn validate(&self, context: &ValidationContext<'_>) -> ValidationResult {
        let (Some(event), Some(m)) = (context.event, context.match_data) else {
            return ValidationResult::ok();
        };
        if (0.0..=m.duration).contains(&event.timestamp) {
            return ValidationResult::ok();
        }
        ValidationResult::from_warnings(vec![ValidationIssue::warning(
            self.id(),
            format!(
                "Event timestamp {}s is outside match duration",
                event.timestamp
            ),
        )
        .on_field("timestamp")])
    }
}
