//! Derived statistics records.
//!
//! These are snapshots computed from the event log, never stored as the
//! record of truth. Field names serialize in camelCase to match the export
//! format.

use crate::cli::types::{MatchId, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatistics {
    pub match_id: MatchId,
    pub home_team: TeamStatistics,
    pub away_team: TeamStatistics,
    pub computed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatistics {
    pub team_id: String,
    /// Share of successful passes, 0-100.
    pub possession: f64,

    pub total_passes: u32,
    pub successful_passes: u32,
    pub pass_accuracy: f64,
    pub long_passes: u32,
    pub short_passes: u32,

    pub shots: u32,
    pub shots_on_target: u32,
    /// `shots - shots_on_target - blocked_shots`; negative when the log is
    /// inconsistent.
    pub shots_off_target: i64,
    pub blocked_shots: u32,
    pub goals: u32,
    #[serde(rename = "xG")]
    pub xg: f64,

    pub crosses: u32,
    pub successful_crosses: u32,
    pub corners: u32,
    pub offsides: u32,
    pub dribbles: u32,
    pub successful_dribbles: u32,

    pub tackles: u32,
    pub successful_tackles: u32,
    pub interceptions: u32,
    pub clearances: u32,

    pub fouls: u32,
    pub fouls_suffered: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,

    pub aerial_duels: u32,
    pub aerial_duels_won: u32,
    pub ground_duels: u32,
    pub ground_duels_won: u32,

    pub free_kicks: u32,
    pub penalties: u32,
    pub penalties_scored: u32,
    pub throw_ins: u32,
    pub goal_kicks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    /// Not derivable from the log yet.
    pub minutes_played: Option<u32>,

    pub passes: u32,
    pub passes_completed: u32,
    pub pass_accuracy: f64,
    pub key_passes: u32,
    pub assists: u32,

    pub shots: u32,
    pub shots_on_target: u32,
    pub goals: u32,
    #[serde(rename = "xG")]
    pub xg: f64,

    pub tackles: u32,
    pub interceptions: u32,
    pub clearances: u32,

    pub dribbles: u32,
    pub successful_dribbles: u32,
    pub crosses: u32,

    pub fouls: u32,
    pub fouls_suffered: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,

    pub duels_won: u32,
    pub duels_lost: u32,
    pub aerial_duels_won: u32,

    pub touches: u32,
    pub touches_in_box: Option<u32>,
    /// Kilometers.
    pub distance_covered: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMapData {
    pub player_id: PlayerId,
    pub match_id: MatchId,
    pub zones: Vec<HeatMapZone>,
}

/// One grid cell of a heat map, in field percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatMapZone {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub touches: u32,
    /// `touches` relative to the busiest zone, 0-1.
    pub intensity: f64,
}
