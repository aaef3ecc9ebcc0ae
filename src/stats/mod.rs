//! Statistics aggregation.
//!
//! Pure functions from a [`Match`](crate::Match) and its event log to team,
//! match and player statistics. Nothing is cached.

pub mod compute;
pub mod heatmap;
pub mod types;


pub use compute::{
    compute_all_player_statistics, compute_match_statistics, compute_player_statistics,
    compute_team_statistics,
};
pub use heatmap::{compute_heat_map, DEFAULT_HEAT_MAP_COLUMNS, DEFAULT_HEAT_MAP_ROWS};
pub use types::{HeatMapData, HeatMapZone, MatchStatistics, PlayerStatistics, TeamStatistics};
