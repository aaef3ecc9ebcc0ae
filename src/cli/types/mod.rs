//! Type-safe wrappers and enums for match tagging data.

pub mod filters;
pub mod ids;
pub mod position;
pub mod time;

pub use filters::{EventOutcome, MatchPeriod, MatchStatus, TeamSide};
pub use ids::{EventId, MatchId, PlayerId};
pub use position::{PlayerPosition, RoleGroup};
pub use time::{match_minute, VideoTime};
