//! Football Match Tagging Library
//!
//! Core of a live match-tagging tool: an analyst records on-pitch actions
//! (passes, shots, tackles, fouls and so on) against a match video, and the
//! library keeps the event log, derives statistics from it and checks it for
//! consistency.
//!
//! ## Features
//!
//! - **Event Store**: the current match and its event log, with queries,
//!   observer callbacks and JSON export/import
//! - **Capture Wizard**: step-by-step construction of one event, with the
//!   step list driven by the event type
//! - **Field Geometry**: percent coordinates mapped onto a 105 m × 68 m pitch
//! - **Statistics**: team, player and heat-map aggregation over the log
//! - **Validation**: a pluggable rule engine over events and statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use match_tagger::{model::NewEvent, EventStore, EventType, FieldCoordinates, Match, PlayerId, TeamSide};
//!
//! let mut store = EventStore::with_match(Match::demo());
//! let match_id = store.current_match().unwrap().id.clone();
//!
//! let pass = NewEvent::new(
//!     match_id,
//!     EventType::Pass,
//!     TeamSide::Home,
//!     PlayerId::new("home-player-7"),
//!     754.0,
//!     FieldCoordinates::new(20.0, 50.0),
//! )
//! .with_path(FieldCoordinates::new(20.0, 50.0), FieldCoordinates::new(60.0, 50.0));
//!
//! let event = store.add_event(pass);
//! assert_eq!(event.minute, 12);
//! assert_eq!(event.distance, Some(42.0));
//!
//! let stats = match_tagger::stats::compute_match_statistics(
//!     store.current_match().unwrap(),
//!     store.events(),
//! );
//! assert_eq!(stats.home_team.total_passes, 1);
//! ```
//!
//! ## Environment Configuration
//!
//! The CLI keeps its session in one JSON file. Point it somewhere else with:
//! ```bash
//! export MATCH_TAGGER_SESSION=/path/to/session.json
//! ```

pub mod capture;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod geometry;
pub mod model;
pub mod stats;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use cli::types::{
    EventId, EventOutcome, MatchId, MatchPeriod, MatchStatus, PlayerId, PlayerPosition, TeamSide,
    VideoTime,
};
pub use error::{Result, TaggerError};
pub use model::{EventType, FieldCoordinates, LiveEvent, Match, NewEvent};
pub use store::EventStore;

pub const SESSION_ENV_VAR: &str = "MATCH_TAGGER_SESSION";
