//! The tagged event record and its construction/update inputs.

use crate::cli::types::{match_minute, EventId, EventOutcome, MatchId, MatchPeriod, PlayerId, TeamSide};
use crate::geometry::{calculate_direction, calculate_distance};
use crate::model::{EventType, FieldCoordinates};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Open key/value bag attached to an event.
pub type Metadata = BTreeMap<String, Value>;

pub const META_ON_TARGET: &str = "onTarget";
pub const META_SHOT_ON_TARGET: &str = "shotOnTarget";
pub const META_BLOCKED: &str = "blocked";
pub const META_XG: &str = "xG";
pub const META_ASSIST: &str = "assistPlayerId";
pub const META_VICTIM: &str = "victimPlayerId";
pub const META_PASS_TYPE: &str = "passType";

/// One tagged action in the match log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveEvent {
    pub id: EventId,
    pub match_id: MatchId,
    /// Seconds into the match video.
    pub timestamp: f64,
    pub event_type: EventType,
    pub team: TeamSide,
    pub player_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_player_ids: Option<Vec<PlayerId>>,
    pub coordinates: FieldCoordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_coordinates: Option<FieldCoordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_coordinates: Option<FieldCoordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<PlayerId>,
    /// Meters, derived from origin and destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Degrees in `[0, 360)`, derived from origin and destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_event: Option<String>,
    pub outcome: EventOutcome,
    pub period: MatchPeriod,
    pub minute: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl LiveEvent {
    /// Recompute distance and direction from origin and destination.
    ///
    /// Both are cleared when either endpoint is missing.
    pub fn derive_geometry(&mut self) {
        match (self.origin_coordinates, self.destination_coordinates) {
            (Some(from), Some(to)) => {
                self.distance = Some(calculate_distance(&from, &to));
                self.direction = Some(calculate_direction(&from, &to));
            }
            _ => {
                self.distance = None;
                self.direction = None;
            }
        }
    }

    /// Merge `patch` into this event. Does not touch `updated_at`.
    pub fn apply_patch(&mut self, patch: EventPatch) {
        if let Some(timestamp) = patch.timestamp {
            self.timestamp = timestamp;
            self.minute = match_minute(timestamp);
        }
        if let Some(event_type) = patch.event_type {
            self.event_type = event_type;
        }
        if let Some(team) = patch.team {
            self.team = team;
        }
        if let Some(player_id) = patch.player_id {
            self.player_id = player_id;
        }
        if let Some(coordinates) = patch.coordinates {
            self.coordinates = coordinates;
        }
        if let Some(origin) = patch.origin_coordinates {
            self.origin_coordinates = origin;
        }
        if let Some(destination) = patch.destination_coordinates {
            self.destination_coordinates = destination;
        }
        if let Some(receiver_id) = patch.receiver_id {
            self.receiver_id = receiver_id;
        }
        if let Some(sub_action) = patch.sub_action {
            self.sub_action = sub_action;
        }
        if let Some(sub_event) = patch.sub_event {
            self.sub_event = sub_event;
        }
        if let Some(outcome) = patch.outcome {
            self.outcome = outcome;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
        if let Some(metadata) = patch.metadata {
            let merged = self.metadata.get_or_insert_with(Metadata::new);
            merged.extend(metadata);
        }
    }

    fn meta(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }

    fn meta_flag(&self, key: &str) -> bool {
        self.meta(key).and_then(Value::as_bool).unwrap_or(false)
    }

    fn meta_player(&self, key: &str) -> Option<PlayerId> {
        self.meta(key)
            .and_then(Value::as_str)
            .map(PlayerId::new)
    }

    pub fn sub_action_is(&self, code: &str) -> bool {
        self.sub_action.as_deref() == Some(code)
    }

    pub fn sub_event_is(&self, code: &str) -> bool {
        self.sub_event.as_deref() == Some(code)
    }

    /// On-target flag, from metadata or an `on_target`/`goal` sub-event.
    pub fn on_target(&self) -> bool {
        self.meta_flag(META_ON_TARGET)
            || self.meta_flag(META_SHOT_ON_TARGET)
            || self.sub_event_is("on_target")
            || self.sub_event_is("goal")
    }

    pub fn is_blocked(&self) -> bool {
        self.meta_flag(META_BLOCKED) || self.sub_event_is("blocked")
    }

    /// Whether this event is a goal: the `goal` type, or a shot-class event
    /// with a `goal` sub-event.
    pub fn is_goal(&self) -> bool {
        self.event_type == EventType::Goal
            || (self.event_type.is_shot() && self.sub_event_is("goal"))
    }

    /// Expected-goals value, 0 when absent or not a number.
    pub fn xg(&self) -> f64 {
        self.meta(META_XG).and_then(Value::as_f64).unwrap_or(0.0)
    }

    pub fn assist_player_id(&self) -> Option<PlayerId> {
        self.meta_player(META_ASSIST)
    }

    pub fn victim_player_id(&self) -> Option<PlayerId> {
        self.meta_player(META_VICTIM)
    }

    pub fn pass_type(&self) -> Option<&str> {
        self.meta(META_PASS_TYPE).and_then(Value::as_str)
    }

    pub fn is_successful(&self) -> bool {
        self.outcome == EventOutcome::Successful
    }
}

/// Caller-supplied fields of an event about to be stored.
///
/// The store assigns the id and the timestamps, and derives distance and
/// direction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub match_id: MatchId,
    pub timestamp: f64,
    pub event_type: EventType,
    pub team: TeamSide,
    pub player_id: PlayerId,
    pub secondary_player_ids: Option<Vec<PlayerId>>,
    pub coordinates: FieldCoordinates,
    pub origin_coordinates: Option<FieldCoordinates>,
    pub destination_coordinates: Option<FieldCoordinates>,
    pub receiver_id: Option<PlayerId>,
    pub sub_action: Option<String>,
    pub sub_event: Option<String>,
    pub outcome: EventOutcome,
    pub period: MatchPeriod,
    pub minute: u32,
    pub metadata: Option<Metadata>,
}

impl NewEvent {
    /// Single-position event with default outcome and period.
    pub fn new(
        match_id: MatchId,
        event_type: EventType,
        team: TeamSide,
        player_id: PlayerId,
        timestamp: f64,
        coordinates: FieldCoordinates,
    ) -> Self {
        Self {
            match_id,
            timestamp,
            event_type,
            team,
            player_id,
            secondary_player_ids: None,
            coordinates,
            origin_coordinates: None,
            destination_coordinates: None,
            receiver_id: None,
            sub_action: None,
            sub_event: None,
            outcome: EventOutcome::default(),
            period: MatchPeriod::default(),
            minute: match_minute(timestamp),
            metadata: None,
        }
    }

    /// Set origin and destination; `coordinates` follows the origin.
    pub fn with_path(mut self, origin: FieldCoordinates, destination: FieldCoordinates) -> Self {
        self.coordinates = origin;
        self.origin_coordinates = Some(origin);
        self.destination_coordinates = Some(destination);
        self
    }

    pub fn with_outcome(mut self, outcome: EventOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_period(mut self, period: MatchPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn with_receiver(mut self, receiver: PlayerId) -> Self {
        self.receiver_id = Some(receiver);
        self
    }

    pub fn with_sub_action(mut self, code: impl Into<String>) -> Self {
        self.sub_action = Some(code.into());
        self
    }

    pub fn with_sub_event(mut self, code: impl Into<String>) -> Self {
        self.sub_event = Some(code.into());
        self
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn into_event(self, id: EventId, now: DateTime<Utc>) -> LiveEvent {
        let mut event = LiveEvent {
            id,
            match_id: self.match_id,
            timestamp: self.timestamp,
            event_type: self.event_type,
            team: self.team,
            player_id: self.player_id,
            secondary_player_ids: self.secondary_player_ids,
            coordinates: self.coordinates,
            origin_coordinates: self.origin_coordinates,
            destination_coordinates: self.destination_coordinates,
            receiver_id: self.receiver_id,
            distance: None,
            direction: None,
            sub_action: self.sub_action,
            sub_event: self.sub_event,
            outcome: self.outcome,
            period: self.period,
            minute: self.minute,
            created_at: now,
            updated_at: now,
            metadata: self.metadata,
        };
        event.derive_geometry();
        event
    }
}

/// Partial event update.
///
/// Outer `None` leaves a field alone; for optional fields `Some(None)`
/// clears the stored value. A changed timestamp also refreshes the minute.
/// Metadata keys are merged into the existing map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub timestamp: Option<f64>,
    pub event_type: Option<EventType>,
    pub team: Option<TeamSide>,
    pub player_id: Option<PlayerId>,
    pub coordinates: Option<FieldCoordinates>,
    pub origin_coordinates: Option<Option<FieldCoordinates>>,
    pub destination_coordinates: Option<Option<FieldCoordinates>>,
    pub receiver_id: Option<Option<PlayerId>>,
    pub sub_action: Option<Option<String>>,
    pub sub_event: Option<Option<String>>,
    pub outcome: Option<EventOutcome>,
    pub period: Option<MatchPeriod>,
    pub metadata: Option<Metadata>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }
}
