//! Read-only views over the event log.
//!
//! Every query returns a fresh `Vec` in insertion order unless stated
//! otherwise.

use super::EventStore;
use crate::cli::types::{EventId, PlayerId, TeamSide};
use crate::model::{EventType, LiveEvent};

impl EventStore {
    fn filtered(&self, keep: impl Fn(&LiveEvent) -> bool) -> Vec<LiveEvent> {
        self.events().iter().filter(|e| keep(e)).cloned().collect()
    }

    pub fn events_by_type(&self, event_type: &EventType) -> Vec<LiveEvent> {
        self.filtered(|e| &e.event_type == event_type)
    }

    pub fn events_by_player(&self, player_id: &PlayerId) -> Vec<LiveEvent> {
        self.filtered(|e| &e.player_id == player_id)
    }

    pub fn events_by_team(&self, team: TeamSide) -> Vec<LiveEvent> {
        self.filtered(|e| e.team == team)
    }

    /// Events with `start <= timestamp <= end`.
    pub fn events_by_time_range(&self, start: f64, end: f64) -> Vec<LiveEvent> {
        self.filtered(|e| e.timestamp >= start && e.timestamp <= end)
    }

    /// All events ordered by timestamp; ties keep insertion order.
    pub fn sorted_events(&self) -> Vec<LiveEvent> {
        let mut events = self.events().to_vec();
        events.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        events
    }

    pub fn event_count(&self) -> usize {
        self.events().len()
    }

    pub fn find_event(&self, id: &EventId) -> Option<&LiveEvent> {
        self.events().iter().find(|e| &e.id == id)
    }
}

/// Combined filter used by the `event list` command.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub event_type: Option<EventType>,
    pub player_id: Option<PlayerId>,
    pub team: Option<TeamSide>,
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl EventFilter {
    pub fn matches(&self, event: &LiveEvent) -> bool {
        self.event_type.as_ref().map_or(true, |t| &event.event_type == t)
            && self.player_id.as_ref().map_or(true, |p| &event.player_id == p)
            && self.team.map_or(true, |t| event.team == t)
            && self.from.map_or(true, |from| event.timestamp >= from)
            && self.to.map_or(true, |to| event.timestamp <= to)
    }

    pub fn apply(&self, events: &[LiveEvent]) -> Vec<LiveEvent> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
