//! In-memory event store.
//!
//! [`EventStore`] owns the current [`Match`] and the log of [`LiveEvent`]s
//! recorded against it. Mutation goes through `&mut self`; interested
//! parties can [`subscribe`](EventStore::subscribe) to be told about every
//! change after it has been applied. Read-only queries live in
//! [`queries`], JSON export and import in [`transfer`].

pub mod queries;
pub mod transfer;

#[cfg(test)]
mod tests;

pub use queries::EventFilter;
pub use transfer::{ExportPayload, SessionSnapshot};

use crate::cli::types::{EventId, MatchId, PlayerId, TeamSide};
use crate::error::{Result, TaggerError};
use crate::model::{
    apply_formation, EventPatch, FieldCoordinates, LiveEvent, Match, MatchPatch, NewEvent,
};
use chrono::Utc;
use log::{debug, info};
use std::fmt;

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    MatchInitialized(MatchId),
    MatchUpdated,
    RecordingChanged(bool),
    EventAdded(EventId),
    EventUpdated(EventId),
    EventDeleted(EventId),
    EventsCleared,
    Imported { match_replaced: bool, events: usize },
}

/// Handle returned by [`EventStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&StoreChange)>;

#[derive(Default)]
pub struct EventStore {
    current_match: Option<Match>,
    events: Vec<LiveEvent>,
    recording: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for EventStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStore")
            .field("current_match", &self.current_match.as_ref().map(|m| &m.id))
            .field("events", &self.events.len())
            .field("recording", &self.recording)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with `m` already initialized.
    pub fn with_match(m: Match) -> Self {
        let mut store = Self::new();
        store.initialize_match(m);
        store
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.current_match.as_ref()
    }

    /// The event log in insertion order.
    pub fn events(&self) -> &[LiveEvent] {
        &self.events
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Register a change callback.
    pub fn subscribe(&mut self, callback: impl Fn(&StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self, change: StoreChange) {
        for (_, observer) in &self.observers {
            observer(&change);
        }
    }

    /// Replace the current match, dropping all events and stopping recording.
    pub fn initialize_match(&mut self, m: Match) {
        info!(
            "Initializing match {} ({} vs {})",
            m.id, m.home_team.name, m.away_team.name
        );
        let id = m.id.clone();
        self.current_match = Some(m);
        self.events.clear();
        self.recording = false;
        self.notify(StoreChange::MatchInitialized(id));
    }

    pub fn start_recording(&mut self) -> Result<()> {
        if self.current_match.is_none() {
            return Err(TaggerError::NoMatchInitialized);
        }
        if !self.recording {
            self.recording = true;
            info!("Recording started");
            self.notify(StoreChange::RecordingChanged(true));
        }
        Ok(())
    }

    pub fn stop_recording(&mut self) {
        if self.recording {
            self.recording = false;
            info!("Recording stopped");
            self.notify(StoreChange::RecordingChanged(false));
        }
    }

    /// Append a new event and return the stored record.
    ///
    /// The id is fresh within the log; `created_at` and `updated_at` are
    /// set to now; distance and direction are derived from the path.
    pub fn add_event(&mut self, new_event: NewEvent) -> LiveEvent {
        let mut id = EventId::generate();
        while self.events.iter().any(|e| e.id == id) {
            id = EventId::generate();
        }

        let event = new_event.into_event(id, Utc::now());
        debug!(
            "Added {} event {} for {} at {:.1}s",
            event.event_type, event.id, event.player_id, event.timestamp
        );
        self.events.push(event.clone());
        self.notify(StoreChange::EventAdded(event.id.clone()));
        event
    }

    /// Merge `patch` into the event with `id`.
    ///
    /// Returns `false` without touching anything when no such event exists.
    pub fn update_event(&mut self, id: &EventId, patch: EventPatch) -> bool {
        let Some(event) = self.events.iter_mut().find(|e| &e.id == id) else {
            debug!("Update ignored, no event {}", id);
            return false;
        };

        event.apply_patch(patch);
        event.derive_geometry();
        event.updated_at = Utc::now();
        debug!("Updated event {}", id);
        self.notify(StoreChange::EventUpdated(id.clone()));
        true
    }

    /// Remove the event with `id`. Returns `false` when none exists.
    pub fn delete_event(&mut self, id: &EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| &e.id != id);
        if self.events.len() == before {
            debug!("Delete ignored, no event {}", id);
            return false;
        }
        debug!("Deleted event {}", id);
        self.notify(StoreChange::EventDeleted(id.clone()));
        true
    }

    pub fn clear_events(&mut self) {
        let removed = self.events.len();
        self.events.clear();
        info!("Cleared {} events", removed);
        self.notify(StoreChange::EventsCleared);
    }

    /// Move a rostered player. Coordinates are clamped to the field.
    ///
    /// Returns `false` when there is no match or no such player.
    pub fn update_player_position(&mut self, player_id: &PlayerId, coordinates: FieldCoordinates) -> bool {
        let Some(player) = self
            .current_match
            .as_mut()
            .and_then(|m| m.find_player_mut(player_id))
        else {
            debug!("Position update ignored, no player {}", player_id);
            return false;
        };

        player.field_position = coordinates.clamped();
        debug!("Moved {} to {}", player_id, player.field_position);
        self.notify(StoreChange::MatchUpdated);
        true
    }

    /// Shallow-merge `patch` into the current match.
    pub fn update_match(&mut self, patch: MatchPatch) -> Result<()> {
        let m = self
            .current_match
            .as_mut()
            .ok_or(TaggerError::NoMatchInitialized)?;
        m.apply_patch(patch);
        info!("Updated match {}", m.id);
        self.notify(StoreChange::MatchUpdated);
        Ok(())
    }

    /// Lay out one side's roster with a named formation.
    pub fn apply_formation(&mut self, side: TeamSide, formation: &str) -> Result<usize> {
        let m = self
            .current_match
            .as_mut()
            .ok_or(TaggerError::NoMatchInitialized)?;
        let moved = apply_formation(m.team_mut(side), side, formation)?;
        self.notify(StoreChange::MatchUpdated);
        Ok(moved)
    }

    /// Copy of the persistent state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            match_data: self.current_match.clone(),
            events: self.events.clone(),
            recording: self.recording,
        }
    }

    /// Replace the persistent state with `snapshot`. Subscribers are kept.
    pub fn restore(&mut self, snapshot: SessionSnapshot) {
        let match_replaced = snapshot.match_data.is_some();
        let events = snapshot.events.len();
        self.current_match = snapshot.match_data;
        self.events = snapshot.events;
        self.recording = snapshot.recording && self.current_match.is_some();
        debug!("Restored session with {} events", events);
        self.notify(StoreChange::Imported {
            match_replaced,
            events,
        });
    }
}
