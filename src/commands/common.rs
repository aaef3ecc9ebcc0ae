//! Common utilities and helper functions shared across commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::{
    core::{load_store, save_store},
    model::{LiveEvent, Match},
    EventStore, TaggerError,
};

use super::resolve_session_path;

/// Loaded session: the store plus where it came from.
pub struct SessionContext {
    pub path: PathBuf,
    pub store: EventStore,
}

impl SessionContext {
    /// Resolve the session path and load the store from it.
    pub fn open(session: Option<PathBuf>) -> Result<Self> {
        let path = resolve_session_path(session);
        info!("Using session {}", path.display());
        let store = load_store(&path)
            .with_context(|| format!("Failed to load session {}", path.display()))?;
        Ok(Self { path, store })
    }

    pub fn save(&self) -> Result<()> {
        save_store(&self.path, &self.store)
            .with_context(|| format!("Failed to save session {}", self.path.display()))
    }

    /// The current match, or `NoMatchInitialized`.
    pub fn require_match(&self) -> Result<&Match> {
        Ok(self
            .store
            .current_match()
            .ok_or(TaggerError::NoMatchInitialized)?)
    }
}

/// One-line summary of an event for text output.
pub fn format_event_line(event: &LiveEvent) -> String {
    let mut line = format!(
        "{}  {:>3}'  {:<20} {:<4} {:<16} {}",
        event.id,
        event.minute,
        event.event_type.as_str(),
        event.team.to_string(),
        event.player_id.to_string(),
        event.outcome
    );
    match (event.origin_coordinates, event.destination_coordinates) {
        (Some(origin), Some(destination)) => {
            line.push_str(&format!("  {} -> {}", origin, destination));
        }
        _ => line.push_str(&format!("  {}", event.coordinates)),
    }
    if let Some(distance) = event.distance {
        line.push_str(&format!("  {}", crate::geometry::format_distance(distance)));
    }
    if let Some(receiver) = &event.receiver_id {
        line.push_str(&format!("  to {}", receiver));
    }
    line
}
