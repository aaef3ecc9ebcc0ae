//! JSON export/import and the session snapshot format.

use super::{EventStore, StoreChange};
use crate::error::{Result, TaggerError};
use crate::model::{LiveEvent, Match};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Export document: `{match, events, exportedAt}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload<'a> {
    #[serde(rename = "match")]
    pub match_data: Option<&'a Match>,
    pub events: &'a [LiveEvent],
    pub exported_at: DateTime<Utc>,
}

/// What import accepts. Both halves are optional, but at least one must be
/// present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ImportPayload {
    #[serde(rename = "match", default)]
    match_data: Option<Match>,
    #[serde(default)]
    events: Option<Vec<LiveEvent>>,
    #[serde(default)]
    exported_at: Option<String>,
}

/// Persistent store state kept between CLI invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_data: Option<Match>,
    #[serde(default)]
    pub events: Vec<LiveEvent>,
    #[serde(default)]
    pub recording: bool,
}

impl EventStore {
    /// Pretty-printed export of the current match and event log.
    pub fn export_events(&self) -> Result<String> {
        let payload = ExportPayload {
            match_data: self.current_match(),
            events: self.events(),
            exported_at: Utc::now(),
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }

    /// Replace the match and/or the event log from an export document.
    ///
    /// The whole payload is parsed and checked before anything is replaced,
    /// so on error the store is left exactly as it was.
    pub fn import_events(&mut self, json: &str) -> Result<()> {
        let payload: ImportPayload =
            serde_json::from_str(json).map_err(TaggerError::invalid_payload)?;

        if payload.match_data.is_none() && payload.events.is_none() {
            return Err(TaggerError::invalid_payload(
                "payload has neither `match` nor `events`",
            ));
        }
        if let Some(exported_at) = &payload.exported_at {
            DateTime::parse_from_rfc3339(exported_at).map_err(|e| {
                TaggerError::invalid_payload(format!("bad exportedAt '{}': {}", exported_at, e))
            })?;
        }

        let match_replaced = payload.match_data.is_some();
        if let Some(m) = payload.match_data {
            self.current_match = Some(m);
        }
        let events = match payload.events {
            Some(events) => {
                let count = events.len();
                self.events = events;
                count
            }
            None => 0,
        };

        info!(
            "Imported payload (match replaced: {}, {} events)",
            match_replaced, events
        );
        self.notify(StoreChange::Imported {
            match_replaced,
            events,
        });
        Ok(())
    }
}
