//! Session persistence between CLI invocations.
//!
//! The whole store state (match, event log and recording flag) lives in one
//! JSON file. A missing file is an empty session, not an error.

use log::debug;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{store::SessionSnapshot, EventStore, Result};

/// Path: <data dir>/match-tagger/session.json
pub fn default_session_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("match-tagger").join("session.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Read the snapshot at `path`. Missing or empty files give an empty session.
pub fn load_snapshot(path: &Path) -> Result<SessionSnapshot> {
    match try_read_to_string(path) {
        Some(s) if !s.trim().is_empty() => {
            let snapshot: SessionSnapshot = serde_json::from_str(&s)?;
            debug!(
                "Loaded session from {} ({} events)",
                path.display(),
                snapshot.events.len()
            );
            Ok(snapshot)
        }
        _ => {
            debug!("No session at {}, starting empty", path.display());
            Ok(SessionSnapshot::default())
        }
    }
}

pub fn save_snapshot(path: &Path, snapshot: &SessionSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    write_string(path, &json)?;
    debug!("Saved session to {}", path.display());
    Ok(())
}

/// Build a store from the session file at `path`.
pub fn load_store(path: &Path) -> Result<EventStore> {
    let mut store = EventStore::new();
    store.restore(load_snapshot(path)?);
    Ok(store)
}

pub fn save_store(path: &Path, store: &EventStore) -> Result<()> {
    save_snapshot(path, &store.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Match, TaggerError};
    use tempfile::TempDir;

    #[test]
    fn test_default_session_path_shape() {
        let path = default_session_path();
        assert!(path.ends_with("match-tagger/session.json"));
    }

    #[test]
    fn test_write_and_read_string() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("file.json");

        write_string(&path, "{\"ok\":true}").unwrap();
        assert_eq!(try_read_to_string(&path).as_deref(), Some("{\"ok\":true}"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(try_read_to_string(&dir.path().join("nope.json")).is_none());
    }

    #[test]
    fn test_missing_session_is_empty() {
        let dir = TempDir::new().unwrap();
        let snapshot = load_snapshot(&dir.path().join("session.json")).unwrap();
        assert_eq!(snapshot, SessionSnapshot::default());
    }

    #[test]
    fn test_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = EventStore::with_match(Match::demo());
        store.start_recording().unwrap();
        save_store(&path, &store).unwrap();

        let loaded = load_store(&path).unwrap();
        assert!(loaded.is_recording());
        assert_eq!(loaded.current_match(), store.current_match());
        assert!(loaded.events().is_empty());
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        write_string(&path, "{not json").unwrap();

        assert!(matches!(load_snapshot(&path), Err(TaggerError::Json(_))));
    }
}
