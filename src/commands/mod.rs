//! Command implementations for the match tagger CLI
//!
//! Every handler loads the session, applies one operation to the store and
//! saves the session back when something changed.

pub mod common;
pub mod events;
pub mod match_setup;
pub mod recording;
pub mod statistics;
pub mod transfer;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::{core::default_session_path, SESSION_ENV_VAR};

/// Resolve the session file from option, environment variable or the
/// per-user data directory.
pub fn resolve_session_path(session: Option<PathBuf>) -> PathBuf {
    session
        .or_else(|| {
            std::env::var(SESSION_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_session_path)
}
