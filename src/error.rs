//! Error types for the match tagger

use thiserror::Error;


pub type Result<T> = std::result::Result<T, TaggerError>;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("No match initialized")]
    NoMatchInitialized,

    #[error("Invalid import payload: {message}")]
    InvalidPayload { message: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid coordinates '{input}' (expected x,y)")]
    InvalidCoordinates { input: String },

    #[error("Invalid timestamp '{input}' (expected seconds or mm:ss)")]
    InvalidTimestamp { input: String },

    #[error("Unknown event type: {input}")]
    UnknownEventType { input: String },

    #[error("Unknown value: {input}")]
    UnknownValue { input: String },

    #[error("Invalid position: {input}")]
    UnknownPosition { input: String },

    #[error("Unknown formation: {name}")]
    UnknownFormation { name: String },

    #[error("Unknown {kind} '{value}' for event type {event_type}")]
    UnknownQualifier {
        kind: String,
        value: String,
        event_type: String,
    },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },
}

impl TaggerError {
    /// Wrap any displayable failure as a malformed-payload error.
    pub fn invalid_payload(message: impl std::fmt::Display) -> Self {
        TaggerError::InvalidPayload {
            message: message.to_string(),
        }
    }
}
