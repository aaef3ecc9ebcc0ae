//! Step lists for the capture wizard.

use crate::model::EventType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen of the capture wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureStep {
    SelectType,
    SelectPlayer,
    Position,
    Origin,
    Receiver,
    Destination,
    Details,
}

impl fmt::Display for CaptureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaptureStep::SelectType => "select type",
            CaptureStep::SelectPlayer => "select player",
            CaptureStep::Position => "position",
            CaptureStep::Origin => "origin",
            CaptureStep::Receiver => "receiver",
            CaptureStep::Destination => "destination",
            CaptureStep::Details => "details",
        };
        write!(f, "{}", s)
    }
}

/// How the step list is derived from the chosen event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPolicy {
    /// Steps follow the taxonomy: no position, one position, or an
    /// origin/destination pair (with a receiver step for passes).
    #[default]
    DataDriven,
    /// Fixed four steps for single-position types and six for dual-position
    /// ones, receiver included.
    Legacy,
}

impl StepPolicy {
    /// Step list for `event_type`, or the minimum list before a type is
    /// chosen.
    pub fn steps(&self, event_type: Option<&EventType>) -> Vec<CaptureStep> {
        use CaptureStep::*;

        let Some(event_type) = event_type else {
            return match self {
                StepPolicy::DataDriven => vec![SelectType, SelectPlayer, Details],
                StepPolicy::Legacy => vec![SelectType, SelectPlayer, Position, Details],
            };
        };

        match self {
            StepPolicy::DataDriven => {
                if !event_type.requires_field_position() {
                    vec![SelectType, SelectPlayer, Details]
                } else if !event_type.requires_dual_position() {
                    vec![SelectType, SelectPlayer, Position, Details]
                } else if event_type.has_receiver_step() {
                    vec![SelectType, SelectPlayer, Origin, Receiver, Destination, Details]
                } else {
                    vec![SelectType, SelectPlayer, Origin, Destination, Details]
                }
            }
            StepPolicy::Legacy => {
                if event_type.requires_dual_position() {
                    vec![SelectType, SelectPlayer, Origin, Receiver, Destination, Details]
                } else {
                    vec![SelectType, SelectPlayer, Position, Details]
                }
            }
        }
    }
}
