//! Event capture wizard.
//!
//! [`CaptureWizard`] walks a user through building exactly one event: pick
//! a type, pick a player, place it on the field, fill in details, save. The
//! list of steps is computed from the [`StepPolicy`] and the chosen
//! [`EventType`], and each step has a predicate that must hold before the
//! wizard moves past it.
//!
//! # Examples
//!
//! ```rust
//! use match_tagger::capture::{CaptureWizard, ManualClock};
//! use match_tagger::{EventStore, EventType, FieldCoordinates, Match, PlayerId, TeamSide};
//!
//! let mut store = EventStore::with_match(Match::demo());
//! let clock = ManualClock::new(125.0);
//! let mut wizard = CaptureWizard::new();
//!
//! wizard.select_type(EventType::Pass);
//! wizard.next();
//! wizard.select_player(PlayerId::new("home-player-7"), TeamSide::Home);
//! wizard.next();
//! wizard.set_coordinates(FieldCoordinates::new(30.0, 50.0));
//! wizard.next();
//! wizard.skip_receiver();
//! wizard.set_coordinates(FieldCoordinates::new(70.0, 50.0));
//! wizard.next();
//!
//! let event = wizard.save(&mut store, &clock).unwrap();
//! assert_eq!(event.distance, Some(42.0));
//! assert_eq!(event.minute, 2);
//! ```

pub mod clock;
pub mod steps;


pub use clock::{ManualClock, VideoClock};
pub use steps::{CaptureStep, StepPolicy};

use crate::cli::types::{EventOutcome, MatchPeriod, PlayerId, TeamSide};
use crate::error::Result;
use crate::geometry::{calculate_distance, pass_type_for_distance};
use crate::model::event::{
    META_ASSIST, META_BLOCKED, META_ON_TARGET, META_PASS_TYPE, META_VICTIM, META_XG,
};
use crate::model::taxonomy::{check_sub_action, check_sub_event};
use crate::model::{EventType, FieldCoordinates, LiveEvent, Metadata, NewEvent};
use crate::store::EventStore;
use log::{debug, info, warn};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct CaptureWizard {
    policy: StepPolicy,
    /// Zero-based index into the current step list.
    current: usize,
    event_type: Option<EventType>,
    team: TeamSide,
    player_id: Option<PlayerId>,
    position: Option<FieldCoordinates>,
    origin: Option<FieldCoordinates>,
    destination: Option<FieldCoordinates>,
    receiver_id: Option<PlayerId>,
    outcome: EventOutcome,
    period: MatchPeriod,
    sub_action: Option<String>,
    sub_event: Option<String>,
    metadata: Metadata,
}

impl CaptureWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: StepPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    pub fn steps(&self) -> Vec<CaptureStep> {
        self.policy.steps(self.event_type.as_ref())
    }

    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    /// One-based step number.
    pub fn current_step(&self) -> usize {
        self.current + 1
    }

    pub fn current_step_kind(&self) -> CaptureStep {
        let steps = self.steps();
        steps
            .get(self.current)
            .or_else(|| steps.last())
            .copied()
            .unwrap_or(CaptureStep::SelectType)
    }

    pub fn is_final_step(&self) -> bool {
        self.current + 1 == self.total_steps()
    }

    pub fn event_type(&self) -> Option<&EventType> {
        self.event_type.as_ref()
    }

    pub fn team(&self) -> TeamSide {
        self.team
    }

    pub fn player_id(&self) -> Option<&PlayerId> {
        self.player_id.as_ref()
    }

    pub fn receiver_id(&self) -> Option<&PlayerId> {
        self.receiver_id.as_ref()
    }

    pub fn position(&self) -> Option<FieldCoordinates> {
        self.position
    }

    pub fn origin(&self) -> Option<FieldCoordinates> {
        self.origin
    }

    pub fn destination(&self) -> Option<FieldCoordinates> {
        self.destination
    }

    /// Choose the event type.
    ///
    /// Placement, receiver and qualifiers from a previous choice are
    /// dropped, and the current step is pulled back inside the new list.
    pub fn select_type(&mut self, event_type: EventType) {
        debug!("Capture type selected: {}", event_type);
        self.event_type = Some(event_type);
        self.position = None;
        self.origin = None;
        self.destination = None;
        self.receiver_id = None;
        self.sub_action = None;
        self.sub_event = None;
        self.current = self.current.min(self.total_steps() - 1);
    }

    pub fn select_team(&mut self, team: TeamSide) {
        self.team = team;
    }

    /// Choose the acting player and the side they play for.
    pub fn select_player(&mut self, player_id: PlayerId, team: TeamSide) {
        debug!("Capture player selected: {} ({})", player_id, team);
        self.player_id = Some(player_id);
        self.team = team;
    }

    pub fn select_receiver(&mut self, player_id: PlayerId) {
        self.receiver_id = Some(player_id);
    }

    /// Clear the receiver and move on.
    pub fn skip_receiver(&mut self) -> bool {
        self.receiver_id = None;
        self.next()
    }

    /// Record a field click for the current step.
    ///
    /// The point is clamped to the field and stored as the position, origin
    /// or destination depending on the step. Returns `false` on steps that
    /// take no coordinates.
    pub fn set_coordinates(&mut self, coordinates: FieldCoordinates) -> bool {
        let c = coordinates.clamped();
        match self.current_step_kind() {
            CaptureStep::Position => self.position = Some(c),
            CaptureStep::Origin => self.origin = Some(c),
            CaptureStep::Destination => self.destination = Some(c),
            step => {
                debug!("Coordinates ignored on step {}", step);
                return false;
            }
        }
        true
    }

    pub fn set_outcome(&mut self, outcome: EventOutcome) {
        self.outcome = outcome;
    }

    pub fn set_period(&mut self, period: MatchPeriod) {
        self.period = period;
    }

    /// Set a sub-action from the chosen type's vocabulary.
    pub fn set_sub_action(&mut self, code: &str) -> Result<()> {
        let event_type = self.event_type.clone().unwrap_or(EventType::Custom(String::new()));
        check_sub_action(&event_type, code)?;
        self.sub_action = Some(code.to_string());
        Ok(())
    }

    /// Set a sub-event from the chosen type's vocabulary.
    pub fn set_sub_event(&mut self, code: &str) -> Result<()> {
        let event_type = self.event_type.clone().unwrap_or(EventType::Custom(String::new()));
        check_sub_event(&event_type, code)?;
        self.sub_event = Some(code.to_string());
        Ok(())
    }

    pub fn set_on_target(&mut self, on_target: bool) {
        self.set_metadata(META_ON_TARGET, on_target);
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.set_metadata(META_BLOCKED, blocked);
    }

    pub fn set_xg(&mut self, xg: f64) {
        self.set_metadata(META_XG, xg);
    }

    pub fn set_assist(&mut self, player_id: PlayerId) {
        self.set_metadata(META_ASSIST, player_id.as_str());
    }

    pub fn set_victim(&mut self, player_id: PlayerId) {
        self.set_metadata(META_VICTIM, player_id.as_str());
    }

    pub fn set_metadata(&mut self, key: &str, value: impl Into<Value>) {
        self.metadata.insert(key.to_string(), value.into());
    }

    fn step_satisfied(&self, step: CaptureStep) -> bool {
        match step {
            CaptureStep::SelectType => self.event_type.is_some(),
            CaptureStep::SelectPlayer => self.player_id.is_some(),
            CaptureStep::Position => {
                self.position.is_some()
                    || self
                        .event_type
                        .as_ref()
                        .is_some_and(|t| !t.requires_field_position())
            }
            CaptureStep::Origin => self.origin.is_some(),
            CaptureStep::Receiver => true,
            CaptureStep::Destination => self.destination.is_some(),
            CaptureStep::Details => true,
        }
    }

    /// Whether the current step's requirement is met.
    pub fn can_proceed(&self) -> bool {
        self.step_satisfied(self.current_step_kind())
    }

    /// Advance one step if the current step is complete.
    pub fn next(&mut self) -> bool {
        if self.can_proceed() && self.current + 1 < self.total_steps() {
            self.current += 1;
            debug!("Capture step -> {}", self.current_step_kind());
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Whether [`save`](Self::save) would produce an event.
    pub fn is_complete(&self) -> bool {
        self.is_final_step() && self.steps().iter().all(|s| self.step_satisfied(*s))
    }

    /// Build the event, add it to `store` and reset.
    ///
    /// Returns `None` and changes nothing when the wizard is not on its
    /// final step with every step satisfied, or when the store has no match.
    pub fn save(&mut self, store: &mut EventStore, clock: &dyn VideoClock) -> Option<LiveEvent> {
        if !self.is_complete() {
            debug!("Capture save ignored on incomplete wizard");
            return None;
        }
        let Some(m) = store.current_match() else {
            warn!("Capture save ignored, no match initialized");
            return None;
        };
        let (Some(event_type), Some(player_id)) = (self.event_type.clone(), self.player_id.clone()) else {
            return None;
        };

        let timestamp = clock.current_timestamp();
        let steps = self.steps();
        let dual = steps.contains(&CaptureStep::Origin);

        let coordinates = if !event_type.requires_field_position() {
            FieldCoordinates::default()
        } else {
            self.position
                .or(self.origin)
                .unwrap_or_default()
        };

        let mut new_event = NewEvent::new(
            m.id.clone(),
            event_type,
            self.team,
            player_id,
            timestamp,
            coordinates,
        );
        new_event.minute = clock.match_minute(timestamp);
        new_event.outcome = self.outcome;
        new_event.period = self.period;
        new_event.sub_action = self.sub_action.clone();
        new_event.sub_event = self.sub_event.clone();

        if dual {
            if let (Some(origin), Some(destination)) = (self.origin, self.destination) {
                new_event.origin_coordinates = Some(origin);
                new_event.destination_coordinates = Some(destination);
                if steps.contains(&CaptureStep::Receiver) {
                    new_event.receiver_id = self.receiver_id.clone();
                }
                if new_event.event_type == EventType::Pass && !self.metadata.contains_key(META_PASS_TYPE) {
                    let class = pass_type_for_distance(calculate_distance(&origin, &destination));
                    self.metadata
                        .insert(META_PASS_TYPE.to_string(), Value::from(class.as_str()));
                }
            }
        }

        if !self.metadata.is_empty() {
            new_event.metadata = Some(std::mem::take(&mut self.metadata));
        }

        let event = store.add_event(new_event);
        info!(
            "Captured {} by {} at minute {}",
            event.event_type, event.player_id, event.minute
        );
        self.reset();
        Some(event)
    }

    /// Drop everything entered so far.
    pub fn cancel(&mut self) {
        debug!("Capture cancelled");
        self.reset();
    }

    /// Back to step one. Policy, team and period carry over to the next
    /// capture.
    fn reset(&mut self) {
        *self = Self {
            policy: self.policy,
            team: self.team,
            period: self.period,
            ..Self::default()
        };
    }
}
