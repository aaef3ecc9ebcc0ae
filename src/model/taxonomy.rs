//! Event-type taxonomy.
//!
//! Every tagged event carries an [`EventType`] discriminant. What a type
//! needs from the capture flow (a field position, an origin and destination,
//! a receiver) and which qualifiers it accepts is looked up in a single
//! static table, [`EVENT_TYPES`], rather than spread across the wizard, the
//! store and the statistics engine.

use crate::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminant of a tagged event.
///
/// The vocabulary is open: codes outside the built-in table are kept as
/// [`EventType::Custom`] and treated as single-position events with no
/// qualifier vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventType {
    Pass,
    Duel,
    DefensiveAction,
    Dribbling,
    ProgressiveCarry,
    Reception,
    Press,
    Shot,
    ShotDirection,
    ShotUnderPressure,
    TurnOver,
    Foul,
    Sub,
    FreeKick,
    Corner,
    GoalkeeperAction,
    GkDistribution,
    Card,
    GameEvent,
    CounterAttack,
    Penalty,
    // legacy vocabulary
    Goal,
    Save,
    Tackle,
    Interception,
    Clearance,
    Cross,
    ThrowIn,
    GoalKick,
    Offside,
    YellowCard,
    RedCard,
    Substitution,
    Dribble,
    AerialDuel,
    BallRecovery,
    Custom(String),
}

impl EventType {
    /// All built-in types, current vocabulary first.
    pub const KNOWN: [EventType; 36] = [
        EventType::Pass,
        EventType::Duel,
        EventType::DefensiveAction,
        EventType::Dribbling,
        EventType::ProgressiveCarry,
        EventType::Reception,
        EventType::Press,
        EventType::Shot,
        EventType::ShotDirection,
        EventType::ShotUnderPressure,
        EventType::TurnOver,
        EventType::Foul,
        EventType::Sub,
        EventType::FreeKick,
        EventType::Corner,
        EventType::GoalkeeperAction,
        EventType::GkDistribution,
        EventType::Card,
        EventType::GameEvent,
        EventType::CounterAttack,
        EventType::Penalty,
        EventType::Goal,
        EventType::Save,
        EventType::Tackle,
        EventType::Interception,
        EventType::Clearance,
        EventType::Cross,
        EventType::ThrowIn,
        EventType::GoalKick,
        EventType::Offside,
        EventType::YellowCard,
        EventType::RedCard,
        EventType::Substitution,
        EventType::Dribble,
        EventType::AerialDuel,
        EventType::BallRecovery,
    ];

    /// Wire code (`snake_case`).
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Pass => "pass",
            EventType::Duel => "duel",
            EventType::DefensiveAction => "defensive_action",
            EventType::Dribbling => "dribbling",
            EventType::ProgressiveCarry => "progressive_carry",
            EventType::Reception => "reception",
            EventType::Press => "press",
            EventType::Shot => "shot",
            EventType::ShotDirection => "shot_direction",
            EventType::ShotUnderPressure => "shot_under_pressure",
            EventType::TurnOver => "turn_over",
            EventType::Foul => "foul",
            EventType::Sub => "sub",
            EventType::FreeKick => "free_kick",
            EventType::Corner => "corner",
            EventType::GoalkeeperAction => "goalkeeper_action",
            EventType::GkDistribution => "gk_distribution",
            EventType::Card => "card",
            EventType::GameEvent => "game_event",
            EventType::CounterAttack => "counter_attack",
            EventType::Penalty => "penalty",
            EventType::Goal => "goal",
            EventType::Save => "save",
            EventType::Tackle => "tackle",
            EventType::Interception => "interception",
            EventType::Clearance => "clearance",
            EventType::Cross => "cross",
            EventType::ThrowIn => "throw_in",
            EventType::GoalKick => "goal_kick",
            EventType::Offside => "offside",
            EventType::YellowCard => "yellow_card",
            EventType::RedCard => "red_card",
            EventType::Substitution => "substitution",
            EventType::Dribble => "dribble",
            EventType::AerialDuel => "aerial_duel",
            EventType::BallRecovery => "ball_recovery",
            EventType::Custom(code) => code,
        }
    }

    /// Taxonomy row, `None` for custom types.
    pub fn info(&self) -> Option<&'static EventTypeInfo> {
        let code = self.as_str();
        EVENT_TYPES.iter().find(|info| info.code == code)
    }

    /// Whether capturing this type asks for any field position at all.
    pub fn requires_field_position(&self) -> bool {
        self.info().map(|info| info.pitch_position).unwrap_or(true)
    }

    /// Whether this type is recorded with an origin and a destination.
    pub fn requires_dual_position(&self) -> bool {
        self.info().map(|info| info.dual_position).unwrap_or(false)
    }

    /// Whether the capture flow offers an optional receiver step.
    pub fn has_receiver_step(&self) -> bool {
        matches!(self, EventType::Pass)
    }

    /// Shot-class types (counted as attempts on goal).
    pub fn is_shot(&self) -> bool {
        matches!(
            self,
            EventType::Shot | EventType::Goal | EventType::ShotUnderPressure
        )
    }

    pub fn sub_actions(&self) -> &'static [SubOption] {
        self.info().map(|info| info.sub_actions).unwrap_or(&[])
    }

    pub fn sub_events(&self) -> &'static [SubOption] {
        self.info().map(|info| info.sub_events).unwrap_or(&[])
    }

    pub fn label(&self) -> String {
        match self.info() {
            Some(info) => info.label.to_string(),
            None => self.as_str().replace('_', " "),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_lowercase().replace(['-', ' '], "_");
        if let Some(known) = EventType::KNOWN.iter().find(|t| t.as_str() == code) {
            return Ok(known.clone());
        }

        let valid_custom = !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if valid_custom {
            Ok(EventType::Custom(code))
        } else {
            Err(TaggerError::UnknownEventType {
                input: s.to_string(),
            })
        }
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.as_str().to_string()
    }
}

impl TryFrom<String> for EventType {
    type Error = TaggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// One entry of a sub-action or sub-event vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubOption {
    pub code: &'static str,
    pub label: &'static str,
}

const fn opt(code: &'static str, label: &'static str) -> SubOption {
    SubOption { code, label }
}

/// Static description of one built-in event type.
#[derive(Debug, Clone, Copy)]
pub struct EventTypeInfo {
    pub code: &'static str,
    pub label: &'static str,
    /// Capture asks for a field position.
    pub pitch_position: bool,
    /// Capture asks for origin and destination instead of a single position.
    pub dual_position: bool,
    /// Part of the older flat vocabulary.
    pub legacy: bool,
    pub sub_actions: &'static [SubOption],
    pub sub_events: &'static [SubOption],
}

const fn row(
    code: &'static str,
    label: &'static str,
    pitch_position: bool,
    dual_position: bool,
    sub_actions: &'static [SubOption],
    sub_events: &'static [SubOption],
) -> EventTypeInfo {
    EventTypeInfo {
        code,
        label,
        pitch_position,
        dual_position,
        legacy: false,
        sub_actions,
        sub_events,
    }
}

const fn legacy(code: &'static str, label: &'static str, pitch_position: bool, dual_position: bool) -> EventTypeInfo {
    EventTypeInfo {
        code,
        label,
        pitch_position,
        dual_position,
        legacy: true,
        sub_actions: &[],
        sub_events: &[],
    }
}

const SUCC_UNSUCC: &[SubOption] = &[opt("succ", "Succ"), opt("unsucc", "Unsucc")];
const SHOT_FOOT: &[SubOption] = &[opt("head", "Head"), opt("rf", "RF"), opt("lf", "LF")];
const SHOT_RESULT: &[SubOption] = &[
    opt("goal", "Goal"),
    opt("off_target", "Off Target"),
    opt("on_target", "On Target"),
    opt("blocked", "Blocked"),
];

/// The event-type table.
pub static EVENT_TYPES: &[EventTypeInfo] = &[
    row(
        "pass",
        "Pass",
        true,
        true,
        &[
            opt("short", "Short"),
            opt("long", "Long"),
            opt("back", "Back"),
            opt("cross", "Cross"),
            opt("deep_cross", "Deep Cross"),
            opt("head", "Head"),
            opt("smart", "Smart"),
            opt("through_ball", "Through Ball"),
            opt("deep_pass", "Deep Pass"),
            opt("switch_of_play", "Switch of Play"),
            opt("final_3rd", "Final 3rd"),
            opt("throw_in", "Throw In"),
            opt("into_penalty", "Into Penalty"),
            opt("key_chance_creating", "Key Chance-Creating"),
            opt("line_breaking_pass", "Line-Breaking Pass"),
            opt("progressive", "Progressive"),
        ],
        &[
            opt("succ", "Succ"),
            opt("failed", "Failed"),
            opt("succ_under_pressure", "Succ Under Pressure"),
            opt("failed_under_pressure", "Failed Under Pressure"),
            opt("primary_assist", "Primary Assist"),
        ],
    ),
    row(
        "duel",
        "Duel",
        true,
        false,
        &[
            opt("ground", "Ground"),
            opt("aerial", "Aerial"),
            opt("ground_2nd_ball", "Ground 2nd Ball"),
            opt("aerial_2nd_ball", "Aerial 2nd Ball"),
        ],
        &[opt("won", "Won"), opt("lost", "Lost")],
    ),
    row(
        "defensive_action",
        "Defensive Action",
        true,
        false,
        &[
            opt("clearance", "Clearance"),
            opt("interception", "Interception"),
            opt("defensive_header", "Defensive Header"),
            opt("tackle", "Tackle"),
            opt("slide_tackle", "Slide Tackle"),
            opt("block_shot", "Block Shot"),
            opt("block_cross", "Block Cross"),
        ],
        SUCC_UNSUCC,
    ),
    row(
        "dribbling",
        "Dribbling",
        true,
        false,
        &[opt("attempt", "Attempt")],
        SUCC_UNSUCC,
    ),
    row(
        "progressive_carry",
        "Progressive Carry",
        true,
        false,
        &[
            opt("acceleration", "Acceleration"),
            opt("no_acceleration", "No Acceleration"),
        ],
        SUCC_UNSUCC,
    ),
    row(
        "reception",
        "Reception",
        true,
        false,
        &[
            opt("under_pressure", "Under Pressure"),
            opt("no_pressure", "No Pressure"),
        ],
        &[opt("succ", "Succ"), opt("missed_control", "Missed Control")],
    ),
    row(
        "press",
        "Press",
        true,
        false,
        &[
            opt("pressing", "Pressing"),
            opt("counter_pressing", "Counter Pressing"),
        ],
        &[opt("attempt", "Attempt")],
    ),
    row("shot", "Shot", true, true, SHOT_FOOT, SHOT_RESULT),
    row(
        "shot_direction",
        "Shot Direction",
        true,
        false,
        &[
            opt("bottom_right", "Bottom Right"),
            opt("bottom_left", "Bottom Left"),
            opt("bottom_centre", "Bottom Centre"),
            opt("top_right", "Top Right"),
            opt("top_left", "Top Left"),
            opt("top_centre", "Top Centre"),
            opt("mid_right", "Mid Right"),
            opt("mid_left", "Mid Left"),
            opt("mid_centre", "Mid Centre"),
        ],
        &[
            opt("no_pressure", "No Pressure"),
            opt("under_pressure", "Under Pressure"),
        ],
    ),
    row(
        "shot_under_pressure",
        "Shot Under Pressure",
        true,
        false,
        SHOT_FOOT,
        SHOT_RESULT,
    ),
    row(
        "turn_over",
        "Turn Over",
        true,
        false,
        &[opt("transition", "Transition")],
        &[
            opt("won_possession", "Won Possession"),
            opt("lost_possession", "Lost Possession"),
            opt("counter_attack_won", "Counter Attack Won"),
            opt("counter_attack_against", "Counter Attack Against"),
        ],
    ),
    row(
        "foul",
        "Foul",
        true,
        false,
        &[opt("regular", "Regular"), opt("aggressive", "Aggressive")],
        &[
            opt("won", "Won"),
            opt("against", "Against"),
            opt("penalty_won", "Penalty Won"),
            opt("penalty_against", "Penalty Against"),
        ],
    ),
    row(
        "sub",
        "Substitution",
        false,
        false,
        &[opt("injury", "Injury"), opt("tactical", "Tactical")],
        &[opt("in", "In"), opt("out", "Out")],
    ),
    row(
        "free_kick",
        "Free Kick",
        true,
        true,
        &[
            opt("cross", "Cross"),
            opt("long", "Long"),
            opt("shot", "Shot"),
            opt("direct", "Direct"),
        ],
        &[
            opt("blocked_intercepted", "Blocked / Intercepted"),
            opt("completed", "Completed"),
            opt("on_target", "On Target"),
            opt("off_target", "Off Target"),
            opt("goal", "Goal"),
            opt("assist", "Assist"),
            opt("failed_trajectory", "Failed Trajectory"),
            opt("resulted_in_shot", "Resulted in Shot"),
        ],
    ),
    row(
        "corner",
        "Corner",
        true,
        true,
        &[
            opt("far_post", "Far Post"),
            opt("near_post", "Near Post"),
            opt("centre_box", "Centre Box"),
            opt("short", "Short"),
            opt("direct_goal", "Direct Goal"),
        ],
        &[
            opt("in_swing", "In Swing"),
            opt("out_swing", "Out Swing"),
            opt("straight", "Straight"),
        ],
    ),
    row(
        "goalkeeper_action",
        "Goalkeeper Action",
        true,
        false,
        &[
            opt("through_ball_pass_against", "Through Ball Pass Against"),
            opt("shot_against", "Shot Against"),
            opt("cross_against", "Cross Against"),
            opt("corner_against", "Corner Against"),
            opt("penalty_against", "Penalty Against"),
            opt("1_on_1", "1 on 1"),
        ],
        &[
            opt("goal_conceeded", "Goal Conceded"),
            opt("catch", "Catch"),
            opt("hand_save", "Hand Save"),
            opt("feet_reflex", "Feet Reflex"),
            opt("hit_the_bar", "Hit the Bar"),
        ],
    ),
    row(
        "gk_distribution",
        "GK Distribution",
        true,
        false,
        &[
            opt("feet_progressive_ground", "Feet Progressive Ground"),
            opt("feet_short", "Feet Short"),
            opt("hand_progressive_long_pass", "Hand Progressive Long Pass"),
            opt("hand_short", "Hand Short"),
            opt("goal_kick", "Goal Kick"),
            opt("hand_to_final_3rd", "Hand to Final 3rd"),
            opt("feet_to_final_3rd", "Feet to Final 3rd"),
        ],
        &[
            opt("succ", "Succ"),
            opt("unsucc", "Unsucc"),
            opt("assist", "Assist"),
            opt("key_into_penalty_area", "Key Into Penalty Area"),
        ],
    ),
    row(
        "card",
        "Card",
        true,
        false,
        &[opt("yellow", "Yellow"), opt("red", "Red")],
        &[opt("against", "Against")],
    ),
    row(
        "game_event",
        "Game Event",
        false,
        false,
        &[
            opt("dead_time", "Dead Time"),
            opt("1st_half", "1st Half"),
            opt("2nd_half", "2nd Half"),
            opt("offside", "Offside"),
            opt("own_goal", "Own Goal"),
            opt("extra_time", "Extra Time"),
            opt("extra_time_1", "Extra Time 1"),
            opt("extra_time_2", "Extra Time 2"),
        ],
        &[
            opt("start", "Start"),
            opt("end", "End"),
            opt("against", "Against"),
            opt("won", "Won"),
        ],
    ),
    row(
        "counter_attack",
        "Counter Attack",
        true,
        false,
        &[
            opt("ball_pressing", "Ball Pressing"),
            opt("no_pressing", "No Pressing"),
        ],
        SUCC_UNSUCC,
    ),
    row(
        "penalty",
        "Penalty",
        true,
        true,
        &[opt("left_foot", "Left Foot"), opt("right_foot", "Right Foot")],
        &[
            opt("goal", "Goal"),
            opt("missed", "Missed"),
            opt("off_target", "Off Target"),
            opt("hit_the_bar", "Hit the Bar"),
        ],
    ),
    legacy("goal", "Goal", true, true),
    legacy("save", "Save", true, false),
    legacy("tackle", "Tackle", true, false),
    legacy("interception", "Interception", true, false),
    legacy("clearance", "Clearance", true, false),
    legacy("cross", "Cross", true, true),
    legacy("throw_in", "Throw In", true, true),
    legacy("goal_kick", "Goal Kick", true, false),
    legacy("offside", "Offside", true, false),
    legacy("yellow_card", "Yellow Card", true, false),
    legacy("red_card", "Red Card", true, false),
    legacy("substitution", "Substitution", false, false),
    legacy("dribble", "Dribble", true, false),
    legacy("aerial_duel", "Aerial Duel", true, false),
    legacy("ball_recovery", "Ball Recovery", true, false),
];

/// Check `value` against the sub-action vocabulary of `event_type`.
pub fn check_sub_action(event_type: &EventType, value: &str) -> Result<()> {
    check_vocabulary(event_type, event_type.sub_actions(), "sub-action", value)
}

/// Check `value` against the sub-event vocabulary of `event_type`.
pub fn check_sub_event(event_type: &EventType, value: &str) -> Result<()> {
    check_vocabulary(event_type, event_type.sub_events(), "sub-event", value)
}

fn check_vocabulary(
    event_type: &EventType,
    vocabulary: &[SubOption],
    kind: &str,
    value: &str,
) -> Result<()> {
    if vocabulary.iter().any(|option| option.code == value) {
        Ok(())
    } else {
        Err(TaggerError::UnknownQualifier {
            kind: kind.to_string(),
            value: value.to_string(),
            event_type: event_type.to_string(),
        })
    }
}
