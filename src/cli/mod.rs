//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{EventId, EventOutcome, MatchPeriod, MatchStatus, PlayerId, TeamSide, VideoTime};

use crate::model::{EventType, FieldCoordinates};

#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[clap(name = "match-tagger", about = "Football match event tagging")]
pub struct MatchTagger {
    /// Session file (or set `MATCH_TAGGER_SESSION` env var).
    #[clap(long, global = true)]
    pub session: Option<PathBuf>,

    /// Log progress to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set up and inspect the match being tagged
    Match {
        #[clap(subcommand)]
        cmd: MatchCmd,
    },

    /// Start or stop recording
    Record {
        #[clap(subcommand)]
        cmd: RecordCmd,
    },

    /// Edit rostered players
    Player {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Add, edit and query tagged events
    Event {
        #[clap(subcommand)]
        cmd: EventCmd,
    },

    /// Team and player statistics derived from the event log.
    ///
    /// Without options prints the home/away comparison.
    Stats {
        /// Statistics for a single player.
        #[clap(long, short)]
        player: Option<PlayerId>,

        /// Statistics for every rostered player.
        #[clap(long, conflicts_with = "player")]
        all_players: bool,

        /// Zone grid of where a player's events happened.
        #[clap(long)]
        heat_map: Option<PlayerId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Run the validation rules over events and statistics
    Validate {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Write `{match, events, exportedAt}` to a file
    Export { file: PathBuf },

    /// Replace the match and/or events from an export file
    Import { file: PathBuf },

    /// List the event taxonomy
    Types,
}

#[derive(Debug, Subcommand)]
pub enum MatchCmd {
    /// Start a new match, discarding any tagged events.
    ///
    /// Uses the demo rosters unless `--from` names a match JSON file.
    Init {
        /// Read the match record from a JSON file.
        #[clap(long)]
        from: Option<PathBuf>,

        /// Formation to lay out the home side with, e.g. `4-3-3`.
        #[clap(long)]
        formation_home: Option<String>,

        /// Formation to lay out the away side with.
        #[clap(long)]
        formation_away: Option<String>,
    },

    /// Print the current match
    Show {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rename teams and set venue/competition
    Rename {
        #[clap(long)]
        home: Option<String>,

        #[clap(long)]
        away: Option<String>,

        #[clap(long)]
        venue: Option<String>,

        #[clap(long)]
        competition: Option<String>,
    },

    /// Lay out one side with a named formation
    Formation {
        #[clap(long, short)]
        team: TeamSide,

        #[clap(long, short)]
        formation: String,
    },

    /// Set the match status
    Status { status: MatchStatus },
}

#[derive(Debug, Subcommand)]
pub enum RecordCmd {
    Start,
    Stop,
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Move a player on the pitch (clamped to the field)
    Move {
        player: PlayerId,
        /// Field position as `x,y` percentages.
        #[clap(allow_hyphen_values = true)]
        position: FieldCoordinates,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventCmd {
    /// Tag a new event through the capture steps
    Add(EventAddArgs),

    /// Change fields of a tagged event
    Update(EventUpdateArgs),

    /// Delete a tagged event
    Delete { id: EventId },

    /// List tagged events
    List(EventListArgs),

    /// Delete every tagged event
    Clear,
}

/// Inputs for one capture. Which coordinates are needed depends on the
/// event type: `--position` for single-point types, `--origin` and
/// `--destination` for passes, crosses and other dual-point types.
#[derive(Debug, Clone, Args)]
pub struct EventAddArgs {
    /// Event type code, e.g. `pass`, `shot`, `yellow_card`.
    #[clap(long = "type", short = 't')]
    pub event_type: EventType,

    /// Acting player id.
    #[clap(long, short)]
    pub player: PlayerId,

    /// Side of the acting player (looked up from the rosters if omitted).
    #[clap(long)]
    pub team: Option<TeamSide>,

    /// Video time as seconds or `mm:ss` (defaults to the match clock).
    #[clap(long)]
    pub at: Option<VideoTime>,

    #[clap(long)]
    pub position: Option<FieldCoordinates>,

    #[clap(long)]
    pub origin: Option<FieldCoordinates>,

    #[clap(long)]
    pub destination: Option<FieldCoordinates>,

    /// Receiving player for passes.
    #[clap(long)]
    pub receiver: Option<PlayerId>,

    #[clap(long)]
    pub outcome: Option<EventOutcome>,

    #[clap(long)]
    pub period: Option<MatchPeriod>,

    #[clap(long)]
    pub sub_action: Option<String>,

    #[clap(long)]
    pub sub_event: Option<String>,

    /// Shot was on target.
    #[clap(long)]
    pub on_target: bool,

    /// Shot was blocked.
    #[clap(long)]
    pub blocked: bool,

    /// Expected-goals value of a shot.
    #[clap(long)]
    pub xg: Option<f64>,

    /// Player credited with the assist.
    #[clap(long)]
    pub assist: Option<PlayerId>,

    /// Player who was fouled.
    #[clap(long)]
    pub victim: Option<PlayerId>,

    /// Use the fixed 4/6 step flow where every dual-point type has a
    /// receiver step.
    #[clap(long)]
    pub legacy_steps: bool,
}

impl EventAddArgs {
    /// Minimal arguments for `event_type` by `player`; everything else unset.
    pub fn new(event_type: EventType, player: PlayerId) -> Self {
        Self {
            event_type,
            player,
            team: None,
            at: None,
            position: None,
            origin: None,
            destination: None,
            receiver: None,
            outcome: None,
            period: None,
            sub_action: None,
            sub_event: None,
            on_target: false,
            blocked: false,
            xg: None,
            assist: None,
            victim: None,
            legacy_steps: false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct EventUpdateArgs {
    pub id: EventId,

    #[clap(long)]
    pub outcome: Option<EventOutcome>,

    /// New video time; the match minute follows.
    #[clap(long)]
    pub at: Option<VideoTime>,

    #[clap(long)]
    pub position: Option<FieldCoordinates>,

    #[clap(long)]
    pub origin: Option<FieldCoordinates>,

    #[clap(long)]
    pub destination: Option<FieldCoordinates>,

    #[clap(long)]
    pub receiver: Option<PlayerId>,

    #[clap(long)]
    pub sub_event: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct EventListArgs {
    #[clap(long = "type", short = 't')]
    pub event_type: Option<EventType>,

    #[clap(long, short)]
    pub player: Option<PlayerId>,

    #[clap(long)]
    pub team: Option<TeamSide>,

    /// Earliest video time, inclusive.
    #[clap(long)]
    pub from: Option<VideoTime>,

    /// Latest video time, inclusive.
    #[clap(long)]
    pub to: Option<VideoTime>,

    /// Order by timestamp instead of insertion.
    #[clap(long)]
    pub sorted: bool,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}
