//! Enumerations shared by events, rosters and CLI filters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the match a player or event belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        };
        write!(f, "{}", s)
    }
}

/// Result of a tagged action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum EventOutcome {
    #[default]
    Successful,
    Unsuccessful,
    Neutral,
}

impl fmt::Display for EventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventOutcome::Successful => "successful",
            EventOutcome::Unsuccessful => "unsuccessful",
            EventOutcome::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

/// Period of play an event was recorded in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum MatchPeriod {
    #[default]
    FirstHalf,
    SecondHalf,
    ExtraTimeFirst,
    ExtraTimeSecond,
    PenaltyShootout,
}

impl fmt::Display for MatchPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchPeriod::FirstHalf => "first_half",
            MatchPeriod::SecondHalf => "second_half",
            MatchPeriod::ExtraTimeFirst => "extra_time_first",
            MatchPeriod::ExtraTimeSecond => "extra_time_second",
            MatchPeriod::PenaltyShootout => "penalty_shootout",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle state of the match being tagged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    NotStarted,
    FirstHalf,
    HalfTime,
    SecondHalf,
    ExtraTimeFirstHalf,
    ExtraTimeSecondHalf,
    PenaltyShootout,
    Finished,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::NotStarted => "not_started",
            MatchStatus::FirstHalf => "first_half",
            MatchStatus::HalfTime => "half_time",
            MatchStatus::SecondHalf => "second_half",
            MatchStatus::ExtraTimeFirstHalf => "extra_time_first_half",
            MatchStatus::ExtraTimeSecondHalf => "extra_time_second_half",
            MatchStatus::PenaltyShootout => "penalty_shootout",
            MatchStatus::Finished => "finished",
        };
        write!(f, "{}", s)
    }
}
