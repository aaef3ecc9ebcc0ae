//! Match, team and player records.

use crate::cli::types::{MatchId, MatchStatus, PlayerId, PlayerPosition, TeamSide};
use crate::model::FieldCoordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub jersey_number: u32,
    pub team: TeamSide,
    pub position: PlayerPosition,
    pub field_position: FieldCoordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub formation: String,
    pub players: Vec<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Team {
    pub fn find_player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn has_player(&self, id: &PlayerId) -> bool {
        self.find_player(id).is_some()
    }
}

/// The match being tagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub home_team: Team,
    pub away_team: Team,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub competition: String,
    /// Length of the match video, in seconds.
    pub duration: f64,
    pub status: MatchStatus,
    pub current_timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Match {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Home => &mut self.home_team,
            TeamSide::Away => &mut self.away_team,
        }
    }

    /// Look a player up in either roster.
    pub fn find_player(&self, id: &PlayerId) -> Option<&Player> {
        self.home_team
            .find_player(id)
            .or_else(|| self.away_team.find_player(id))
    }

    pub fn find_player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.home_team
            .players
            .iter_mut()
            .chain(self.away_team.players.iter_mut())
            .find(|p| &p.id == id)
    }

    /// Both rosters, home first.
    pub fn all_players(&self) -> impl Iterator<Item = &Player> {
        self.home_team.players.iter().chain(self.away_team.players.iter())
    }

    /// Which side rosters `id`, if any.
    pub fn side_of(&self, id: &PlayerId) -> Option<TeamSide> {
        if self.home_team.has_player(id) {
            Some(TeamSide::Home)
        } else if self.away_team.has_player(id) {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    /// Two 11-player rosters in 4-3-3 (home) and 4-4-2 (away), first half.
    pub fn demo() -> Self {
        let now = Utc::now();
        Self {
            id: MatchId::new(format!("match-{}", now.timestamp_millis())),
            home_team: Team {
                id: "team-home".to_string(),
                name: "Home Team".to_string(),
                formation: "4-3-3".to_string(),
                players: demo_players(TeamSide::Home),
                logo: None,
            },
            away_team: Team {
                id: "team-away".to_string(),
                name: "Away Team".to_string(),
                formation: "4-4-2".to_string(),
                players: demo_players(TeamSide::Away),
                logo: None,
            },
            date: now,
            venue: "Demo Stadium".to_string(),
            competition: "Demo League".to_string(),
            duration: 5400.0,
            status: MatchStatus::FirstHalf,
            current_timestamp: 0.0,
            video_url: None,
        }
    }

    /// Replace every field the patch sets. Rosters are replaced wholesale.
    pub fn apply_patch(&mut self, patch: MatchPatch) {
        if let Some(home_team) = patch.home_team {
            self.home_team = home_team;
        }
        if let Some(away_team) = patch.away_team {
            self.away_team = away_team;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(venue) = patch.venue {
            self.venue = venue;
        }
        if let Some(competition) = patch.competition {
            self.competition = competition;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(current_timestamp) = patch.current_timestamp {
            self.current_timestamp = current_timestamp;
        }
        if let Some(video_url) = patch.video_url {
            self.video_url = video_url;
        }
    }
}

/// Partial match update from the roster editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPatch {
    pub home_team: Option<Team>,
    pub away_team: Option<Team>,
    pub date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub competition: Option<String>,
    pub duration: Option<f64>,
    pub status: Option<MatchStatus>,
    pub current_timestamp: Option<f64>,
    /// `Some(None)` clears the video url.
    pub video_url: Option<Option<String>>,
}

const HOME_LAYOUT: [(PlayerPosition, f64, f64); 11] = [
    (PlayerPosition::GK, 10.0, 50.0),
    (PlayerPosition::CB, 25.0, 30.0),
    (PlayerPosition::CB, 25.0, 70.0),
    (PlayerPosition::LB, 25.0, 10.0),
    (PlayerPosition::RB, 25.0, 90.0),
    (PlayerPosition::CDM, 40.0, 50.0),
    (PlayerPosition::CM, 50.0, 35.0),
    (PlayerPosition::CM, 50.0, 65.0),
    (PlayerPosition::LW, 70.0, 20.0),
    (PlayerPosition::RW, 70.0, 80.0),
    (PlayerPosition::ST, 80.0, 50.0),
];

fn demo_players(side: TeamSide) -> Vec<Player> {
    HOME_LAYOUT
        .iter()
        .enumerate()
        .map(|(i, &(position, x, y))| {
            let home_spot = FieldCoordinates::new(x, y);
            let field_position = match side {
                TeamSide::Home => home_spot,
                TeamSide::Away => home_spot.mirrored(),
            };
            Player {
                id: PlayerId::new(format!("{}-player-{}", side, i + 1)),
                name: format!("Player {}", i + 1),
                jersey_number: (i + 1) as u32,
                team: side,
                position,
                field_position,
            }
        })
        .collect()
}
