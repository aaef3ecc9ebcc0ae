//! Football player roles and their formation groups.

use crate::error::TaggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// On-field role of a player.
///
/// Ten roles are tracked, from goalkeeper to striker. Each role belongs to
/// one [`RoleGroup`], which is how formation templates place players.
///
/// # Examples
///
/// ```rust
/// use match_tagger::PlayerPosition;
///
/// let cam: PlayerPosition = "cam".parse().unwrap();
/// assert_eq!(cam, PlayerPosition::CAM);
/// assert_eq!(cam.to_string(), "CAM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    GK,
    CB,
    LB,
    RB,
    CDM,
    CM,
    CAM,
    LW,
    RW,
    ST,
}

/// Line of the formation a role is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleGroup {
    Goalkeeper,
    Defence,
    Midfield,
    Attack,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 10] = [
        PlayerPosition::GK,
        PlayerPosition::CB,
        PlayerPosition::LB,
        PlayerPosition::RB,
        PlayerPosition::CDM,
        PlayerPosition::CM,
        PlayerPosition::CAM,
        PlayerPosition::LW,
        PlayerPosition::RW,
        PlayerPosition::ST,
    ];

    /// Formation line this role is placed in.
    pub fn group(&self) -> RoleGroup {
        match self {
            PlayerPosition::GK => RoleGroup::Goalkeeper,
            PlayerPosition::CB | PlayerPosition::LB | PlayerPosition::RB => RoleGroup::Defence,
            PlayerPosition::CDM
            | PlayerPosition::CM
            | PlayerPosition::CAM
            | PlayerPosition::LW
            | PlayerPosition::RW => RoleGroup::Midfield,
            PlayerPosition::ST => RoleGroup::Attack,
        }
    }

    /// Human readable role name.
    pub fn description(&self) -> &'static str {
        match self {
            PlayerPosition::GK => "Goalkeeper",
            PlayerPosition::CB => "Center Back",
            PlayerPosition::LB => "Left Back",
            PlayerPosition::RB => "Right Back",
            PlayerPosition::CDM => "Defensive Midfielder",
            PlayerPosition::CM => "Central Midfielder",
            PlayerPosition::CAM => "Attacking Midfielder",
            PlayerPosition::LW => "Left Winger",
            PlayerPosition::RW => "Right Winger",
            PlayerPosition::ST => "Striker",
        }
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerPosition::GK => "GK",
            PlayerPosition::CB => "CB",
            PlayerPosition::LB => "LB",
            PlayerPosition::RB => "RB",
            PlayerPosition::CDM => "CDM",
            PlayerPosition::CM => "CM",
            PlayerPosition::CAM => "CAM",
            PlayerPosition::LW => "LW",
            PlayerPosition::RW => "RW",
            PlayerPosition::ST => "ST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlayerPosition {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GOALKEEPER" => Ok(PlayerPosition::GK),
            "CB" => Ok(PlayerPosition::CB),
            "LB" => Ok(PlayerPosition::LB),
            "RB" => Ok(PlayerPosition::RB),
            "CDM" | "DM" => Ok(PlayerPosition::CDM),
            "CM" => Ok(PlayerPosition::CM),
            "CAM" | "AM" => Ok(PlayerPosition::CAM),
            "LW" => Ok(PlayerPosition::LW),
            "RW" => Ok(PlayerPosition::RW),
            "ST" | "CF" => Ok(PlayerPosition::ST),
            _ => Err(TaggerError::UnknownPosition {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_groups() {
        assert_eq!(PlayerPosition::GK.group(), RoleGroup::Goalkeeper);
        assert_eq!(PlayerPosition::CB.group(), RoleGroup::Defence);
        assert_eq!(PlayerPosition::LB.group(), RoleGroup::Defence);
        assert_eq!(PlayerPosition::RB.group(), RoleGroup::Defence);
        assert_eq!(PlayerPosition::CDM.group(), RoleGroup::Midfield);
        assert_eq!(PlayerPosition::CM.group(), RoleGroup::Midfield);
        assert_eq!(PlayerPosition::CAM.group(), RoleGroup::Midfield);
        assert_eq!(PlayerPosition::LW.group(), RoleGroup::Midfield);
        assert_eq!(PlayerPosition::RW.group(), RoleGroup::Midfield);
        assert_eq!(PlayerPosition::ST.group(), RoleGroup::Attack);
    }

    #[test]
    fn test_position_string_round_trip() {
        for position in PlayerPosition::ALL {
            let parsed: PlayerPosition = position.to_string().parse().unwrap();
            assert_eq!(parsed, position);
        }
    }

    #[test]
    fn test_position_aliases() {
        assert_eq!("dm".parse::<PlayerPosition>().unwrap(), PlayerPosition::CDM);
        assert_eq!("cf".parse::<PlayerPosition>().unwrap(), PlayerPosition::ST);
        assert!("QB".parse::<PlayerPosition>().is_err());
    }

    #[test]
    fn test_position_serde_uses_role_code() {
        let json = serde_json::to_string(&PlayerPosition::CDM).unwrap();
        assert_eq!(json, "\"CDM\"");
    }
}
