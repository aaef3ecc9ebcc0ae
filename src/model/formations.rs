//! Formation templates and roster layout.
//!
//! Templates are written for the home side attacking toward `x = 100`.
//! The away side is laid out mirrored across the halfway line.

use crate::cli::types::{RoleGroup, TeamSide};
use crate::error::{Result, TaggerError};
use crate::model::{FieldCoordinates, Team};

/// Slot coordinates for each line of a formation.
#[derive(Debug, Clone, Copy)]
pub struct Formation {
    pub name: &'static str,
    pub description: &'static str,
    pub goalkeeper: (f64, f64),
    pub defence: &'static [(f64, f64)],
    pub midfield: &'static [(f64, f64)],
    pub attack: &'static [(f64, f64)],
}

const BACK_FOUR: &[(f64, f64)] = &[(25.0, 15.0), (25.0, 35.0), (25.0, 65.0), (25.0, 85.0)];
const FRONT_TWO: &[(f64, f64)] = &[(75.0, 40.0), (75.0, 60.0)];

pub static FORMATIONS: &[Formation] = &[
    Formation {
        name: "4-4-2",
        description: "Classic balanced formation",
        goalkeeper: (10.0, 50.0),
        defence: BACK_FOUR,
        midfield: &[(50.0, 15.0), (50.0, 35.0), (50.0, 65.0), (50.0, 85.0)],
        attack: FRONT_TWO,
    },
    Formation {
        name: "4-3-3",
        description: "Attacking formation",
        goalkeeper: (10.0, 50.0),
        defence: BACK_FOUR,
        midfield: &[(50.0, 25.0), (50.0, 50.0), (50.0, 75.0)],
        attack: &[(75.0, 20.0), (75.0, 50.0), (75.0, 80.0)],
    },
    Formation {
        name: "3-5-2",
        description: "Defensive with wing-backs",
        goalkeeper: (10.0, 50.0),
        defence: &[(25.0, 25.0), (25.0, 50.0), (25.0, 75.0)],
        midfield: &[
            (45.0, 10.0),
            (50.0, 30.0),
            (50.0, 50.0),
            (50.0, 70.0),
            (45.0, 90.0),
        ],
        attack: FRONT_TWO,
    },
    Formation {
        name: "4-2-3-1",
        description: "Modern balanced formation",
        goalkeeper: (10.0, 50.0),
        defence: BACK_FOUR,
        midfield: &[
            (45.0, 35.0),
            (45.0, 65.0),
            (65.0, 20.0),
            (65.0, 50.0),
            (65.0, 80.0),
        ],
        attack: &[(80.0, 50.0)],
    },
    Formation {
        name: "5-3-2",
        description: "Ultra defensive formation",
        goalkeeper: (10.0, 50.0),
        defence: &[
            (25.0, 10.0),
            (25.0, 30.0),
            (25.0, 50.0),
            (25.0, 70.0),
            (25.0, 90.0),
        ],
        midfield: &[(50.0, 30.0), (50.0, 50.0), (50.0, 70.0)],
        attack: FRONT_TWO,
    },
];

pub fn find_formation(name: &str) -> Result<&'static Formation> {
    let wanted = name.trim();
    FORMATIONS
        .iter()
        .find(|f| f.name == wanted)
        .ok_or_else(|| TaggerError::UnknownFormation {
            name: name.to_string(),
        })
}

pub fn formation_names() -> Vec<&'static str> {
    FORMATIONS.iter().map(|f| f.name).collect()
}

impl Formation {
    fn slots(&self, group: RoleGroup) -> &[(f64, f64)] {
        match group {
            RoleGroup::Goalkeeper => std::slice::from_ref(&self.goalkeeper),
            RoleGroup::Defence => self.defence,
            RoleGroup::Midfield => self.midfield,
            RoleGroup::Attack => self.attack,
        }
    }
}

/// Lay out `team` according to the named formation.
///
/// Players are placed line by line in roster order. Players beyond the
/// number of slots in their line keep their current position. The team's
/// `formation` field is updated. Returns the number of players moved.
pub fn apply_formation(team: &mut Team, side: TeamSide, name: &str) -> Result<usize> {
    let formation = find_formation(name)?;
    let mut used = [0usize; 4];
    let mut moved = 0;

    for player in team.players.iter_mut() {
        let group = player.position.group();
        let line = group_index(group);
        let Some(&(x, y)) = formation.slots(group).get(used[line]) else {
            continue;
        };
        used[line] += 1;

        let spot = FieldCoordinates::new(x, y);
        player.field_position = match side {
            TeamSide::Home => spot,
            TeamSide::Away => spot.mirrored(),
        };
        moved += 1;
    }

    team.formation = formation.name.to_string();
    log::info!(
        "Applied formation {} to {} ({} players placed)",
        formation.name,
        team.name,
        moved
    );
    Ok(moved)
}

fn group_index(group: RoleGroup) -> usize {
    match group {
        RoleGroup::Goalkeeper => 0,
        RoleGroup::Defence => 1,
        RoleGroup::Midfield => 2,
        RoleGroup::Attack => 3,
    }
}
