//! Match setup: init, show, rename, formations, status and player moves.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    cli::types::{MatchStatus, PlayerId, TeamSide},
    core::try_read_to_string,
    model::{FieldCoordinates, Match, MatchPatch},
    TaggerError,
};

use super::common::SessionContext;

/// Inputs for `match init`.
#[derive(Debug, Clone, Default)]
pub struct MatchInitParams {
    pub from: Option<PathBuf>,
    pub formation_home: Option<String>,
    pub formation_away: Option<String>,
}

/// Start a new match. Any tagged events are discarded.
pub fn handle_match_init(session: Option<PathBuf>, params: MatchInitParams) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;

    let m = match &params.from {
        Some(path) => {
            let json = try_read_to_string(path)
                .with_context(|| format!("Cannot read match file {}", path.display()))?;
            serde_json::from_str::<Match>(&json)
                .with_context(|| format!("Invalid match file {}", path.display()))?
        }
        None => Match::demo(),
    };

    ctx.store.initialize_match(m);
    if let Some(formation) = &params.formation_home {
        ctx.store.apply_formation(TeamSide::Home, formation)?;
    }
    if let Some(formation) = &params.formation_away {
        ctx.store.apply_formation(TeamSide::Away, formation)?;
    }
    ctx.save()?;

    let m = ctx.require_match()?;
    println!(
        "✓ Match {} initialized: {} vs {}",
        m.id, m.home_team.name, m.away_team.name
    );
    Ok(())
}

pub fn handle_match_show(session: Option<PathBuf>, as_json: bool) -> Result<()> {
    let ctx = SessionContext::open(session)?;
    let m = ctx.require_match()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(m)?);
        return Ok(());
    }

    println!("{} vs {} ({})", m.home_team.name, m.away_team.name, m.id);
    println!("Competition: {}  Venue: {}", m.competition, m.venue);
    println!(
        "Status: {}  Recording: {}  Events: {}",
        m.status,
        if ctx.store.is_recording() { "on" } else { "off" },
        ctx.store.event_count()
    );
    for side in [TeamSide::Home, TeamSide::Away] {
        let team = m.team(side);
        println!();
        println!("{} ({}, {})", team.name, side, team.formation);
        for p in &team.players {
            println!(
                "  #{:<3} {:<4} {:<24} {:<16} {}",
                p.jersey_number,
                p.position.to_string(),
                p.name,
                p.id.to_string(),
                p.field_position
            );
        }
    }
    Ok(())
}

/// Inputs for `match rename`.
#[derive(Debug, Clone, Default)]
pub struct MatchRenameParams {
    pub home: Option<String>,
    pub away: Option<String>,
    pub venue: Option<String>,
    pub competition: Option<String>,
}

pub fn handle_match_rename(session: Option<PathBuf>, params: MatchRenameParams) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    let m = ctx.require_match()?;

    let rename = |side: TeamSide, name: Option<String>| {
        name.map(|name| {
            let mut team = m.team(side).clone();
            team.name = name;
            team
        })
    };
    let patch = MatchPatch {
        home_team: rename(TeamSide::Home, params.home),
        away_team: rename(TeamSide::Away, params.away),
        venue: params.venue,
        competition: params.competition,
        ..MatchPatch::default()
    };

    ctx.store.update_match(patch)?;
    ctx.save()?;
    println!("✓ Match updated");
    Ok(())
}

pub fn handle_match_formation(session: Option<PathBuf>, team: TeamSide, formation: &str) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    let moved = ctx.store.apply_formation(team, formation)?;
    ctx.save()?;
    println!("✓ {} side set to {} ({} players placed)", team, formation, moved);
    Ok(())
}

pub fn handle_match_status(session: Option<PathBuf>, status: MatchStatus) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    ctx.store.update_match(MatchPatch {
        status: Some(status),
        ..MatchPatch::default()
    })?;
    ctx.save()?;
    println!("✓ Match status: {}", status);
    Ok(())
}

pub fn handle_player_move(
    session: Option<PathBuf>,
    player: &PlayerId,
    position: FieldCoordinates,
) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    ctx.require_match()?;
    if !ctx.store.update_player_position(player, position) {
        return Err(TaggerError::PlayerNotFound {
            id: player.to_string(),
        }
        .into());
    }
    ctx.save()?;
    println!("✓ {} moved to {}", player, position.clamped());
    Ok(())
}
