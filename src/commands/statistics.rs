//! Statistics command implementation

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    cli::types::PlayerId,
    stats::{
        compute_all_player_statistics, compute_heat_map, compute_match_statistics,
        compute_player_statistics, HeatMapData, PlayerStatistics, TeamStatistics,
        DEFAULT_HEAT_MAP_COLUMNS, DEFAULT_HEAT_MAP_ROWS,
    },
    TaggerError,
};

use super::common::SessionContext;

/// Inputs for `stats`.
#[derive(Debug, Clone, Default)]
pub struct StatsParams {
    pub player: Option<PlayerId>,
    pub all_players: bool,
    pub heat_map: Option<PlayerId>,
    pub as_json: bool,
}

pub fn handle_stats(session: Option<PathBuf>, params: StatsParams) -> Result<()> {
    let ctx = SessionContext::open(session)?;
    let m = ctx.require_match()?;
    let events = ctx.store.events();

    if let Some(player_id) = &params.heat_map {
        if m.find_player(player_id).is_none() {
            return Err(TaggerError::PlayerNotFound {
                id: player_id.to_string(),
            }
            .into());
        }
        let heat_map = compute_heat_map(
            player_id,
            &m.id,
            events,
            DEFAULT_HEAT_MAP_COLUMNS,
            DEFAULT_HEAT_MAP_ROWS,
        );
        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&heat_map)?);
        } else {
            print_heat_map(&heat_map);
        }
        return Ok(());
    }

    if let Some(player_id) = &params.player {
        let stats = compute_player_statistics(player_id, &m.id, events);
        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            let name = m.find_player(player_id).map_or("?", |p| p.name.as_str());
            print_player_header();
            print_player_row(name, &stats);
        }
        return Ok(());
    }

    if params.all_players {
        let all = compute_all_player_statistics(m, events);
        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&all)?);
        } else {
            print_player_header();
            for stats in &all {
                let name = m.find_player(&stats.player_id).map_or("?", |p| p.name.as_str());
                print_player_row(name, stats);
            }
        }
        return Ok(());
    }

    let stats = compute_match_statistics(m, events);
    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "{:<22} {:>10} {:>10}",
            "", m.home_team.name, m.away_team.name
        );
        let home = team_rows(&stats.home_team);
        let away = team_rows(&stats.away_team);
        for ((label, home_value), (_, away_value)) in home.iter().zip(&away) {
            println!("{:<22} {:>10} {:>10}", label, home_value, away_value);
        }
    }
    Ok(())
}

fn team_rows(t: &TeamStatistics) -> Vec<(&'static str, String)> {
    vec![
        ("Possession %", format!("{:.1}", t.possession)),
        ("Passes", t.total_passes.to_string()),
        ("Pass accuracy %", format!("{:.1}", t.pass_accuracy)),
        (
            "Long / short passes",
            format!("{}/{}", t.long_passes, t.short_passes),
        ),
        ("Shots", t.shots.to_string()),
        ("Shots on target", t.shots_on_target.to_string()),
        ("Shots off target", t.shots_off_target.to_string()),
        ("Blocked shots", t.blocked_shots.to_string()),
        ("Goals", t.goals.to_string()),
        ("xG", format!("{:.2}", t.xg)),
        ("Crosses", format!("{}/{}", t.successful_crosses, t.crosses)),
        ("Corners", t.corners.to_string()),
        ("Offsides", t.offsides.to_string()),
        (
            "Dribbles",
            format!("{}/{}", t.successful_dribbles, t.dribbles),
        ),
        ("Tackles", format!("{}/{}", t.successful_tackles, t.tackles)),
        ("Interceptions", t.interceptions.to_string()),
        ("Clearances", t.clearances.to_string()),
        ("Fouls", t.fouls.to_string()),
        (
            "Yellow / red cards",
            format!("{}/{}", t.yellow_cards, t.red_cards),
        ),
        (
            "Aerial duels won",
            format!("{}/{}", t.aerial_duels_won, t.aerial_duels),
        ),
        (
            "Penalties scored",
            format!("{}/{}", t.penalties_scored, t.penalties),
        ),
    ]
}

fn print_player_header() {
    println!(
        "{:<24} {:>6} {:>6} {:>5} {:>6} {:>5} {:>5} {:>6}",
        "Player", "Passes", "Acc%", "Shots", "Goals", "xG", "Tkl", "Touch"
    );
}

fn print_player_row(name: &str, stats: &PlayerStatistics) {
    println!(
        "{:<24} {:>6} {:>6.1} {:>5} {:>6} {:>5.2} {:>5} {:>6}",
        name,
        stats.passes,
        stats.pass_accuracy,
        stats.shots,
        stats.goals,
        stats.xg,
        stats.tackles,
        stats.touches
    );
}

/// Text grid, one row of zones per line, attacking left to right.
fn print_heat_map(heat_map: &HeatMapData) {
    println!("Heat map for {}", heat_map.player_id);
    for row in heat_map.zones.chunks(DEFAULT_HEAT_MAP_COLUMNS) {
        let cells: Vec<String> = row.iter().map(|z| format!("{:>3}", z.touches)).collect();
        println!("  |{} |", cells.join(" "));
    }
}
