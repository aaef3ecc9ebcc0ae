//! Team, match and player statistics from the event log.
//!
//! Every function is a single pass (or a fixed number of passes) over the
//! events and holds no state, so recomputing gives the same numbers.
//! Counters accept both the current and the legacy vocabulary: a `card`
//! with sub-action `yellow` is a yellow card just like a `yellow_card`.

use super::types::{MatchStatistics, PlayerStatistics, TeamStatistics};
use crate::cli::types::{EventOutcome, MatchId, PlayerId, TeamSide};
use crate::geometry::{pass_type_for_distance, PassLength};
use crate::model::{EventType, LiveEvent, Match};
use chrono::Utc;

fn count<'a>(events: impl IntoIterator<Item = &'a LiveEvent>, keep: impl Fn(&LiveEvent) -> bool) -> u32 {
    events.into_iter().filter(|e| keep(e)).count() as u32
}

fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn is_pass(e: &LiveEvent) -> bool {
    e.event_type == EventType::Pass
}

fn is_cross(e: &LiveEvent) -> bool {
    e.event_type == EventType::Cross
        || (is_pass(e) && (e.sub_action_is("cross") || e.sub_action_is("deep_cross")))
}

fn is_throw_in(e: &LiveEvent) -> bool {
    e.event_type == EventType::ThrowIn || (is_pass(e) && e.sub_action_is("throw_in"))
}

fn is_key_pass(e: &LiveEvent) -> bool {
    is_pass(e) && (e.sub_action_is("key_chance_creating") || e.sub_event_is("primary_assist"))
}

fn is_dribble(e: &LiveEvent) -> bool {
    matches!(e.event_type, EventType::Dribble | EventType::Dribbling)
}

fn defensive_action(e: &LiveEvent, codes: &[&str]) -> bool {
    e.event_type == EventType::DefensiveAction && codes.iter().any(|c| e.sub_action_is(c))
}

fn is_tackle(e: &LiveEvent) -> bool {
    e.event_type == EventType::Tackle || defensive_action(e, &["tackle", "slide_tackle"])
}

fn is_interception(e: &LiveEvent) -> bool {
    e.event_type == EventType::Interception || defensive_action(e, &["interception"])
}

fn is_clearance(e: &LiveEvent) -> bool {
    e.event_type == EventType::Clearance || defensive_action(e, &["clearance"])
}

fn is_aerial_duel(e: &LiveEvent) -> bool {
    e.event_type == EventType::AerialDuel
        || (e.event_type == EventType::Duel
            && (e.sub_action_is("aerial") || e.sub_action_is("aerial_2nd_ball")))
}

fn is_ground_duel(e: &LiveEvent) -> bool {
    e.event_type == EventType::Duel
        && (e.sub_action_is("ground") || e.sub_action_is("ground_2nd_ball"))
}

fn is_duel(e: &LiveEvent) -> bool {
    is_tackle(e) || is_aerial_duel(e) || e.event_type == EventType::Duel
}

fn is_yellow_card(e: &LiveEvent) -> bool {
    e.event_type == EventType::YellowCard
        || (e.event_type == EventType::Card && e.sub_action_is("yellow"))
}

fn is_red_card(e: &LiveEvent) -> bool {
    e.event_type == EventType::RedCard
        || (e.event_type == EventType::Card && e.sub_action_is("red"))
}

fn is_offside(e: &LiveEvent) -> bool {
    e.event_type == EventType::Offside
        || (e.event_type == EventType::GameEvent && e.sub_action_is("offside"))
}

fn is_goal_kick(e: &LiveEvent) -> bool {
    e.event_type == EventType::GoalKick
        || (e.event_type == EventType::GkDistribution && e.sub_action_is("goal_kick"))
}

fn is_foul(e: &LiveEvent) -> bool {
    e.event_type == EventType::Foul
}

fn is_shot_on_target(e: &LiveEvent) -> bool {
    e.event_type.is_shot() && e.on_target()
}

fn is_blocked_shot(e: &LiveEvent) -> bool {
    e.event_type.is_shot() && !e.is_goal() && e.is_blocked()
}

fn is_penalty(e: &LiveEvent) -> bool {
    e.event_type == EventType::Penalty
}

fn is_penalty_scored(e: &LiveEvent) -> bool {
    is_penalty(e) && (e.is_successful() || e.sub_event_is("goal"))
}

fn xg_sum<'a>(events: impl IntoIterator<Item = &'a LiveEvent>) -> f64 {
    events
        .into_iter()
        .filter(|e| e.event_type.is_shot())
        .map(LiveEvent::xg)
        .sum()
}

/// Statistics for one side. Possession is left at 0; it only makes sense
/// relative to the other side (see [`compute_match_statistics`]).
pub fn compute_team_statistics(side: TeamSide, events: &[LiveEvent], m: &Match) -> TeamStatistics {
    let team_events: Vec<&LiveEvent> = events.iter().filter(|e| e.team == side).collect();
    let ev = || team_events.iter().copied();

    let total_passes = count(ev(), is_pass);
    let successful_passes = count(ev(), |e| is_pass(e) && e.is_successful());

    let mut long_passes = 0;
    let mut short_passes = 0;
    for distance in ev().filter(|e| is_pass(e)).filter_map(|e| e.distance) {
        match pass_type_for_distance(distance) {
            PassLength::Short => short_passes += 1,
            PassLength::Long | PassLength::ThroughBall => long_passes += 1,
        }
    }

    let shots = count(ev(), |e| e.event_type.is_shot());
    let shots_on_target = count(ev(), is_shot_on_target);
    let blocked_shots = count(ev(), is_blocked_shot);

    TeamStatistics {
        team_id: m.team(side).id.clone(),
        possession: 0.0,

        total_passes,
        successful_passes,
        pass_accuracy: percentage(successful_passes, total_passes),
        long_passes,
        short_passes,

        shots,
        shots_on_target,
        shots_off_target: shots as i64 - shots_on_target as i64 - blocked_shots as i64,
        blocked_shots,
        goals: count(ev(), LiveEvent::is_goal),
        xg: xg_sum(ev()),

        crosses: count(ev(), is_cross),
        successful_crosses: count(ev(), |e| is_cross(e) && e.is_successful()),
        corners: count(ev(), |e| e.event_type == EventType::Corner),
        offsides: count(ev(), is_offside),
        dribbles: count(ev(), is_dribble),
        successful_dribbles: count(ev(), |e| is_dribble(e) && e.is_successful()),

        tackles: count(ev(), is_tackle),
        successful_tackles: count(ev(), |e| is_tackle(e) && e.is_successful()),
        interceptions: count(ev(), is_interception),
        clearances: count(ev(), is_clearance),

        fouls: count(ev(), is_foul),
        fouls_suffered: count(events, |e| is_foul(e) && e.team != side),
        yellow_cards: count(ev(), is_yellow_card),
        red_cards: count(ev(), is_red_card),

        aerial_duels: count(ev(), is_aerial_duel),
        aerial_duels_won: count(ev(), |e| is_aerial_duel(e) && e.is_successful()),
        ground_duels: count(ev(), is_ground_duel),
        ground_duels_won: count(ev(), |e| is_ground_duel(e) && e.is_successful()),

        free_kicks: count(ev(), |e| e.event_type == EventType::FreeKick),
        penalties: count(ev(), is_penalty),
        penalties_scored: count(ev(), is_penalty_scored),
        throw_ins: count(ev(), is_throw_in),
        goal_kicks: count(ev(), is_goal_kick),
    }
}

/// Both sides plus the possession proxy.
///
/// Possession is each side's share of all successful passes; both stay 0
/// when nobody has completed a pass.
pub fn compute_match_statistics(m: &Match, events: &[LiveEvent]) -> MatchStatistics {
    let mut home = compute_team_statistics(TeamSide::Home, events, m);
    let mut away = compute_team_statistics(TeamSide::Away, events, m);

    let total = home.successful_passes + away.successful_passes;
    if total > 0 {
        home.possession = percentage(home.successful_passes, total);
        away.possession = percentage(away.successful_passes, total);
    }

    MatchStatistics {
        match_id: m.id.clone(),
        home_team: home,
        away_team: away,
        computed_at: Utc::now(),
    }
}

pub fn compute_player_statistics(
    player_id: &PlayerId,
    match_id: &MatchId,
    events: &[LiveEvent],
) -> PlayerStatistics {
    let own: Vec<&LiveEvent> = events.iter().filter(|e| &e.player_id == player_id).collect();
    let ev = || own.iter().copied();

    let passes = count(ev(), is_pass);
    let passes_completed = count(ev(), |e| is_pass(e) && e.is_successful());

    let duel_outcome = |outcome: EventOutcome| count(ev(), |e| is_duel(e) && e.outcome == outcome);

    PlayerStatistics {
        player_id: player_id.clone(),
        match_id: match_id.clone(),
        minutes_played: None,

        passes,
        passes_completed,
        pass_accuracy: percentage(passes_completed, passes),
        key_passes: count(ev(), is_key_pass),
        assists: count(events, |e| {
            e.is_goal() && e.assist_player_id().as_ref() == Some(player_id)
        }),

        shots: count(ev(), |e| e.event_type.is_shot()),
        shots_on_target: count(ev(), is_shot_on_target),
        goals: count(ev(), LiveEvent::is_goal),
        xg: xg_sum(ev()),

        tackles: count(ev(), is_tackle),
        interceptions: count(ev(), is_interception),
        clearances: count(ev(), is_clearance),

        dribbles: count(ev(), is_dribble),
        successful_dribbles: count(ev(), |e| is_dribble(e) && e.is_successful()),
        crosses: count(ev(), is_cross),

        fouls: count(ev(), is_foul),
        fouls_suffered: count(events, |e| {
            is_foul(e) && e.victim_player_id().as_ref() == Some(player_id)
        }),
        yellow_cards: count(ev(), is_yellow_card),
        red_cards: count(ev(), is_red_card),

        duels_won: duel_outcome(EventOutcome::Successful),
        duels_lost: duel_outcome(EventOutcome::Unsuccessful),
        aerial_duels_won: count(ev(), |e| is_aerial_duel(e) && e.is_successful()),

        touches: own.len() as u32,
        touches_in_box: None,
        distance_covered: None,
    }
}

/// Player statistics for every rostered player, home side first.
pub fn compute_all_player_statistics(m: &Match, events: &[LiveEvent]) -> Vec<PlayerStatistics> {
    m.all_players()
        .map(|p| compute_player_statistics(&p.id, &m.id, events))
        .collect()
}
