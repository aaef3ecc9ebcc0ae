//! Event commands: add through the capture wizard, update, delete, list, clear.

use std::path::PathBuf;

use anyhow::{bail, Result};
use log::{info, warn};

use crate::{
    capture::{CaptureStep, CaptureWizard, ManualClock, StepPolicy},
    cli::{types::EventId, EventAddArgs, EventListArgs, EventUpdateArgs},
    model::{taxonomy::check_sub_event, EventPatch, EventType, LiveEvent},
    store::EventFilter,
    EventStore, TaggerError,
};

use super::common::{format_event_line, SessionContext};

fn missing_input(step: CaptureStep, event_type: &EventType) -> String {
    let flag = match step {
        CaptureStep::Position => "--position",
        CaptureStep::Origin => "--origin",
        CaptureStep::Destination => "--destination",
        _ => "more input",
    };
    format!("{} events need {}", event_type, flag)
}

/// Run one capture through the wizard and add the result to `store`.
///
/// The acting side defaults to the roster the player is on. The video time
/// defaults to the match clock.
pub fn capture_event(store: &mut EventStore, args: &EventAddArgs) -> Result<LiveEvent> {
    let m = store.current_match().ok_or(TaggerError::NoMatchInitialized)?;
    let team = match args.team.or_else(|| m.side_of(&args.player)) {
        Some(team) => team,
        None => {
            return Err(TaggerError::PlayerNotFound {
                id: args.player.to_string(),
            }
            .into())
        }
    };
    let timestamp = args.at.map_or(m.current_timestamp, |t| t.as_secs());

    let policy = if args.legacy_steps {
        StepPolicy::Legacy
    } else {
        StepPolicy::DataDriven
    };
    let mut wizard = CaptureWizard::with_policy(policy);

    loop {
        let step = wizard.current_step_kind();
        match step {
            CaptureStep::SelectType => wizard.select_type(args.event_type.clone()),
            CaptureStep::SelectPlayer => wizard.select_player(args.player.clone(), team),
            CaptureStep::Position => {
                if let Some(p) = args.position {
                    wizard.set_coordinates(p);
                }
            }
            CaptureStep::Origin => {
                if let Some(p) = args.origin {
                    wizard.set_coordinates(p);
                }
            }
            CaptureStep::Receiver => {
                if let Some(receiver) = &args.receiver {
                    wizard.select_receiver(receiver.clone());
                }
            }
            CaptureStep::Destination => {
                if let Some(p) = args.destination {
                    wizard.set_coordinates(p);
                }
            }
            CaptureStep::Details => break,
        }
        if !wizard.next() {
            bail!(missing_input(step, &args.event_type));
        }
    }

    let steps = wizard.steps();
    if args.position.is_some() && !steps.contains(&CaptureStep::Position) {
        warn!("--position ignored for {} events", args.event_type);
    }
    if args.receiver.is_some() && !steps.contains(&CaptureStep::Receiver) {
        warn!("--receiver ignored for {} events", args.event_type);
    }

    if let Some(outcome) = args.outcome {
        wizard.set_outcome(outcome);
    }
    if let Some(period) = args.period {
        wizard.set_period(period);
    }
    if let Some(code) = &args.sub_action {
        wizard.set_sub_action(code)?;
    }
    if let Some(code) = &args.sub_event {
        wizard.set_sub_event(code)?;
    }
    if args.on_target {
        wizard.set_on_target(true);
    }
    if args.blocked {
        wizard.set_blocked(true);
    }
    if let Some(xg) = args.xg {
        wizard.set_xg(xg);
    }
    if let Some(assist) = &args.assist {
        wizard.set_assist(assist.clone());
    }
    if let Some(victim) = &args.victim {
        wizard.set_victim(victim.clone());
    }

    match wizard.save(store, &ManualClock::new(timestamp)) {
        Some(event) => Ok(event),
        None => bail!("Capture incomplete for {} event", args.event_type),
    }
}

pub fn handle_event_add(session: Option<PathBuf>, args: EventAddArgs) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    if !ctx.store.is_recording() {
        info!("Tagging while recording is off");
    }
    let event = capture_event(&mut ctx.store, &args)?;
    ctx.save()?;
    println!("✓ Added {}", format_event_line(&event));
    Ok(())
}

/// Build the store patch for `event update`.
pub fn build_patch(store: &EventStore, args: &EventUpdateArgs) -> Result<EventPatch> {
    let Some(event) = store.find_event(&args.id) else {
        bail!("No event with id {}", args.id);
    };
    if let Some(code) = &args.sub_event {
        check_sub_event(&event.event_type, code)?;
    }

    Ok(EventPatch {
        timestamp: args.at.map(|t| t.as_secs()),
        coordinates: args.position.map(|p| p.clamped()),
        origin_coordinates: args.origin.map(|p| Some(p.clamped())),
        destination_coordinates: args.destination.map(|p| Some(p.clamped())),
        receiver_id: args.receiver.clone().map(Some),
        sub_event: args.sub_event.clone().map(Some),
        outcome: args.outcome,
        ..EventPatch::default()
    })
}

pub fn handle_event_update(session: Option<PathBuf>, args: EventUpdateArgs) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    let patch = build_patch(&ctx.store, &args)?;
    if patch.is_empty() {
        println!("Nothing to update");
        return Ok(());
    }

    ctx.store.update_event(&args.id, patch);
    ctx.save()?;
    if let Some(event) = ctx.store.find_event(&args.id) {
        println!("✓ Updated {}", format_event_line(event));
    }
    Ok(())
}

pub fn handle_event_delete(session: Option<PathBuf>, id: &EventId) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    if !ctx.store.delete_event(id) {
        bail!("No event with id {}", id);
    }
    ctx.save()?;
    println!("✓ Deleted event {}", id);
    Ok(())
}

/// Events matching the list filters, in insertion or timestamp order.
pub fn select_events(store: &EventStore, args: &EventListArgs) -> Vec<LiveEvent> {
    let filter = EventFilter {
        event_type: args.event_type.clone(),
        player_id: args.player.clone(),
        team: args.team,
        from: args.from.map(|t| t.as_secs()),
        to: args.to.map(|t| t.as_secs()),
    };
    if args.sorted {
        filter.apply(&store.sorted_events())
    } else {
        filter.apply(store.events())
    }
}

pub fn handle_event_list(session: Option<PathBuf>, args: EventListArgs) -> Result<()> {
    let ctx = SessionContext::open(session)?;
    let events = select_events(&ctx.store, &args);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("No events");
        return Ok(());
    }
    for event in &events {
        println!("{}", format_event_line(event));
    }
    println!("{} of {} events", events.len(), ctx.store.event_count());
    Ok(())
}

pub fn handle_event_clear(session: Option<PathBuf>) -> Result<()> {
    let mut ctx = SessionContext::open(session)?;
    let removed = ctx.store.event_count();
    ctx.store.clear_events();
    ctx.save()?;
    println!("✓ Cleared {} events", removed);
    Ok(())
}
