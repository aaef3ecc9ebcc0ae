//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use env_logger::Env;
use match_tagger::{
    cli::{Commands, EventCmd, MatchCmd, MatchTagger, PlayerCmd, RecordCmd},
    commands::{
        events::{
            handle_event_add, handle_event_clear, handle_event_delete, handle_event_list,
            handle_event_update,
        },
        match_setup::{
            handle_match_formation, handle_match_init, handle_match_rename, handle_match_show,
            handle_match_status, handle_player_move, MatchInitParams, MatchRenameParams,
        },
        recording::{handle_record_start, handle_record_stop},
        statistics::{handle_stats, StatsParams},
        transfer::{handle_export, handle_import},
        types::handle_types,
        validate::handle_validate,
    },
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = MatchTagger::parse();

    let log_level = if app.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let session = app.session;

    match app.command {
        Commands::Match { cmd } => match cmd {
            MatchCmd::Init {
                from,
                formation_home,
                formation_away,
            } => handle_match_init(
                session,
                MatchInitParams {
                    from,
                    formation_home,
                    formation_away,
                },
            )?,
            MatchCmd::Show { json } => handle_match_show(session, json)?,
            MatchCmd::Rename {
                home,
                away,
                venue,
                competition,
            } => handle_match_rename(
                session,
                MatchRenameParams {
                    home,
                    away,
                    venue,
                    competition,
                },
            )?,
            MatchCmd::Formation { team, formation } => {
                handle_match_formation(session, team, &formation)?
            }
            MatchCmd::Status { status } => handle_match_status(session, status)?,
        },

        Commands::Record { cmd } => match cmd {
            RecordCmd::Start => handle_record_start(session)?,
            RecordCmd::Stop => handle_record_stop(session)?,
        },

        Commands::Player { cmd } => match cmd {
            PlayerCmd::Move { player, position } => handle_player_move(session, &player, position)?,
        },

        Commands::Event { cmd } => match cmd {
            EventCmd::Add(args) => handle_event_add(session, args)?,
            EventCmd::Update(args) => handle_event_update(session, args)?,
            EventCmd::Delete { id } => handle_event_delete(session, &id)?,
            EventCmd::List(args) => handle_event_list(session, args)?,
            EventCmd::Clear => handle_event_clear(session)?,
        },

        Commands::Stats {
            player,
            all_players,
            heat_map,
            json,
        } => handle_stats(
            session,
            StatsParams {
                player,
                all_players,
                heat_map,
                as_json: json,
            },
        )?,

        Commands::Validate { json } => handle_validate(session, json)?,
        Commands::Export { file } => handle_export(session, &file)?,
        Commands::Import { file } => handle_import(session, &file)?,
        Commands::Types => handle_types(),
    }

    Ok(())
}
