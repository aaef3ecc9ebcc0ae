//! Tests for CLI argument parsing

use super::*;

fn parse(args: &[&str]) -> std::result::Result<MatchTagger, clap::Error> {
    MatchTagger::try_parse_from(std::iter::once("match-tagger").chain(args.iter().copied()))
}

#[test]
fn test_match_init_options() {
    let app = parse(&["match", "init", "--from", "m.json", "--formation-home", "4-4-2"]).unwrap();
    match app.command {
        Commands::Match {
            cmd:
                MatchCmd::Init {
                    from,
                    formation_home,
                    formation_away,
                },
        } => {
            assert_eq!(from, Some(PathBuf::from("m.json")));
            assert_eq!(formation_home.as_deref(), Some("4-4-2"));
            assert_eq!(formation_away, None);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_match_init_has_no_demo_flag() {
    assert!(parse(&["match", "init"]).is_ok());
    assert!(parse(&["match", "init", "--demo"]).is_err());
}

#[test]
fn test_player_move_accepts_negative_coordinates() {
    let app = parse(&["player", "move", "home-player-1", "-5,120"]).unwrap();
    match app.command {
        Commands::Player {
            cmd: PlayerCmd::Move { player, position },
        } => {
            assert_eq!(player, PlayerId::new("home-player-1"));
            assert_eq!(position, FieldCoordinates::new(-5.0, 120.0));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_global_session_flag() {
    let app = parse(&["event", "list", "--session", "s.json", "-v"]).unwrap();
    assert_eq!(app.session, Some(PathBuf::from("s.json")));
    assert!(app.verbose);
}

#[test]
fn test_stats_player_conflicts_with_all_players() {
    assert!(parse(&["stats", "--player", "home-player-9"]).is_ok());
    assert!(parse(&["stats", "--player", "home-player-9", "--all-players"]).is_err());
}
