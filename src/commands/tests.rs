//! Unit tests for command helpers

use super::*;
use crate::{
    cli::{types::PlayerId, EventAddArgs, EventListArgs, EventUpdateArgs},
    model::{EventType, FieldCoordinates, Match},
    EventStore,
};

fn store() -> EventStore {
    EventStore::with_match(Match::demo())
}

fn home(n: u32) -> PlayerId {
    PlayerId::new(format!("home-player-{}", n))
}

#[cfg(test)]
mod session_path_tests {
    use super::*;

    #[test]
    fn test_resolve_session_path() {
        std::env::remove_var(SESSION_ENV_VAR);

        let explicit = PathBuf::from("/tmp/explicit.json");
        assert_eq!(resolve_session_path(Some(explicit.clone())), explicit);
        assert_eq!(resolve_session_path(None), default_session_path());

        std::env::set_var(SESSION_ENV_VAR, "/tmp/from-env.json");
        assert_eq!(
            resolve_session_path(None),
            PathBuf::from("/tmp/from-env.json")
        );
        // Option takes precedence over the environment
        assert_eq!(resolve_session_path(Some(explicit.clone())), explicit);

        std::env::set_var(SESSION_ENV_VAR, "  ");
        assert_eq!(resolve_session_path(None), default_session_path());

        std::env::remove_var(SESSION_ENV_VAR);
    }
}

#[cfg(test)]
mod capture_command_tests {
    use super::*;
    use crate::cli::types::{EventOutcome, TeamSide, VideoTime};
    use crate::commands::events::{build_patch, capture_event, select_events};
    use crate::TaggerError;

    #[test]
    fn test_pass_with_receiver() {
        let mut store = store();
        let mut args = EventAddArgs::new(EventType::Pass, home(7));
        args.at = Some(VideoTime::new(754.0));
        args.origin = Some(FieldCoordinates::new(20.0, 50.0));
        args.destination = Some(FieldCoordinates::new(60.0, 50.0));
        args.receiver = Some(home(9));

        let event = capture_event(&mut store, &args).unwrap();
        assert_eq!(event.team, TeamSide::Home);
        assert_eq!(event.minute, 12);
        assert_eq!(event.distance, Some(42.0));
        assert_eq!(event.receiver_id, Some(home(9)));
        assert_eq!(store.event_count(), 1);
    }

    #[test]
    fn test_team_is_looked_up_from_roster() {
        let mut store = store();
        let mut args = EventAddArgs::new(EventType::Tackle, PlayerId::new("away-player-3"));
        args.position = Some(FieldCoordinates::new(40.0, 40.0));

        let event = capture_event(&mut store, &args).unwrap();
        assert_eq!(event.team, TeamSide::Away);
        assert_eq!(event.timestamp, 0.0);
    }

    #[test]
    fn test_unknown_player_without_team() {
        let mut store = store();
        let mut args = EventAddArgs::new(EventType::Tackle, PlayerId::new("ghost"));
        args.position = Some(FieldCoordinates::new(40.0, 40.0));

        let err = capture_event(&mut store, &args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TaggerError>(),
            Some(TaggerError::PlayerNotFound { .. })
        ));
        assert_eq!(store.event_count(), 0);
    }

    #[test]
    fn test_missing_coordinates_are_reported() {
        let mut store = store();
        let args = EventAddArgs::new(EventType::Tackle, home(4));
        let err = capture_event(&mut store, &args).unwrap_err();
        assert!(err.to_string().contains("--position"));

        let mut args = EventAddArgs::new(EventType::Pass, home(4));
        args.origin = Some(FieldCoordinates::new(20.0, 20.0));
        let err = capture_event(&mut store, &args).unwrap_err();
        assert!(err.to_string().contains("--destination"));
        assert_eq!(store.event_count(), 0);
    }

    #[test]
    fn test_positionless_type_needs_no_coordinates() {
        let mut store = store();
        let event = capture_event(&mut store, &EventAddArgs::new(EventType::Sub, home(11))).unwrap();
        assert_eq!(event.coordinates, FieldCoordinates::new(0.0, 0.0));
    }

    #[test]
    fn test_bad_sub_action_adds_nothing() {
        let mut store = store();
        let mut args = EventAddArgs::new(EventType::Tackle, home(4));
        args.position = Some(FieldCoordinates::new(40.0, 40.0));
        args.sub_action = Some("moonwalk".to_string());

        assert!(capture_event(&mut store, &args).is_err());
        assert_eq!(store.event_count(), 0);
    }

    #[test]
    fn test_no_match() {
        let mut store = EventStore::new();
        let err = capture_event(&mut store, &EventAddArgs::new(EventType::Sub, home(1))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TaggerError>(),
            Some(TaggerError::NoMatchInitialized)
        ));
    }

    #[test]
    fn test_update_patch_and_listing() {
        let mut store = store();
        for (n, ts) in [(4, 300.0), (5, 100.0)] {
            let mut args = EventAddArgs::new(EventType::Tackle, home(n));
            args.at = Some(VideoTime::new(ts));
            args.position = Some(FieldCoordinates::new(30.0, 30.0));
            capture_event(&mut store, &args).unwrap();
        }
        let first = store.events()[0].id.clone();

        let update = EventUpdateArgs {
            id: first.clone(),
            outcome: Some(EventOutcome::Unsuccessful),
            at: Some(VideoTime::new(61.0)),
            position: None,
            origin: None,
            destination: None,
            receiver: None,
            sub_event: None,
        };
        let patch = build_patch(&store, &update).unwrap();
        assert!(store.update_event(&first, patch));
        let updated = store.find_event(&first).unwrap();
        assert_eq!(updated.outcome, EventOutcome::Unsuccessful);
        assert_eq!(updated.minute, 1);

        let sorted = select_events(
            &store,
            &EventListArgs {
                sorted: true,
                ..EventListArgs::default()
            },
        );
        assert_eq!(sorted[0].id, first);

        let late = select_events(
            &store,
            &EventListArgs {
                from: Some(VideoTime::new(90.0)),
                ..EventListArgs::default()
            },
        );
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].player_id, home(5));
    }

    #[test]
    fn test_update_unknown_event() {
        let store = store();
        let update = EventUpdateArgs {
            id: crate::cli::types::EventId::new("missing"),
            outcome: Some(EventOutcome::Neutral),
            at: None,
            position: None,
            origin: None,
            destination: None,
            receiver: None,
            sub_event: None,
        };
        assert!(build_patch(&store, &update).is_err());
    }
}
