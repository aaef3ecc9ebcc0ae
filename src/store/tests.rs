//! Unit tests for the event store

use super::*;
use crate::cli::types::{EventOutcome, MatchId};
use crate::model::EventType;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn demo_store() -> EventStore {
    EventStore::with_match(Match::demo())
}

fn new_event(store: &EventStore, event_type: EventType, player: &str, ts: f64) -> NewEvent {
    let match_id = store
        .current_match()
        .map(|m| m.id.clone())
        .unwrap_or_else(|| MatchId::new("none"));
    let team = if player.starts_with("away") {
        TeamSide::Away
    } else {
        TeamSide::Home
    };
    NewEvent::new(
        match_id,
        event_type,
        team,
        PlayerId::new(player),
        ts,
        FieldCoordinates::new(50.0, 50.0),
    )
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_recording_requires_match() {
        let mut store = EventStore::new();
        assert!(matches!(
            store.start_recording(),
            Err(TaggerError::NoMatchInitialized)
        ));
        assert!(!store.is_recording());

        store.stop_recording();
        assert!(!store.is_recording());

        store.initialize_match(Match::demo());
        store.start_recording().unwrap();
        assert!(store.is_recording());
        store.stop_recording();
        assert!(!store.is_recording());
    }

    #[test]
    fn test_initialize_match_clears_log_and_recording() {
        let mut store = demo_store();
        store.start_recording().unwrap();
        let e = new_event(&store, EventType::Pass, "home-player-7", 10.0);
        store.add_event(e);
        assert_eq!(store.event_count(), 1);

        store.initialize_match(Match::demo());
        assert_eq!(store.event_count(), 0);
        assert!(!store.is_recording());
    }

    #[test]
    fn test_add_event_assigns_id_and_timestamps() {
        let mut store = demo_store();
        let a = store.add_event(new_event(&store, EventType::Pass, "home-player-7", 10.0));
        let b = store.add_event(new_event(&store, EventType::Pass, "home-player-7", 10.0));

        assert_ne!(a.id, b.id);
        assert!(a.id.as_str().starts_with("evt_"));
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.events()[0].id, a.id);
        assert_eq!(store.events()[1].id, b.id);
    }

    #[test]
    fn test_update_event_merges_and_rederives() {
        let mut store = demo_store();
        let e = new_event(&store, EventType::Pass, "home-player-7", 10.0).with_path(
            FieldCoordinates::new(30.0, 50.0),
            FieldCoordinates::new(70.0, 50.0),
        );
        let added = store.add_event(e);
        assert_eq!(added.distance, Some(42.0));

        let updated = store.update_event(
            &added.id,
            EventPatch {
                destination_coordinates: Some(Some(FieldCoordinates::new(30.0, 100.0))),
                outcome: Some(EventOutcome::Unsuccessful),
                ..Default::default()
            },
        );
        assert!(updated);

        let stored = store.find_event(&added.id).unwrap();
        assert_eq!(stored.outcome, EventOutcome::Unsuccessful);
        assert_eq!(stored.distance, Some(34.0));
        assert_eq!(stored.direction, Some(90.0));
        assert!(stored.updated_at >= stored.created_at);
        assert_eq!(stored.created_at, added.created_at);
    }

    #[test]
    fn test_update_and_delete_missing_are_silent() {
        let mut store = demo_store();
        store.add_event(new_event(&store, EventType::Foul, "home-player-4", 5.0));
        let before = store.events().to_vec();

        let missing = EventId::new("evt_missing");
        assert!(!store.update_event(
            &missing,
            EventPatch {
                outcome: Some(EventOutcome::Neutral),
                ..Default::default()
            }
        ));
        assert!(!store.delete_event(&missing));
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn test_delete_and_clear() {
        let mut store = demo_store();
        let a = store.add_event(new_event(&store, EventType::Shot, "home-player-11", 5.0));
        store.add_event(new_event(&store, EventType::Shot, "home-player-11", 6.0));

        assert!(store.delete_event(&a.id));
        assert_eq!(store.event_count(), 1);
        assert!(store.find_event(&a.id).is_none());

        store.clear_events();
        assert_eq!(store.event_count(), 0);
        assert!(store.current_match().is_some());
    }

    #[test]
    fn test_update_player_position_clamps() {
        let mut store = demo_store();
        let id = PlayerId::new("away-player-5");
        assert!(store.update_player_position(&id, FieldCoordinates::new(120.0, -4.0)));

        let player = store.current_match().unwrap().find_player(&id).unwrap();
        assert_eq!(player.field_position, FieldCoordinates::new(100.0, 0.0));

        assert!(!store.update_player_position(
            &PlayerId::new("nobody"),
            FieldCoordinates::new(1.0, 1.0)
        ));
    }

    #[test]
    fn test_update_match_requires_match() {
        let mut store = EventStore::new();
        let err = store.update_match(MatchPatch::default()).unwrap_err();
        assert!(matches!(err, TaggerError::NoMatchInitialized));

        let mut store = demo_store();
        store
            .update_match(MatchPatch {
                competition: Some("Cup".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.current_match().unwrap().competition, "Cup");
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn test_subscribers_see_changes_after_apply() {
        let mut store = demo_store();
        let seen: Rc<RefCell<Vec<StoreChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = store.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        store.start_recording().unwrap();
        let added = store.add_event(new_event(&store, EventType::Pass, "home-player-2", 1.0));
        store.delete_event(&added.id);
        store.delete_event(&added.id);

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreChange::RecordingChanged(true),
                StoreChange::EventAdded(added.id.clone()),
                StoreChange::EventDeleted(added.id.clone()),
            ]
        );

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.clear_events();
        assert_eq!(seen.borrow().len(), 3);
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;
    use crate::store::queries::EventFilter;

    fn populated() -> EventStore {
        let mut store = demo_store();
        for (t, player, ts) in [
            (EventType::Pass, "home-player-7", 30.0),
            (EventType::Shot, "home-player-11", 10.0),
            (EventType::Pass, "away-player-6", 20.0),
            (EventType::Foul, "away-player-3", 10.0),
            (EventType::Pass, "home-player-7", 40.0),
        ] {
            store.add_event(new_event(&store, t, player, ts));
        }
        store
    }

    fn timestamps(events: &[LiveEvent]) -> Vec<f64> {
        events.iter().map(|e| e.timestamp).collect()
    }

    #[test]
    fn test_filters_preserve_insertion_order() {
        let store = populated();
        assert_eq!(
            timestamps(&store.events_by_type(&EventType::Pass)),
            vec![30.0, 20.0, 40.0]
        );
        assert_eq!(
            timestamps(&store.events_by_player(&PlayerId::new("home-player-7"))),
            vec![30.0, 40.0]
        );
        assert_eq!(
            timestamps(&store.events_by_team(TeamSide::Away)),
            vec![20.0, 10.0]
        );
    }

    #[test]
    fn test_time_range_is_inclusive() {
        let store = populated();
        assert_eq!(
            timestamps(&store.events_by_time_range(10.0, 30.0)),
            vec![30.0, 10.0, 20.0, 10.0]
        );
        assert!(store.events_by_time_range(41.0, 50.0).is_empty());
    }

    #[test]
    fn test_sorted_is_stable() {
        let store = populated();
        let sorted = store.sorted_events();
        assert_eq!(timestamps(&sorted), vec![10.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(sorted[0].event_type, EventType::Shot);
        assert_eq!(sorted[1].event_type, EventType::Foul);
        // log itself is untouched
        assert_eq!(store.events()[0].timestamp, 30.0);
    }

    #[test]
    fn test_combined_filter() {
        let store = populated();
        let filter = EventFilter {
            event_type: Some(EventType::Pass),
            team: Some(TeamSide::Home),
            from: Some(35.0),
            ..Default::default()
        };
        assert_eq!(timestamps(&filter.apply(store.events())), vec![40.0]);
    }
}

#[cfg(test)]
mod transfer_tests {
    use super::*;

    #[test]
    fn test_export_import_round_trip() {
        let mut store = demo_store();
        store.add_event(
            new_event(&store, EventType::Pass, "home-player-7", 12.0)
                .with_path(FieldCoordinates::new(30.0, 50.0), FieldCoordinates::new(70.0, 50.0))
                .with_meta("passType", "long"),
        );
        store.add_event(new_event(&store, EventType::Foul, "away-player-3", 99.5));

        let exported = store.export_events().unwrap();
        let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert!(value.get("exportedAt").is_some());
        assert_eq!(value["events"].as_array().unwrap().len(), 2);

        let mut other = EventStore::new();
        other.import_events(&exported).unwrap();
        assert_eq!(other.current_match(), store.current_match());
        assert_eq!(other.events(), store.events());
    }

    #[test]
    fn test_import_rejects_malformed_and_keeps_state() {
        let mut store = demo_store();
        store.add_event(new_event(&store, EventType::Shot, "home-player-9", 3.0));
        let before = store.snapshot();

        let bad_inputs = [
            "not json",
            "[1, 2, 3]",
            "{}",
            r#"{"events": [], "extra": true}"#,
            r#"{"events": [{"id": 5}]}"#,
            r#"{"events": [], "exportedAt": "yesterday"}"#,
            r#"{"match": "demo"}"#,
        ];
        for input in bad_inputs {
            let err = store.import_events(input).unwrap_err();
            assert!(
                matches!(err, TaggerError::InvalidPayload { .. }),
                "expected InvalidPayload for {}",
                input
            );
            assert_eq!(store.snapshot(), before);
        }
    }

    #[test]
    fn test_import_events_only_keeps_match() {
        let mut store = demo_store();
        let match_before = store.current_match().cloned();
        store.add_event(new_event(&store, EventType::Shot, "home-player-9", 3.0));

        store
            .import_events(&json!({"events": [], "exportedAt": "2024-05-01T12:00:00Z"}).to_string())
            .unwrap();
        assert_eq!(store.event_count(), 0);
        assert_eq!(store.current_match().cloned(), match_before);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut store = demo_store();
        store.start_recording().unwrap();
        store.add_event(new_event(&store, EventType::Corner, "home-player-9", 3.0));
        let snapshot = store.snapshot();

        let text = serde_json::to_string(&snapshot).unwrap();
        let parsed: SessionSnapshot = serde_json::from_str(&text).unwrap();

        let mut restored = EventStore::new();
        restored.restore(parsed);
        assert!(restored.is_recording());
        assert_eq!(restored.events(), store.events());
        assert_eq!(restored.current_match(), store.current_match());
    }

    #[test]
    fn test_empty_snapshot_parses() {
        let parsed: SessionSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SessionSnapshot::default());
    }
}
