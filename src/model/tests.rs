//! Unit tests for the domain model

use super::*;
use crate::cli::types::{EventId, MatchId, MatchStatus, PlayerId, PlayerPosition, TeamSide};
use chrono::Utc;
use serde_json::json;

#[cfg(test)]
mod coordinate_tests {
    use super::*;

    #[test]
    fn test_bounds_and_clamping() {
        assert!(FieldCoordinates::new(0.0, 100.0).is_within_bounds());
        assert!(!FieldCoordinates::new(-0.1, 50.0).is_within_bounds());
        assert!(!FieldCoordinates::new(50.0, 100.5).is_within_bounds());

        let clamped = FieldCoordinates::new(-5.0, 140.0).clamped();
        assert_eq!(clamped, FieldCoordinates::new(0.0, 100.0));

        let nan = FieldCoordinates::new(f64::NAN, 20.0).clamped();
        assert_eq!(nan, FieldCoordinates::new(0.0, 20.0));
    }

    #[test]
    fn test_mirror() {
        let c = FieldCoordinates::new(25.0, 30.0).mirrored();
        assert_eq!(c, FieldCoordinates::new(75.0, 30.0));
    }

    #[test]
    fn test_parse_coordinates() {
        let c: FieldCoordinates = " 30, 50.5 ".parse().unwrap();
        assert_eq!(c, FieldCoordinates::new(30.0, 50.5));
        assert!("30".parse::<FieldCoordinates>().is_err());
        assert!("a,b".parse::<FieldCoordinates>().is_err());
        assert!("inf,2".parse::<FieldCoordinates>().is_err());
    }
}

#[cfg(test)]
mod taxonomy_tests {
    use super::*;
    use crate::model::taxonomy::{check_sub_action, check_sub_event};

    #[test]
    fn test_known_types_have_info_rows() {
        for event_type in EventType::KNOWN.iter() {
            assert!(
                event_type.info().is_some(),
                "missing taxonomy row for {}",
                event_type
            );
        }
        assert_eq!(EVENT_TYPES.len(), EventType::KNOWN.len());
    }

    #[test]
    fn test_parse_known_and_custom() {
        assert_eq!("pass".parse::<EventType>().unwrap(), EventType::Pass);
        assert_eq!(
            "Shot Under Pressure".parse::<EventType>().unwrap(),
            EventType::ShotUnderPressure
        );
        assert_eq!(
            "set_piece_routine".parse::<EventType>().unwrap(),
            EventType::Custom("set_piece_routine".to_string())
        );
        assert!("".parse::<EventType>().is_err());
        assert!("pass!".parse::<EventType>().is_err());
    }

    #[test]
    fn test_position_requirements() {
        assert!(EventType::Pass.requires_dual_position());
        assert!(EventType::Shot.requires_dual_position());
        assert!(EventType::Goal.requires_dual_position());
        assert!(!EventType::Tackle.requires_dual_position());

        assert!(!EventType::Sub.requires_field_position());
        assert!(!EventType::Substitution.requires_field_position());
        assert!(!EventType::GameEvent.requires_field_position());
        assert!(EventType::Foul.requires_field_position());

        let custom = EventType::Custom("nutmeg".to_string());
        assert!(custom.requires_field_position());
        assert!(!custom.requires_dual_position());
        assert!(custom.sub_actions().is_empty());
    }

    #[test]
    fn test_shot_class() {
        assert!(EventType::Shot.is_shot());
        assert!(EventType::Goal.is_shot());
        assert!(EventType::ShotUnderPressure.is_shot());
        assert!(!EventType::ShotDirection.is_shot());
        assert!(!EventType::Penalty.is_shot());
    }

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&EventType::DefensiveAction).unwrap();
        assert_eq!(json, "\"defensive_action\"");

        let custom: EventType = serde_json::from_str("\"rabona\"").unwrap();
        assert_eq!(custom, EventType::Custom("rabona".to_string()));

        assert!(serde_json::from_str::<EventType>("\"Not Valid!\"").is_err());
    }

    #[test]
    fn test_qualifier_vocabularies() {
        assert!(check_sub_action(&EventType::Pass, "through_ball").is_ok());
        assert!(check_sub_event(&EventType::Shot, "on_target").is_ok());

        let err = check_sub_action(&EventType::Pass, "bicycle").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown sub-action 'bicycle' for event type pass"
        );
        assert!(check_sub_event(&EventType::Tackle, "won").is_err());
    }
}

#[cfg(test)]
mod match_tests {
    use super::*;

    #[test]
    fn test_demo_match_rosters() {
        let m = Match::demo();
        assert_eq!(m.home_team.players.len(), 11);
        assert_eq!(m.away_team.players.len(), 11);
        assert_eq!(m.duration, 5400.0);
        assert_eq!(m.status, MatchStatus::FirstHalf);
        assert!(m.id.as_str().starts_with("match-"));

        let gk = m.find_player(&PlayerId::new("home-player-1")).unwrap();
        assert_eq!(gk.position, PlayerPosition::GK);
        assert_eq!(gk.field_position, FieldCoordinates::new(10.0, 50.0));

        let away_st = m.find_player(&PlayerId::new("away-player-11")).unwrap();
        assert_eq!(away_st.team, TeamSide::Away);
        assert_eq!(away_st.field_position, FieldCoordinates::new(20.0, 50.0));
    }

    #[test]
    fn test_side_of_player() {
        let m = Match::demo();
        assert_eq!(
            m.side_of(&PlayerId::new("away-player-3")),
            Some(TeamSide::Away)
        );
        assert_eq!(m.side_of(&PlayerId::new("ghost")), None);
        assert_eq!(m.all_players().count(), 22);
    }

    #[test]
    fn test_match_patch_shallow_merge() {
        let mut m = Match::demo();
        m.video_url = Some("file:///match.mp4".to_string());
        let original_home = m.home_team.clone();

        m.apply_patch(MatchPatch {
            venue: Some("Anfield".to_string()),
            status: Some(MatchStatus::HalfTime),
            video_url: Some(None),
            ..Default::default()
        });

        assert_eq!(m.venue, "Anfield");
        assert_eq!(m.status, MatchStatus::HalfTime);
        assert_eq!(m.video_url, None);
        assert_eq!(m.home_team, original_home);
        assert_eq!(m.competition, "Demo League");
    }

    #[test]
    fn test_match_serializes_camel_case() {
        let m = Match::demo();
        let value = serde_json::to_value(&m).unwrap();
        assert!(value.get("homeTeam").is_some());
        assert!(value.get("currentTimestamp").is_some());
        assert!(value.get("videoUrl").is_none());
        assert_eq!(
            value["homeTeam"]["players"][0]["jerseyNumber"],
            json!(1)
        );
        assert_eq!(
            value["homeTeam"]["players"][0]["fieldPosition"],
            json!({"x": 10.0, "y": 50.0})
        );

        let back: Match = serde_json::from_value(value).unwrap();
        assert_eq!(back, m);
    }
}

#[cfg(test)]
mod formation_tests {
    use super::*;

    #[test]
    fn test_apply_formation_home() {
        let mut m = Match::demo();
        let moved = apply_formation(&mut m.home_team, TeamSide::Home, "4-4-2").unwrap();

        // GK + 4 defenders + 4 of 5 midfield roles + ST
        assert_eq!(moved, 10);
        assert_eq!(m.home_team.formation, "4-4-2");

        let players = &m.home_team.players;
        assert_eq!(players[0].field_position, FieldCoordinates::new(10.0, 50.0));
        assert_eq!(players[1].field_position, FieldCoordinates::new(25.0, 15.0));
        assert_eq!(players[5].field_position, FieldCoordinates::new(50.0, 15.0));
        assert_eq!(players[10].field_position, FieldCoordinates::new(75.0, 40.0));
        // fifth midfield-line player has no slot and stays put
        assert_eq!(players[9].field_position, FieldCoordinates::new(70.0, 80.0));
    }

    #[test]
    fn test_apply_formation_away_is_mirrored() {
        let mut m = Match::demo();
        apply_formation(&mut m.away_team, TeamSide::Away, "5-3-2").unwrap();

        let players = &m.away_team.players;
        assert_eq!(players[0].field_position, FieldCoordinates::new(90.0, 50.0));
        assert_eq!(players[1].field_position, FieldCoordinates::new(75.0, 10.0));
    }

    #[test]
    fn test_unknown_formation() {
        let mut m = Match::demo();
        let err = apply_formation(&mut m.home_team, TeamSide::Home, "2-3-5").unwrap_err();
        assert!(matches!(err, crate::error::TaggerError::UnknownFormation { .. }));
        assert_eq!(m.home_team.formation, "4-3-3");
    }

    #[test]
    fn test_formation_names() {
        assert_eq!(
            formation_names(),
            vec!["4-4-2", "4-3-3", "3-5-2", "4-2-3-1", "5-3-2"]
        );
    }
}

#[cfg(test)]
mod event_tests {
    use super::*;

    fn sample_event() -> LiveEvent {
        NewEvent::new(
            MatchId::new("m1"),
            EventType::Pass,
            TeamSide::Home,
            PlayerId::new("home-player-7"),
            125.0,
            FieldCoordinates::new(30.0, 50.0),
        )
        .with_path(
            FieldCoordinates::new(30.0, 50.0),
            FieldCoordinates::new(70.0, 50.0),
        )
        .into_event(EventId::new("evt_1"), Utc::now())
    }

    #[test]
    fn test_new_event_derives_geometry_and_minute() {
        let event = sample_event();
        assert_eq!(event.minute, 2);
        assert_eq!(event.distance, Some(42.0));
        assert_eq!(event.direction, Some(0.0));
        assert_eq!(event.created_at, event.updated_at);
    }

    #[test]
    fn test_patch_clears_and_rederives() {
        let mut event = sample_event();
        event.apply_patch(EventPatch {
            destination_coordinates: Some(None),
            timestamp: Some(3600.0),
            ..Default::default()
        });
        event.derive_geometry();

        assert_eq!(event.destination_coordinates, None);
        assert_eq!(event.distance, None);
        assert_eq!(event.direction, None);
        assert_eq!(event.minute, 60);
    }

    #[test]
    fn test_metadata_accessors() {
        let mut event = sample_event();
        assert!(!event.on_target());
        assert_eq!(event.xg(), 0.0);

        let mut meta = Metadata::new();
        meta.insert("shotOnTarget".to_string(), json!(true));
        meta.insert("xG".to_string(), json!(0.35));
        meta.insert("assistPlayerId".to_string(), json!("home-player-10"));
        event.apply_patch(EventPatch {
            metadata: Some(meta),
            ..Default::default()
        });

        assert!(event.on_target());
        assert_eq!(event.xg(), 0.35);
        assert_eq!(
            event.assist_player_id(),
            Some(PlayerId::new("home-player-10"))
        );
        assert_eq!(event.victim_player_id(), None);
    }

    #[test]
    fn test_sub_event_goal_counts_as_on_target() {
        let mut event = sample_event();
        event.event_type = EventType::Shot;
        event.sub_event = Some("goal".to_string());
        assert!(event.on_target());
        assert!(event.is_goal());
        assert!(!event.is_blocked());
    }

    #[test]
    fn test_event_json_shape() {
        let event = sample_event();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["eventType"], json!("pass"));
        assert_eq!(value["playerId"], json!("home-player-7"));
        assert_eq!(value["originCoordinates"], json!({"x": 30.0, "y": 50.0}));
        assert!(value.get("receiverId").is_none());

        let back: LiveEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }
}
