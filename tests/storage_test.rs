//! Integration tests for the storage layer

use nhu_cli::{
    cli::types::{Division, EventStatus, MatchStatus, Position},
    storage::*,
    NhuError,
};
use chrono::{Duration, Utc};

fn create_test_db() -> FederationDatabase {
    FederationDatabase::new_in_memory().unwrap()
}

fn register_team(db: &mut FederationDatabase, name: &str, division: Division) -> nhu_cli::TeamId {
    db.save_team(&NewTeam {
        name: name.to_string(),
        division,
        coach: "Test Coach".to_string(),
        manager: None,
        contact_email: "team@nhu.org.na".to_string(),
        contact_phone: "+264 61 000 000".to_string(),
        logo_url: None,
    })
    .unwrap()
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_full_roster_flow() {
    let mut db = create_test_db();
    let team_id = register_team(&mut db, "Windhoek Warriors", Division::MensPremier);

    let player_id = db
        .save_player(&NewPlayer {
            team_id,
            first_name: "Tangeni".to_string(),
            last_name: "Amupolo".to_string(),
            date_of_birth: None,
            jersey_number: 1,
            position: Position::Goalkeeper,
            nationality: Some("Namibian".to_string()),
            height_cm: Some(183.0),
            weight_kg: Some(79.5),
            email: None,
            phone: None,
            photo_url: None,
        })
        .unwrap();

    let player = db.get_player_by_id(player_id).unwrap().unwrap();
    assert_eq!(player.full_name(), "Tangeni Amupolo");
    assert_eq!(player.position, Position::Goalkeeper);
    assert_eq!(player.height_cm, Some(183.0));

    assert_eq!(db.count_players(team_id).unwrap(), 1);

    db.delete_player(player_id).unwrap();
    assert_eq!(db.count_players(team_id).unwrap(), 0);
}

#[test]
fn test_event_registration_flow_until_full() {
    let mut db = create_test_db();
    let now = Utc::now();

    let event_id = db
        .save_event(&NewEvent {
            title: "Championship".to_string(),
            description: "Knockout tournament".to_string(),
            location: "Windhoek Stadium".to_string(),
            start_time: (now + Duration::days(14)).timestamp(),
            end_time: (now + Duration::days(16)).timestamp(),
            max_teams: 2,
            image_url: None,
        })
        .unwrap();

    let first = register_team(&mut db, "Windhoek Warriors", Division::MensPremier);
    let second = register_team(&mut db, "Namibia Nationals", Division::MensPremier);
    let third = register_team(&mut db, "Capital City HC", Division::MensPremier);

    db.register_team_for_event(event_id, first).unwrap();
    db.register_team_for_event(event_id, second).unwrap();

    // Capacity reached: the registration action disappears
    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert!(event.is_full());
    assert!(!event.accepts_registrations());

    match db.register_team_for_event(event_id, third) {
        Err(NhuError::EventFull { max_teams: 2 }) => (),
        other => panic!("Expected EventFull, got {:?}", other),
    }

    // The failed attempt left no trace
    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert_eq!(event.registered_teams, 2);
    assert_eq!(db.get_registered_teams_for_event(event_id).unwrap().len(), 2);
    assert!(db.get_events_for_team(third).unwrap().is_empty());
}

#[test]
fn test_deleted_team_disappears_from_queries() {
    let mut db = create_test_db();
    let now = Utc::now();

    let team_id = register_team(&mut db, "Windhoek Warriors", Division::MensPremier);
    let event_id = db
        .save_event(&NewEvent {
            title: "Championship".to_string(),
            description: "Knockout tournament".to_string(),
            location: "Windhoek Stadium".to_string(),
            start_time: (now + Duration::days(14)).timestamp(),
            end_time: (now + Duration::days(16)).timestamp(),
            max_teams: 12,
            image_url: None,
        })
        .unwrap();
    db.register_team_for_event(event_id, team_id).unwrap();

    db.delete_team(team_id).unwrap();

    assert!(db.get_teams().unwrap().is_empty());
    assert!(db.get_team_overviews().unwrap().is_empty());
    assert!(db.get_registered_teams_for_event(event_id).unwrap().is_empty());
    assert_eq!(
        db.get_event_by_id(event_id).unwrap().unwrap().registered_teams,
        0
    );
}

#[test]
fn test_standings_accumulate_over_results() {
    let mut db = create_test_db();
    let warriors = register_team(&mut db, "Windhoek Warriors", Division::MensPremier);
    let nationals = register_team(&mut db, "Namibia Nationals", Division::MensPremier);

    for (home_score, away_score) in [(3, 1), (0, 2), (1, 1)] {
        let match_id = db
            .save_match(&NewMatch {
                home_team_id: warriors,
                away_team_id: nationals,
                scheduled_at: Utc::now().timestamp(),
                location: "Windhoek Stadium".to_string(),
            })
            .unwrap();
        db.record_match_result(match_id, home_score, away_score, None)
            .unwrap();
    }

    // One win each, the draw counted for neither
    let warriors = db.get_team_by_id(warriors).unwrap().unwrap();
    assert_eq!((warriors.wins, warriors.losses), (1, 1));
    let nationals = db.get_team_by_id(nationals).unwrap().unwrap();
    assert_eq!((nationals.wins, nationals.losses), (1, 1));

    let completed = db.get_matches(Some(MatchStatus::Completed)).unwrap();
    assert_eq!(completed.len(), 3);
}

#[test]
fn test_cancelled_event_moves_to_past() {
    let mut db = create_test_db();
    let now = Utc::now();
    let event_id = db
        .save_event(&NewEvent {
            title: "Rained Out Cup".to_string(),
            description: "Friendly round".to_string(),
            location: "Central Field".to_string(),
            start_time: (now + Duration::days(2)).timestamp(),
            end_time: (now + Duration::days(2) + Duration::hours(3)).timestamp(),
            max_teams: 8,
            image_url: None,
        })
        .unwrap();

    db.update_event_status(event_id, EventStatus::Cancelled)
        .unwrap();

    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert_eq!(event.status, EventStatus::Cancelled);
    assert!(event.status.is_past());
    assert!(!event.accepts_registrations());
}

#[test]
fn test_seeded_database_supports_screens() {
    let mut db = create_test_db();
    db.seed_sample_data().unwrap();

    // Team list has content across categories
    let overviews = db.get_team_overviews().unwrap();
    assert!(overviews.iter().any(|o| o.player_count > 0));

    // Matches tab has live content with a period label
    let live = db.get_matches(Some(MatchStatus::Live)).unwrap();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].period.as_deref(), Some("2nd Quarter"));
    assert_eq!(live[0].home.score, Some(2));

    // Home feed finds upcoming events in start order
    let upcoming = db.upcoming_events(5).unwrap();
    assert!(!upcoming.is_empty());
    for pair in upcoming.windows(2) {
        assert!(pair[0].start_time <= pair[1].start_time);
    }
}
