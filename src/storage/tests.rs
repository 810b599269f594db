//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{Division, EventId, EventStatus, MatchStatus, Position, TeamId};
use crate::error::NhuError;
use chrono::{Duration, Utc};

fn create_test_db() -> FederationDatabase {
    FederationDatabase::new_in_memory().unwrap()
}

fn sample_team(name: &str, division: Division) -> NewTeam {
    NewTeam {
        name: name.to_string(),
        division,
        coach: "Test Coach".to_string(),
        manager: None,
        contact_email: "team@nhu.org.na".to_string(),
        contact_phone: "+264 61 000 000".to_string(),
        logo_url: None,
    }
}

fn sample_player(team_id: TeamId, last_name: &str, jersey: u8) -> NewPlayer {
    NewPlayer {
        team_id,
        first_name: "Test".to_string(),
        last_name: last_name.to_string(),
        date_of_birth: None,
        jersey_number: jersey,
        position: Position::Midfielder,
        nationality: None,
        height_cm: None,
        weight_kg: None,
        email: None,
        phone: None,
        photo_url: None,
    }
}

fn sample_event(title: &str, max_teams: u32) -> NewEvent {
    let now = Utc::now();
    NewEvent {
        title: title.to_string(),
        description: "Test event".to_string(),
        location: "Windhoek Stadium".to_string(),
        start_time: (now + Duration::days(7)).timestamp(),
        end_time: (now + Duration::days(7) + Duration::hours(3)).timestamp(),
        max_teams,
        image_url: None,
    }
}

#[test]
fn test_save_and_get_team() {
    let mut db = create_test_db();

    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();

    let team = db.get_team_by_id(team_id).unwrap().unwrap();
    assert_eq!(team.name, "Windhoek Warriors");
    assert_eq!(team.division, Division::MensPremier);
    assert_eq!(team.wins, 0);
    assert_eq!(team.losses, 0);
}

#[test]
fn test_get_team_by_id_nonexistent() {
    let db = create_test_db();
    assert!(db.get_team_by_id(TeamId::new(999)).unwrap().is_none());
}

#[test]
fn test_get_teams_ordered_by_name() {
    let mut db = create_test_db();
    db.save_team(&sample_team("Swakopmund Stars", Division::MensPremier))
        .unwrap();
    db.save_team(&sample_team("Capital City HC", Division::MensPremier))
        .unwrap();

    let teams = db.get_teams().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Capital City HC");
    assert_eq!(teams[1].name, "Swakopmund Stars");
}

#[test]
fn test_update_team() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Old Name", Division::MensPremier))
        .unwrap();

    let mut team = db.get_team_by_id(team_id).unwrap().unwrap();
    team.name = "New Name".to_string();
    team.division = Division::MensFirstDivision;
    db.update_team(&team).unwrap();

    let updated = db.get_team_by_id(team_id).unwrap().unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.division, Division::MensFirstDivision);
}

#[test]
fn test_update_team_nonexistent() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Ghost", Division::MensPremier))
        .unwrap();
    let mut team = db.get_team_by_id(team_id).unwrap().unwrap();
    team.team_id = TeamId::new(999);

    match db.update_team(&team) {
        Err(NhuError::TeamNotFound { id: 999 }) => (),
        other => panic!("Expected TeamNotFound, got {:?}", other),
    }
}

#[test]
fn test_team_overviews_count_players() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    db.save_team(&sample_team("Empty FC", Division::WomensPremier))
        .unwrap();

    db.save_player(&sample_player(team_id, "Amupolo", 1)).unwrap();
    db.save_player(&sample_player(team_id, "Hangula", 7)).unwrap();

    let overviews = db.get_team_overviews().unwrap();
    assert_eq!(overviews.len(), 2);

    let warriors = overviews
        .iter()
        .find(|o| o.team.name == "Windhoek Warriors")
        .unwrap();
    assert_eq!(warriors.player_count, 2);

    let empty = overviews.iter().find(|o| o.team.name == "Empty FC").unwrap();
    assert_eq!(empty.player_count, 0);
}

#[test]
fn test_delete_team_cascades() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let other_id = db
        .save_team(&sample_team("Namibia Nationals", Division::MensPremier))
        .unwrap();

    let player_id = db.save_player(&sample_player(team_id, "Amupolo", 1)).unwrap();

    let event_id = db.save_event(&sample_event("Championship", 12)).unwrap();
    db.register_team_for_event(event_id, team_id).unwrap();
    db.register_team_for_event(event_id, other_id).unwrap();

    db.save_match(&NewMatch {
        home_team_id: team_id,
        away_team_id: other_id,
        scheduled_at: Utc::now().timestamp(),
        location: "Windhoek Stadium".to_string(),
    })
    .unwrap();

    db.delete_team(team_id).unwrap();

    // Team, players, and fixtures are gone
    assert!(db.get_team_by_id(team_id).unwrap().is_none());
    assert!(db.get_player_by_id(player_id).unwrap().is_none());
    assert!(db.get_matches(None).unwrap().is_empty());

    // The event counter matches the remaining registrations
    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert_eq!(event.registered_teams, 1);
    let registered = db.get_registered_teams_for_event(event_id).unwrap();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].team_id, other_id);
}

#[test]
fn test_delete_team_nonexistent() {
    let mut db = create_test_db();
    match db.delete_team(TeamId::new(42)) {
        Err(NhuError::TeamNotFound { id: 42 }) => (),
        other => panic!("Expected TeamNotFound, got {:?}", other),
    }
}

#[test]
fn test_save_player_and_roster_order() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();

    db.save_player(&sample_player(team_id, "Shalongo", 14)).unwrap();
    db.save_player(&sample_player(team_id, "Amupolo", 1)).unwrap();

    let roster = db.get_players_by_team(team_id).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].last_name, "Amupolo");
    assert_eq!(roster[1].last_name, "Shalongo");
}

#[test]
fn test_save_player_rejects_bad_jersey() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();

    match db.save_player(&sample_player(team_id, "Zero", 0)) {
        Err(NhuError::InvalidJerseyNumber { number: 0 }) => (),
        other => panic!("Expected InvalidJerseyNumber, got {:?}", other),
    }
    match db.save_player(&sample_player(team_id, "Hundred", 100)) {
        Err(NhuError::InvalidJerseyNumber { number: 100 }) => (),
        other => panic!("Expected InvalidJerseyNumber, got {:?}", other),
    }
}

#[test]
fn test_save_player_requires_team() {
    let mut db = create_test_db();
    match db.save_player(&sample_player(TeamId::new(7), "Orphan", 5)) {
        Err(NhuError::TeamNotFound { id: 7 }) => (),
        other => panic!("Expected TeamNotFound, got {:?}", other),
    }
}

#[test]
fn test_update_player() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let player_id = db.save_player(&sample_player(team_id, "Amupolo", 1)).unwrap();

    let mut player = db.get_player_by_id(player_id).unwrap().unwrap();
    player.jersey_number = 22;
    player.position = Position::Forward;
    db.update_player(&player).unwrap();

    let updated = db.get_player_by_id(player_id).unwrap().unwrap();
    assert_eq!(updated.jersey_number, 22);
    assert_eq!(updated.position, Position::Forward);
}

#[test]
fn test_delete_player() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let player_id = db.save_player(&sample_player(team_id, "Amupolo", 1)).unwrap();

    db.delete_player(player_id).unwrap();
    assert!(db.get_player_by_id(player_id).unwrap().is_none());

    match db.delete_player(player_id) {
        Err(NhuError::PlayerNotFound { .. }) => (),
        other => panic!("Expected PlayerNotFound, got {:?}", other),
    }
}

#[test]
fn test_save_event_defaults_to_upcoming() {
    let mut db = create_test_db();
    let event_id = db.save_event(&sample_event("Championship", 12)).unwrap();

    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert_eq!(event.status, EventStatus::Upcoming);
    assert_eq!(event.registered_teams, 0);
    assert!(!event.is_full());
    assert!(event.accepts_registrations());
}

#[test]
fn test_save_event_rejects_bad_window() {
    let mut db = create_test_db();
    let mut event = sample_event("Backwards", 12);
    event.end_time = event.start_time;

    match db.save_event(&event) {
        Err(NhuError::InvalidEventWindow) => (),
        other => panic!("Expected InvalidEventWindow, got {:?}", other),
    }
}

#[test]
fn test_save_event_rejects_zero_capacity() {
    let mut db = create_test_db();
    match db.save_event(&sample_event("No Room", 0)) {
        Err(NhuError::InvalidMaxTeams) => (),
        other => panic!("Expected InvalidMaxTeams, got {:?}", other),
    }
}

#[test]
fn test_register_team_for_event() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let event_id = db.save_event(&sample_event("Championship", 12)).unwrap();

    db.register_team_for_event(event_id, team_id).unwrap();

    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert_eq!(event.registered_teams, 1);

    let registered = db.get_registered_teams_for_event(event_id).unwrap();
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].team_id, team_id);

    let team_events = db.get_events_for_team(team_id).unwrap();
    assert_eq!(team_events.len(), 1);
    assert_eq!(team_events[0].event_id, event_id);
}

#[test]
fn test_register_team_twice_fails() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let event_id = db.save_event(&sample_event("Championship", 12)).unwrap();

    db.register_team_for_event(event_id, team_id).unwrap();
    match db.register_team_for_event(event_id, team_id) {
        Err(NhuError::AlreadyRegistered) => (),
        other => panic!("Expected AlreadyRegistered, got {:?}", other),
    }

    // Counter untouched by the failed attempt
    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert_eq!(event.registered_teams, 1);
}

#[test]
fn test_register_team_event_full() {
    let mut db = create_test_db();
    let first = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let second = db
        .save_team(&sample_team("Namibia Nationals", Division::MensPremier))
        .unwrap();
    let event_id = db.save_event(&sample_event("Tiny Cup", 1)).unwrap();

    db.register_team_for_event(event_id, first).unwrap();
    match db.register_team_for_event(event_id, second) {
        Err(NhuError::EventFull { max_teams: 1 }) => (),
        other => panic!("Expected EventFull, got {:?}", other),
    }

    let event = db.get_event_by_id(event_id).unwrap().unwrap();
    assert!(event.is_full());
    assert!(!event.accepts_registrations());
}

#[test]
fn test_register_team_closed_event() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let event_id = db.save_event(&sample_event("Cancelled Cup", 12)).unwrap();
    db.update_event_status(event_id, EventStatus::Cancelled)
        .unwrap();

    match db.register_team_for_event(event_id, team_id) {
        Err(NhuError::RegistrationClosed { .. }) => (),
        other => panic!("Expected RegistrationClosed, got {:?}", other),
    }
}

#[test]
fn test_register_team_missing_event_or_team() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let event_id = db.save_event(&sample_event("Championship", 12)).unwrap();

    match db.register_team_for_event(EventId::new(99), team_id) {
        Err(NhuError::EventNotFound { id: 99 }) => (),
        other => panic!("Expected EventNotFound, got {:?}", other),
    }
    match db.register_team_for_event(event_id, TeamId::new(99)) {
        Err(NhuError::TeamNotFound { id: 99 }) => (),
        other => panic!("Expected TeamNotFound, got {:?}", other),
    }
}

#[test]
fn test_upcoming_events_limit_and_order() {
    let mut db = create_test_db();
    let now = Utc::now();

    for (title, days) in [("Third", 21), ("First", 7), ("Second", 14)] {
        let mut event = sample_event(title, 12);
        event.start_time = (now + Duration::days(days)).timestamp();
        event.end_time = event.start_time + 3600;
        db.save_event(&event).unwrap();
    }
    let cancelled = db.save_event(&sample_event("Gone", 12)).unwrap();
    db.update_event_status(cancelled, EventStatus::Cancelled)
        .unwrap();

    let upcoming = db.upcoming_events(2).unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].title, "First");
    assert_eq!(upcoming[1].title, "Second");
}

#[test]
fn test_save_match_rejects_same_team() {
    let mut db = create_test_db();
    let team_id = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();

    let fixture = NewMatch {
        home_team_id: team_id,
        away_team_id: team_id,
        scheduled_at: Utc::now().timestamp(),
        location: "Windhoek Stadium".to_string(),
    };
    match db.save_match(&fixture) {
        Err(NhuError::SameTeamFixture) => (),
        other => panic!("Expected SameTeamFixture, got {:?}", other),
    }
}

#[test]
fn test_match_lifecycle_and_standings() {
    let mut db = create_test_db();
    let home = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let away = db
        .save_team(&sample_team("Namibia Nationals", Division::MensPremier))
        .unwrap();

    let match_id = db
        .save_match(&NewMatch {
            home_team_id: home,
            away_team_id: away,
            scheduled_at: Utc::now().timestamp(),
            location: "Windhoek Stadium".to_string(),
        })
        .unwrap();

    db.set_match_live(match_id, "2nd Quarter").unwrap();
    let fixture = db.get_match_by_id(match_id).unwrap().unwrap();
    assert_eq!(fixture.status, MatchStatus::Live);
    assert_eq!(fixture.period.as_deref(), Some("2nd Quarter"));
    assert_eq!(fixture.home_score, Some(0));

    db.record_match_result(match_id, 3, 1, Some("Warriors cruised."))
        .unwrap();

    let fixture = db.get_match_by_id(match_id).unwrap().unwrap();
    assert_eq!(fixture.status, MatchStatus::Completed);
    assert_eq!(fixture.home_score, Some(3));
    assert_eq!(fixture.away_score, Some(1));
    assert_eq!(fixture.period, None);

    let winner = db.get_team_by_id(home).unwrap().unwrap();
    let loser = db.get_team_by_id(away).unwrap().unwrap();
    assert_eq!((winner.wins, winner.losses), (1, 0));
    assert_eq!((loser.wins, loser.losses), (0, 1));
}

#[test]
fn test_record_result_draw_leaves_standings() {
    let mut db = create_test_db();
    let home = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let away = db
        .save_team(&sample_team("Namibia Nationals", Division::MensPremier))
        .unwrap();
    let match_id = db
        .save_match(&NewMatch {
            home_team_id: home,
            away_team_id: away,
            scheduled_at: Utc::now().timestamp(),
            location: "Windhoek Stadium".to_string(),
        })
        .unwrap();

    db.record_match_result(match_id, 2, 2, None).unwrap();

    for team_id in [home, away] {
        let team = db.get_team_by_id(team_id).unwrap().unwrap();
        assert_eq!((team.wins, team.losses), (0, 0));
    }
}

#[test]
fn test_record_result_twice_fails() {
    let mut db = create_test_db();
    let home = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let away = db
        .save_team(&sample_team("Namibia Nationals", Division::MensPremier))
        .unwrap();
    let match_id = db
        .save_match(&NewMatch {
            home_team_id: home,
            away_team_id: away,
            scheduled_at: Utc::now().timestamp(),
            location: "Windhoek Stadium".to_string(),
        })
        .unwrap();

    db.record_match_result(match_id, 1, 0, None).unwrap();
    match db.record_match_result(match_id, 1, 0, None) {
        Err(NhuError::ResultAlreadyRecorded) => (),
        other => panic!("Expected ResultAlreadyRecorded, got {:?}", other),
    }

    // Standings untouched by the failed attempt
    let winner = db.get_team_by_id(home).unwrap().unwrap();
    assert_eq!(winner.wins, 1);
}

#[test]
fn test_get_matches_filters_by_status() {
    let mut db = create_test_db();
    let home = db
        .save_team(&sample_team("Windhoek Warriors", Division::MensPremier))
        .unwrap();
    let away = db
        .save_team(&sample_team("Namibia Nationals", Division::MensPremier))
        .unwrap();

    let first = db
        .save_match(&NewMatch {
            home_team_id: home,
            away_team_id: away,
            scheduled_at: Utc::now().timestamp(),
            location: "Windhoek Stadium".to_string(),
        })
        .unwrap();
    db.save_match(&NewMatch {
        home_team_id: away,
        away_team_id: home,
        scheduled_at: Utc::now().timestamp() + 3600,
        location: "Sports Complex".to_string(),
    })
    .unwrap();
    db.record_match_result(first, 2, 0, None).unwrap();

    let completed = db.get_matches(Some(MatchStatus::Completed)).unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].home.name, "Windhoek Warriors");
    assert_eq!(completed[0].home.score, Some(2));

    let upcoming = db.get_matches(Some(MatchStatus::Upcoming)).unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].home.name, "Namibia Nationals");

    assert_eq!(db.get_matches(None).unwrap().len(), 2);
}

#[test]
fn test_create_user_and_verify_login() {
    let mut db = create_test_db();
    db.create_user(&NewUser {
        username: "user123".to_string(),
        password: "12345".to_string(),
        full_name: "Coach Smith".to_string(),
        email: "coach.smith@nhu.org.na".to_string(),
        phone: None,
        role: "Team Coach".to_string(),
    })
    .unwrap();

    let user = db.verify_login("user123", "12345").unwrap();
    assert_eq!(user.full_name, "Coach Smith");

    match db.verify_login("user123", "wrong") {
        Err(NhuError::InvalidCredentials) => (),
        other => panic!("Expected InvalidCredentials, got {:?}", other),
    }
    match db.verify_login("nobody", "12345") {
        Err(NhuError::InvalidCredentials) => (),
        other => panic!("Expected InvalidCredentials, got {:?}", other),
    }
}

#[test]
fn test_create_user_duplicate_username() {
    let mut db = create_test_db();
    let user = NewUser {
        username: "user123".to_string(),
        password: "12345".to_string(),
        full_name: "Coach Smith".to_string(),
        email: "coach.smith@nhu.org.na".to_string(),
        phone: None,
        role: "Team Coach".to_string(),
    };
    db.create_user(&user).unwrap();

    match db.create_user(&user) {
        Err(NhuError::UsernameTaken { .. }) => (),
        other => panic!("Expected UsernameTaken, got {:?}", other),
    }
}

#[test]
fn test_seed_sample_data_is_consistent() {
    let mut db = create_test_db();
    assert!(!db.has_data().unwrap());

    let summary = db.seed_sample_data().unwrap();
    assert!(db.has_data().unwrap());
    assert_eq!(summary.teams, 6);
    assert_eq!(db.get_teams().unwrap().len(), summary.teams);
    assert_eq!(db.get_events().unwrap().len(), summary.events);
    assert_eq!(db.get_matches(None).unwrap().len(), summary.matches);

    // Every event counter matches its registration rows
    for event in db.get_events().unwrap() {
        let registered = db.get_registered_teams_for_event(event.event_id).unwrap();
        assert_eq!(registered.len() as u32, event.registered_teams);
    }

    // Standings line up with the recorded results
    let teams = db.get_teams().unwrap();
    let warriors = teams.iter().find(|t| t.name == "Windhoek Warriors").unwrap();
    assert_eq!((warriors.wins, warriors.losses), (1, 0));
    let nationals = teams.iter().find(|t| t.name == "Namibia Nationals").unwrap();
    assert_eq!((nationals.wins, nationals.losses), (0, 1));

    // The demo login works
    assert!(db.verify_login("user123", "12345").is_ok());
}
