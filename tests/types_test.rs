//! Integration tests for CLI value types

use nhu_cli::{
    cli::types::{Division, DivisionCategory, EventStatus, MatchStatus, Position},
    EventId, MatchId, PlayerId, TeamId,
};

#[test]
fn test_id_types_parse_and_display() {
    let team_id: TeamId = "42".parse().unwrap();
    assert_eq!(team_id, TeamId::new(42));
    assert_eq!(team_id.to_string(), "42");

    let player_id: PlayerId = "7".parse().unwrap();
    assert_eq!(player_id.as_i64(), 7);

    let event_id: EventId = "3".parse().unwrap();
    assert_eq!(event_id.as_i64(), 3);

    let match_id: MatchId = "9".parse().unwrap();
    assert_eq!(match_id.as_i64(), 9);

    assert!("abc".parse::<TeamId>().is_err());
}

#[test]
fn test_division_display_forms() {
    assert_eq!(Division::MensPremier.to_string(), "Men's Premier");
    assert_eq!(Division::WomensPremier.to_string(), "Women's Premier");
    assert_eq!(
        Division::MensFirstDivision.to_string(),
        "Men's First Division"
    );
    assert_eq!(
        Division::WomensFirstDivision.to_string(),
        "Women's First Division"
    );
    assert_eq!(Division::JuniorBoys.to_string(), "Junior Boys");
    assert_eq!(Division::JuniorGirls.to_string(), "Junior Girls");
}

#[test]
fn test_division_parses_display_and_cli_forms() {
    for division in Division::all() {
        // The display form round-trips
        assert_eq!(division.to_string().parse::<Division>().unwrap(), division);
    }

    // The dashed CLI form works too
    assert_eq!(
        "womens-premier".parse::<Division>().unwrap(),
        Division::WomensPremier
    );
    assert_eq!(
        "junior-girls".parse::<Division>().unwrap(),
        Division::JuniorGirls
    );
}

#[test]
fn test_division_categories_cover_all_divisions() {
    let men: Vec<Division> = Division::all()
        .into_iter()
        .filter(|d| d.category() == DivisionCategory::Men)
        .collect();
    assert_eq!(men, vec![Division::MensPremier, Division::MensFirstDivision]);

    let junior: Vec<Division> = Division::all()
        .into_iter()
        .filter(|d| d.category() == DivisionCategory::Junior)
        .collect();
    assert_eq!(junior, vec![Division::JuniorBoys, Division::JuniorGirls]);
}

#[test]
fn test_position_parse_aliases() {
    assert_eq!("gk".parse::<Position>().unwrap(), Position::Goalkeeper);
    assert_eq!("DEF".parse::<Position>().unwrap(), Position::Defender);
    assert_eq!("Midfielder".parse::<Position>().unwrap(), Position::Midfielder);
    assert_eq!("fwd".parse::<Position>().unwrap(), Position::Forward);
    assert_eq!("util".parse::<Position>().unwrap(), Position::Utility);
}

#[test]
fn test_event_status_serde_round_trip() {
    let json = serde_json::to_string(&EventStatus::Upcoming).unwrap();
    assert_eq!(json, "\"upcoming\"");
    let status: EventStatus = serde_json::from_str("\"cancelled\"").unwrap();
    assert_eq!(status, EventStatus::Cancelled);
}

#[test]
fn test_match_status_serde_round_trip() {
    let json = serde_json::to_string(&MatchStatus::Live).unwrap();
    assert_eq!(json, "\"live\"");
    let status: MatchStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(status, MatchStatus::Completed);
}
