//! Integration tests for command helpers

use nhu_cli::{commands::resolve_team_id, NhuError, TeamId, TEAM_ID_ENV_VAR};

#[test]
fn test_resolve_team_id_from_option() {
    let team_id = Some(TeamId::new(42));
    let result = resolve_team_id(team_id);
    assert!(result.is_ok());
    assert_eq!(result.unwrap().as_i64(), 42);
}

#[test]
fn test_resolve_team_id_env_fallback() {
    // Single test so the env var mutations stay sequential

    // Missing entirely
    std::env::remove_var(TEAM_ID_ENV_VAR);
    match resolve_team_id(None) {
        Err(NhuError::MissingTeamId { env_var }) => assert_eq!(env_var, TEAM_ID_ENV_VAR),
        other => panic!("Expected MissingTeamId, got {:?}", other),
    }

    // Set to a valid ID
    std::env::set_var(TEAM_ID_ENV_VAR, "7");
    let result = resolve_team_id(None);
    assert!(result.is_ok());
    assert_eq!(result.unwrap().as_i64(), 7);

    // The explicit argument wins over the env var
    let result = resolve_team_id(Some(TeamId::new(42)));
    assert_eq!(result.unwrap().as_i64(), 42);

    // Set to garbage
    std::env::set_var(TEAM_ID_ENV_VAR, "not_a_number");
    assert!(resolve_team_id(None).is_err());

    // Clean up
    std::env::remove_var(TEAM_ID_ENV_VAR);
}
