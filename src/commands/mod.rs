//! Command implementations for the Namibia Hockey Union CLI

pub mod auth;
pub mod common;
pub mod events;
pub mod home;
pub mod matches;
pub mod players;
pub mod seed;
pub mod teams;


use crate::{
    cli::types::TeamId,
    error::{NhuError, Result},
    TEAM_ID_ENV_VAR,
};

/// Resolve a team ID from the CLI argument or the `NHU_TEAM_ID` env var.
pub fn resolve_team_id(team_id: Option<TeamId>) -> Result<TeamId> {
    match team_id {
        Some(id) => Ok(id),
        None => match std::env::var(TEAM_ID_ENV_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Err(NhuError::MissingTeamId {
                env_var: TEAM_ID_ENV_VAR.to_string(),
            }),
        },
    }
}
