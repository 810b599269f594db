//! Error types for the Namibia Hockey Union CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NhuError>;

#[derive(Error, Debug)]
pub enum NhuError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Team ID not provided and {env_var} environment variable not set")]
    MissingTeamId { env_var: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid division: {division}")]
    InvalidDivision { division: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    #[error("Jersey number must be between 1 and 99, got {number}")]
    InvalidJerseyNumber { number: i64 },

    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("Invalid date/time: {value} (expected e.g. 2025-06-24 15:00)")]
    InvalidDateTime { value: String },

    #[error("End date must be after start date")]
    InvalidEventWindow,

    #[error("Maximum teams must be greater than zero")]
    InvalidMaxTeams,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Team not found: {id}")]
    TeamNotFound { id: i64 },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: i64 },

    #[error("Event not found: {id}")]
    EventNotFound { id: i64 },

    #[error("Match not found: {id}")]
    MatchNotFound { id: i64 },

    #[error("Event is full ({max_teams} teams registered)")]
    EventFull { max_teams: u32 },

    #[error("Team is already registered for this event")]
    AlreadyRegistered,

    #[error("Registration is closed for this event (status: {status})")]
    RegistrationClosed { status: String },

    #[error("Match result already recorded")]
    ResultAlreadyRecorded,

    #[error("Home and away team must differ")]
    SameTeamFixture,

    #[error("Username is already taken: {username}")]
    UsernameTaken { username: String },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for NhuError {
    fn from(err: anyhow::Error) -> Self {
        NhuError::Storage {
            message: err.to_string(),
        }
    }
}
