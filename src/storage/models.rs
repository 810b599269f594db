//! Data models for the storage layer

use crate::cli::types::{
    Division, EventId, EventStatus, MatchId, MatchStatus, PlayerId, Position, TeamId,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A team registered with the federation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub division: Division,
    pub coach: String,
    pub manager: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub logo_url: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub created_at: i64,
}

/// Fields supplied when registering a new team.
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub division: Division,
    pub coach: String,
    pub manager: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub logo_url: Option<String>,
}

/// A team together with its derived roster size.
#[derive(Debug, Clone, Serialize)]
pub struct TeamOverview {
    #[serde(flatten)]
    pub team: Team,
    pub player_count: u32,
}

/// A registered player, always owned by exactly one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub jersey_number: u8,
    pub position: Position,
    pub nationality: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Player {
    /// "First Last", as shown on roster cards.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields supplied when registering a new player.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub team_id: TeamId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub jersey_number: u8,
    pub position: Position,
    pub nationality: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub photo_url: Option<String>,
}

/// A scheduled competition with a team-registration capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: i64,
    pub end_time: i64,
    pub status: EventStatus,
    pub max_teams: u32,
    pub registered_teams: u32,
    pub image_url: Option<String>,
    pub created_at: i64,
}

impl Event {
    /// Capacity reached.
    pub fn is_full(&self) -> bool {
        self.registered_teams >= self.max_teams
    }

    /// Whether the registration action is still offered for this event.
    pub fn accepts_registrations(&self) -> bool {
        self.status.accepts_registrations() && !self.is_full()
    }
}

/// Fields supplied when creating a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: i64,
    pub end_time: i64,
    pub max_teams: u32,
    pub image_url: Option<String>,
}

/// A match fixture between two federation teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFixture {
    pub match_id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub status: MatchStatus,
    pub scheduled_at: i64,
    pub location: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub period: Option<String>,
    pub summary: Option<String>,
    pub created_at: i64,
}

/// Fields supplied when scheduling a new fixture.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub scheduled_at: i64,
    pub location: String,
}

/// One side of a match card: the team's name and division.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSide {
    pub team_id: TeamId,
    pub name: String,
    pub division: Division,
    pub score: Option<u32>,
}

/// A fixture joined with both teams, as shown on the match list.
#[derive(Debug, Clone, Serialize)]
pub struct MatchCard {
    pub match_id: MatchId,
    pub status: MatchStatus,
    pub scheduled_at: i64,
    pub location: String,
    pub home: MatchSide,
    pub away: MatchSide,
    pub period: Option<String>,
    pub summary: Option<String>,
}

/// A federation account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: i64,
}

/// Fields supplied at signup.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}
