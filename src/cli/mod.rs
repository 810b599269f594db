//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use types::{
    Division, DivisionCategory, EventId, EventTab, MatchId, MatchStatus, PlayerId, PlayerSortKey,
    Position, SortOrder, TeamId,
};

/// Common roster filtering arguments shared between player commands
#[derive(Debug, Args)]
pub struct RosterFilters {
    /// Team ID (or set `NHU_TEAM_ID` env var).
    #[clap(long, short)]
    pub team_id: Option<TeamId>,

    /// Filter by player name or jersey number (substring match).
    #[clap(long, short = 'q')]
    pub query: Option<String>,

    /// Filter by position: `-p goalkeeper`, `-p forward`, ...
    #[clap(long, short)]
    pub position: Option<Position>,

    /// Sort key.
    #[clap(long, value_enum, default_value_t = PlayerSortKey::Name)]
    pub sort: PlayerSortKey,

    /// Sort direction.
    #[clap(long, value_enum, default_value_t = SortOrder::Asc)]
    pub order: SortOrder,
}

#[derive(Debug, Parser)]
#[clap(name = "nhu", about = "Namibia Hockey Union federation management CLI")]
pub struct Nhu {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage federation teams
    Teams {
        #[clap(subcommand)]
        cmd: TeamsCmd,
    },

    /// Manage team rosters
    Players {
        #[clap(subcommand)]
        cmd: PlayersCmd,
    },

    /// Browse events and register teams for them
    Events {
        #[clap(subcommand)]
        cmd: EventsCmd,
    },

    /// Browse and manage match fixtures
    Matches {
        #[clap(subcommand)]
        cmd: MatchesCmd,
    },

    /// Sign up, log in, or log out
    Auth {
        #[clap(subcommand)]
        cmd: AuthCmd,
    },

    /// Show the signed-in account
    Profile,

    /// Home feed: the next upcoming events plus the latest federation news
    Home {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Populate the database with sample federation data
    Seed {
        /// Seed even if the database already holds data.
        #[clap(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamsCmd {
    /// List teams, with optional search and category tabs.
    ///
    /// The query matches team names and division labels; the category
    /// narrows to men's, women's, or junior divisions.
    List {
        /// Substring to match against team name or division.
        #[clap(long, short = 'q')]
        query: Option<String>,

        /// Restrict to a division category.
        #[clap(long, value_enum)]
        category: Option<DivisionCategory>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one team with roster size and win/loss record
    Show {
        /// Team ID.
        #[clap(long, short)]
        id: TeamId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Register a new team with the federation
    Register {
        /// Team name.
        #[clap(long)]
        name: String,

        /// Division, e.g. `mens-premier` or "Women's First Division".
        #[clap(long)]
        division: Division,

        /// Coach name.
        #[clap(long)]
        coach: String,

        /// Manager name.
        #[clap(long)]
        manager: Option<String>,

        /// Contact email address.
        #[clap(long)]
        contact_email: String,

        /// Contact phone number.
        #[clap(long)]
        contact_phone: String,

        /// Team logo URL.
        #[clap(long)]
        logo_url: Option<String>,
    },

    /// Edit an existing team
    Update {
        /// Team ID.
        #[clap(long, short)]
        id: TeamId,

        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        division: Option<Division>,

        #[clap(long)]
        coach: Option<String>,

        #[clap(long)]
        manager: Option<String>,

        #[clap(long)]
        contact_email: Option<String>,

        #[clap(long)]
        contact_phone: Option<String>,

        #[clap(long)]
        logo_url: Option<String>,
    },

    /// Delete a team, its players, and its event registrations
    Delete {
        /// Team ID.
        #[clap(long, short)]
        id: TeamId,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayersCmd {
    /// List a team's roster with search, position filter, and sorting
    List {
        #[clap(flatten)]
        filters: RosterFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player's full registration details
    Show {
        /// Player ID.
        #[clap(long, short)]
        id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Register a new player on a team
    Register {
        /// Team ID (or set `NHU_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        #[clap(long)]
        first_name: String,

        #[clap(long)]
        last_name: String,

        /// Jersey number (1-99).
        #[clap(long, short = 'j')]
        jersey: u8,

        /// Position: goalkeeper, defender, midfielder, forward, or utility.
        #[clap(long, short)]
        position: Position,

        /// Date of birth (YYYY-MM-DD).
        #[clap(long)]
        date_of_birth: Option<NaiveDate>,

        #[clap(long)]
        nationality: Option<String>,

        /// Height in centimeters.
        #[clap(long)]
        height_cm: Option<f64>,

        /// Weight in kilograms.
        #[clap(long)]
        weight_kg: Option<f64>,

        #[clap(long)]
        email: Option<String>,

        #[clap(long)]
        phone: Option<String>,

        #[clap(long)]
        photo_url: Option<String>,
    },

    /// Edit an existing player
    Update {
        /// Player ID.
        #[clap(long, short)]
        id: PlayerId,

        #[clap(long)]
        first_name: Option<String>,

        #[clap(long)]
        last_name: Option<String>,

        /// Jersey number (1-99).
        #[clap(long, short = 'j')]
        jersey: Option<u8>,

        #[clap(long, short)]
        position: Option<Position>,

        /// Date of birth (YYYY-MM-DD).
        #[clap(long)]
        date_of_birth: Option<NaiveDate>,

        #[clap(long)]
        nationality: Option<String>,

        /// Height in centimeters.
        #[clap(long)]
        height_cm: Option<f64>,

        /// Weight in kilograms.
        #[clap(long)]
        weight_kg: Option<f64>,

        #[clap(long)]
        email: Option<String>,

        #[clap(long)]
        phone: Option<String>,

        #[clap(long)]
        photo_url: Option<String>,
    },

    /// Remove a player from their team's roster
    Delete {
        /// Player ID.
        #[clap(long, short)]
        id: PlayerId,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventsCmd {
    /// List events by tab: upcoming, past, or the selected team's
    List {
        /// Which tab to show.
        #[clap(long, value_enum, default_value_t = EventTab::Upcoming)]
        tab: EventTab,

        /// Team ID for `--tab mine` (or set `NHU_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one event with its registered teams
    Show {
        /// Event ID.
        #[clap(long, short)]
        id: EventId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Create a new event (starts out as upcoming)
    Create {
        /// Event title.
        #[clap(long)]
        title: String,

        /// Event description.
        #[clap(long)]
        description: String,

        /// Event location.
        #[clap(long)]
        location: String,

        /// Start date and time, e.g. "2025-06-24 15:00".
        #[clap(long)]
        starts: String,

        /// End date and time; defaults to three hours after the start.
        #[clap(long)]
        ends: Option<String>,

        /// Maximum number of teams that can register.
        #[clap(long, default_value_t = 12)]
        max_teams: u32,

        /// Event image URL.
        #[clap(long)]
        image_url: Option<String>,
    },

    /// Register a team for an event
    Register {
        /// Event ID.
        #[clap(long, short)]
        event_id: EventId,

        /// Team ID (or set `NHU_TEAM_ID` env var).
        #[clap(long, short)]
        team_id: Option<TeamId>,
    },

    /// Cancel an event
    Cancel {
        /// Event ID.
        #[clap(long, short)]
        id: EventId,
    },
}

#[derive(Debug, Subcommand)]
pub enum MatchesCmd {
    /// List match fixtures, optionally by status
    List {
        /// Filter by status: upcoming, live, or completed.
        #[clap(long)]
        status: Option<MatchStatus>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Schedule a new fixture between two teams
    Schedule {
        /// Home team ID.
        #[clap(long)]
        home: TeamId,

        /// Away team ID.
        #[clap(long)]
        away: TeamId,

        /// Date and time of the fixture, e.g. "2025-06-24 15:00".
        #[clap(long)]
        at: String,

        /// Venue.
        #[clap(long)]
        location: String,
    },

    /// Mark a fixture as live
    Live {
        /// Match ID.
        #[clap(long, short)]
        id: MatchId,

        /// Period label shown while live, e.g. "2nd Quarter".
        #[clap(long, default_value = "1st Quarter")]
        period: String,
    },

    /// Record the final result of a fixture and update standings
    Record {
        /// Match ID.
        #[clap(long, short)]
        id: MatchId,

        #[clap(long)]
        home_score: u32,

        #[clap(long)]
        away_score: u32,

        /// Short match report shown on the results tab.
        #[clap(long)]
        summary: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AuthCmd {
    /// Create a federation account
    Signup {
        #[clap(long)]
        username: String,

        #[clap(long)]
        password: String,

        /// Must match `--password`.
        #[clap(long)]
        confirm_password: String,

        #[clap(long)]
        full_name: String,

        #[clap(long)]
        email: String,

        #[clap(long)]
        phone: Option<String>,
    },

    /// Log in and persist a session
    Login {
        #[clap(long)]
        username: String,

        #[clap(long)]
        password: String,
    },

    /// Clear the current session
    Logout,
}
