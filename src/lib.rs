//! Namibia Hockey Union CLI Library
//!
//! A Rust library for managing a field hockey federation from the command line:
//! team rosters, player registration, event registration, and match fixtures,
//! all persisted in a local SQLite database.
//!
//! ## Features
//!
//! - **Team Management**: Register, edit, search, and delete teams by division
//! - **Player Rosters**: Per-team player registration with jersey and position rules
//! - **Events**: Capacity-bounded team registration, handled transactionally
//! - **Match Fixtures**: Schedule fixtures, mark them live, record final results
//! - **Standings**: Win/loss counters updated when results are recorded
//! - **Flexible Output**: Human-readable text or `--json` for scripting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhu_cli::storage::FederationDatabase;
//!
//! # fn example() -> nhu_cli::Result<()> {
//! let db = FederationDatabase::new()?;
//! for team in db.get_teams()? {
//!     println!("{} ({})", team.name, team.division);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default team to avoid passing `--team-id` in every command:
//! ```bash
//! export NHU_TEAM_ID=1
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Division, EventId, EventStatus, MatchId, MatchStatus, PlayerId, Position, TeamId};
pub use error::{NhuError, Result};

pub const TEAM_ID_ENV_VAR: &str = "NHU_TEAM_ID";
