//! Database schema and connection management

use crate::error::NhuError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::PathBuf;

/// Database connection manager for federation data
pub struct FederationDatabase {
    pub(crate) conn: Connection,
}

impl FederationDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory database, used by tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| NhuError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("nhu-cli").join("federation.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Create teams table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                division TEXT NOT NULL,
                coach TEXT NOT NULL,
                manager TEXT,
                contact_email TEXT NOT NULL,
                contact_phone TEXT NOT NULL,
                logo_url TEXT,
                wins INTEGER NOT NULL DEFAULT 0,
                losses INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Create players table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                team_id INTEGER NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                date_of_birth TEXT,
                jersey_number INTEGER NOT NULL,
                position TEXT NOT NULL,
                nationality TEXT,
                height_cm REAL,
                weight_kg REAL,
                email TEXT,
                phone TEXT,
                photo_url TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (team_id) REFERENCES teams(team_id)
            )",
            [],
        )?;

        // Create events table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS events (
                event_id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                location TEXT NOT NULL,
                start_time INTEGER NOT NULL,
                end_time INTEGER NOT NULL,
                status TEXT NOT NULL,
                max_teams INTEGER NOT NULL,
                registered_teams INTEGER NOT NULL DEFAULT 0,
                image_url TEXT,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Create event_registrations table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS event_registrations (
                event_id INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                registered_at INTEGER NOT NULL,
                PRIMARY KEY (event_id, team_id),
                FOREIGN KEY (event_id) REFERENCES events(event_id),
                FOREIGN KEY (team_id) REFERENCES teams(team_id)
            )",
            [],
        )?;

        // Create matches table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                match_id INTEGER PRIMARY KEY,
                home_team_id INTEGER NOT NULL,
                away_team_id INTEGER NOT NULL,
                status TEXT NOT NULL,
                scheduled_at INTEGER NOT NULL,
                location TEXT NOT NULL,
                home_score INTEGER,
                away_score INTEGER,
                period TEXT,
                summary TEXT,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (home_team_id) REFERENCES teams(team_id),
                FOREIGN KEY (away_team_id) REFERENCES teams(team_id)
            )",
            [],
        )?;

        // Create users table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                full_name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                role TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Create indexes for the common lookups
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_team
             ON players(team_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_events_start
             ON events(start_time)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_registrations_team
             ON event_registrations(team_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_status
             ON matches(status, scheduled_at)",
            [],
        )?;

        Ok(())
    }
}
