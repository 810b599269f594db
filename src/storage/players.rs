//! Player roster query operations

use super::{models::*, now_ts, schema::FederationDatabase, text_column};
use crate::cli::types::{PlayerId, TeamId};
use crate::core::validate::validate_jersey_number;
use crate::error::{NhuError, Result};
use chrono::NaiveDate;
use rusqlite::{params, Row};

impl FederationDatabase {
    /// Register a new player on a team and return the player's ID
    pub fn save_player(&mut self, player: &NewPlayer) -> Result<PlayerId> {
        validate_jersey_number(player.jersey_number)?;

        if self.get_team_by_id(player.team_id)?.is_none() {
            return Err(NhuError::TeamNotFound {
                id: player.team_id.as_i64(),
            });
        }

        let now = now_ts();
        self.conn.execute(
            "INSERT INTO players (team_id, first_name, last_name, date_of_birth,
                                  jersey_number, position, nationality, height_cm,
                                  weight_kg, email, phone, photo_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                player.team_id.as_i64(),
                player.first_name,
                player.last_name,
                player.date_of_birth.map(|d| d.to_string()),
                player.jersey_number,
                player.position.to_string(),
                player.nationality,
                player.height_cm,
                player.weight_kg,
                player.email,
                player.phone,
                player.photo_url,
                now,
                now
            ],
        )?;
        Ok(PlayerId::new(self.conn.last_insert_rowid()))
    }

    /// Get a team's roster, ordered by last then first name
    pub fn get_players_by_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, team_id, first_name, last_name, date_of_birth,
                    jersey_number, position, nationality, height_cm, weight_kg,
                    email, phone, photo_url, created_at, updated_at
             FROM players
             WHERE team_id = ?
             ORDER BY last_name, first_name",
        )?;

        let rows = stmt.query_map(params![team_id.as_i64()], |row| self.row_to_player(row))?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Get one player by ID
    pub fn get_player_by_id(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, team_id, first_name, last_name, date_of_birth,
                    jersey_number, position, nationality, height_cm, weight_kg,
                    email, phone, photo_url, created_at, updated_at
             FROM players WHERE player_id = ?",
        )?;

        let result = stmt.query_row(params![player_id.as_i64()], |row| self.row_to_player(row));

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Update an existing player's registration details
    pub fn update_player(&mut self, player: &Player) -> Result<()> {
        validate_jersey_number(player.jersey_number)?;

        let rows_affected = self.conn.execute(
            "UPDATE players
             SET first_name = ?, last_name = ?, date_of_birth = ?, jersey_number = ?,
                 position = ?, nationality = ?, height_cm = ?, weight_kg = ?,
                 email = ?, phone = ?, photo_url = ?, updated_at = ?
             WHERE player_id = ?",
            params![
                player.first_name,
                player.last_name,
                player.date_of_birth.map(|d| d.to_string()),
                player.jersey_number,
                player.position.to_string(),
                player.nationality,
                player.height_cm,
                player.weight_kg,
                player.email,
                player.phone,
                player.photo_url,
                now_ts(),
                player.player_id.as_i64()
            ],
        )?;

        if rows_affected == 0 {
            return Err(NhuError::PlayerNotFound {
                id: player.player_id.as_i64(),
            });
        }
        Ok(())
    }

    /// Remove a player from their team's roster
    pub fn delete_player(&mut self, player_id: PlayerId) -> Result<()> {
        let rows_affected = self.conn.execute(
            "DELETE FROM players WHERE player_id = ?",
            params![player_id.as_i64()],
        )?;

        if rows_affected == 0 {
            return Err(NhuError::PlayerNotFound {
                id: player_id.as_i64(),
            });
        }
        Ok(())
    }

    /// Helper to convert a database row to a Player
    pub(crate) fn row_to_player(&self, row: &Row) -> rusqlite::Result<Player> {
        let date_of_birth: Option<String> = row.get(4)?;
        let date_of_birth = match date_of_birth {
            Some(s) => Some(
                NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        4,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?,
            ),
            None => None,
        };
        let position: String = row.get(6)?;

        Ok(Player {
            player_id: PlayerId::new(row.get(0)?),
            team_id: TeamId::new(row.get(1)?),
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            date_of_birth,
            jersey_number: row.get(5)?,
            position: text_column(6, &position)?,
            nationality: row.get(7)?,
            height_cm: row.get(8)?,
            weight_kg: row.get(9)?,
            email: row.get(10)?,
            phone: row.get(11)?,
            photo_url: row.get(12)?,
            created_at: row.get(13)?,
            updated_at: row.get(14)?,
        })
    }
}
