//! Team query operations

use super::{models::*, now_ts, schema::FederationDatabase, text_column};
use crate::cli::types::TeamId;
use crate::error::{NhuError, Result};
use rusqlite::{params, Row};

impl FederationDatabase {
    /// Register a new team and return its ID
    pub fn save_team(&mut self, team: &NewTeam) -> Result<TeamId> {
        self.conn.execute(
            "INSERT INTO teams (name, division, coach, manager, contact_email,
                                contact_phone, logo_url, wins, losses, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, 0, 0, ?)",
            params![
                team.name,
                team.division.to_string(),
                team.coach,
                team.manager,
                team.contact_email,
                team.contact_phone,
                team.logo_url,
                now_ts()
            ],
        )?;
        Ok(TeamId::new(self.conn.last_insert_rowid()))
    }

    /// Get all teams, ordered by name
    pub fn get_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, name, division, coach, manager, contact_email,
                    contact_phone, logo_url, wins, losses, created_at
             FROM teams ORDER BY name",
        )?;

        let rows = stmt.query_map([], |row| self.row_to_team(row))?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Get one team by ID
    pub fn get_team_by_id(&self, team_id: TeamId) -> Result<Option<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, name, division, coach, manager, contact_email,
                    contact_phone, logo_url, wins, losses, created_at
             FROM teams WHERE team_id = ?",
        )?;

        let result = stmt.query_row(params![team_id.as_i64()], |row| self.row_to_team(row));

        match result {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all teams with their derived roster sizes, ordered by name
    pub fn get_team_overviews(&self) -> Result<Vec<TeamOverview>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.team_id, t.name, t.division, t.coach, t.manager, t.contact_email,
                    t.contact_phone, t.logo_url, t.wins, t.losses, t.created_at,
                    COUNT(p.player_id)
             FROM teams t
             LEFT JOIN players p ON p.team_id = t.team_id
             GROUP BY t.team_id
             ORDER BY t.name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TeamOverview {
                team: self.row_to_team(row)?,
                player_count: row.get(11)?,
            })
        })?;

        let mut overviews = Vec::new();
        for row in rows {
            overviews.push(row?);
        }
        Ok(overviews)
    }

    /// Number of players on a team's roster
    pub fn count_players(&self, team_id: TeamId) -> Result<u32> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM players WHERE team_id = ?",
            params![team_id.as_i64()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Update an existing team's details (win/loss counters are managed
    /// by match result recording, not here)
    pub fn update_team(&mut self, team: &Team) -> Result<()> {
        let rows_affected = self.conn.execute(
            "UPDATE teams
             SET name = ?, division = ?, coach = ?, manager = ?,
                 contact_email = ?, contact_phone = ?, logo_url = ?
             WHERE team_id = ?",
            params![
                team.name,
                team.division.to_string(),
                team.coach,
                team.manager,
                team.contact_email,
                team.contact_phone,
                team.logo_url,
                team.team_id.as_i64()
            ],
        )?;

        if rows_affected == 0 {
            return Err(NhuError::TeamNotFound {
                id: team.team_id.as_i64(),
            });
        }
        Ok(())
    }

    /// Delete a team along with its players, event registrations, and
    /// fixtures, repairing affected event counters in the same transaction
    pub fn delete_team(&mut self, team_id: TeamId) -> Result<()> {
        let id = team_id.as_i64();
        let tx = self.conn.transaction()?;

        let exists: i64 = tx.query_row(
            "SELECT COUNT(*) FROM teams WHERE team_id = ?",
            params![id],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(NhuError::TeamNotFound { id });
        }

        tx.execute(
            "UPDATE events SET registered_teams = registered_teams - 1
             WHERE event_id IN (SELECT event_id FROM event_registrations WHERE team_id = ?)",
            params![id],
        )?;
        tx.execute(
            "DELETE FROM event_registrations WHERE team_id = ?",
            params![id],
        )?;
        tx.execute(
            "DELETE FROM matches WHERE home_team_id = ? OR away_team_id = ?",
            params![id, id],
        )?;
        tx.execute("DELETE FROM players WHERE team_id = ?", params![id])?;
        tx.execute("DELETE FROM teams WHERE team_id = ?", params![id])?;

        tx.commit()?;
        Ok(())
    }

    /// Helper to convert a database row to a Team
    pub(crate) fn row_to_team(&self, row: &Row) -> rusqlite::Result<Team> {
        let division: String = row.get(2)?;

        Ok(Team {
            team_id: TeamId::new(row.get(0)?),
            name: row.get(1)?,
            division: text_column(2, &division)?,
            coach: row.get(3)?,
            manager: row.get(4)?,
            contact_email: row.get(5)?,
            contact_phone: row.get(6)?,
            logo_url: row.get(7)?,
            wins: row.get(8)?,
            losses: row.get(9)?,
            created_at: row.get(10)?,
        })
    }
}
