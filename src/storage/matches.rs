//! Match fixture operations and standings updates

use super::{models::*, now_ts, schema::FederationDatabase, text_column};
use crate::cli::types::{MatchId, MatchStatus, TeamId};
use crate::error::{NhuError, Result};
use rusqlite::{params, Row};

impl FederationDatabase {
    /// Schedule a new fixture and return its ID
    pub fn save_match(&mut self, fixture: &NewMatch) -> Result<MatchId> {
        if fixture.home_team_id == fixture.away_team_id {
            return Err(NhuError::SameTeamFixture);
        }
        for team_id in [fixture.home_team_id, fixture.away_team_id] {
            if self.get_team_by_id(team_id)?.is_none() {
                return Err(NhuError::TeamNotFound {
                    id: team_id.as_i64(),
                });
            }
        }

        self.conn.execute(
            "INSERT INTO matches (home_team_id, away_team_id, status, scheduled_at,
                                  location, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                fixture.home_team_id.as_i64(),
                fixture.away_team_id.as_i64(),
                MatchStatus::Upcoming.to_string(),
                fixture.scheduled_at,
                fixture.location,
                now_ts()
            ],
        )?;
        Ok(MatchId::new(self.conn.last_insert_rowid()))
    }

    /// Get match cards joined with both teams, optionally filtered by
    /// status, ordered by scheduled time
    pub fn get_matches(&self, status: Option<MatchStatus>) -> Result<Vec<MatchCard>> {
        let mut query = String::from(
            "SELECT m.match_id, m.status, m.scheduled_at, m.location,
                    m.home_team_id, h.name, h.division, m.home_score,
                    m.away_team_id, a.name, a.division, m.away_score,
                    m.period, m.summary
             FROM matches m
             JOIN teams h ON h.team_id = m.home_team_id
             JOIN teams a ON a.team_id = m.away_team_id",
        );

        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        if let Some(status) = status {
            query.push_str(" WHERE m.status = ?");
            params.push(Box::new(status.to_string()));
        }
        query.push_str(" ORDER BY m.scheduled_at");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            |row| self.row_to_match_card(row),
        )?;

        let mut cards = Vec::new();
        for row in rows {
            cards.push(row?);
        }
        Ok(cards)
    }

    /// Get one fixture by ID
    pub fn get_match_by_id(&self, match_id: MatchId) -> Result<Option<MatchFixture>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_id, home_team_id, away_team_id, status, scheduled_at,
                    location, home_score, away_score, period, summary, created_at
             FROM matches WHERE match_id = ?",
        )?;

        let result = stmt.query_row(params![match_id.as_i64()], |row| self.row_to_fixture(row));

        match result {
            Ok(fixture) => Ok(Some(fixture)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Mark a fixture as live with a period label and a running 0-0 score
    pub fn set_match_live(&mut self, match_id: MatchId, period: &str) -> Result<()> {
        let fixture = self
            .get_match_by_id(match_id)?
            .ok_or(NhuError::MatchNotFound {
                id: match_id.as_i64(),
            })?;
        if fixture.status == MatchStatus::Completed {
            return Err(NhuError::ResultAlreadyRecorded);
        }

        self.conn.execute(
            "UPDATE matches
             SET status = ?, period = ?,
                 home_score = COALESCE(home_score, 0),
                 away_score = COALESCE(away_score, 0)
             WHERE match_id = ?",
            params![
                MatchStatus::Live.to_string(),
                period,
                match_id.as_i64()
            ],
        )?;
        Ok(())
    }

    /// Record a fixture's final result.
    ///
    /// Completes the fixture and bumps the winner's wins and the loser's
    /// losses in the same transaction; a draw leaves both counters alone.
    pub fn record_match_result(
        &mut self,
        match_id: MatchId,
        home_score: u32,
        away_score: u32,
        summary: Option<&str>,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;

        let fixture = tx.query_row(
            "SELECT home_team_id, away_team_id, status FROM matches WHERE match_id = ?",
            params![match_id.as_i64()],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        );
        let (home_team_id, away_team_id, status) = match fixture {
            Ok(v) => v,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(NhuError::MatchNotFound {
                    id: match_id.as_i64(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let status: MatchStatus = status.parse()?;
        if status == MatchStatus::Completed {
            return Err(NhuError::ResultAlreadyRecorded);
        }

        tx.execute(
            "UPDATE matches
             SET status = ?, home_score = ?, away_score = ?, summary = ?, period = NULL
             WHERE match_id = ?",
            params![
                MatchStatus::Completed.to_string(),
                home_score,
                away_score,
                summary,
                match_id.as_i64()
            ],
        )?;

        if home_score != away_score {
            let (winner, loser) = if home_score > away_score {
                (home_team_id, away_team_id)
            } else {
                (away_team_id, home_team_id)
            };
            tx.execute(
                "UPDATE teams SET wins = wins + 1 WHERE team_id = ?",
                params![winner],
            )?;
            tx.execute(
                "UPDATE teams SET losses = losses + 1 WHERE team_id = ?",
                params![loser],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Helper to convert a joined row to a MatchCard
    pub(crate) fn row_to_match_card(&self, row: &Row) -> rusqlite::Result<MatchCard> {
        let status: String = row.get(1)?;
        let home_division: String = row.get(6)?;
        let away_division: String = row.get(10)?;

        Ok(MatchCard {
            match_id: MatchId::new(row.get(0)?),
            status: text_column(1, &status)?,
            scheduled_at: row.get(2)?,
            location: row.get(3)?,
            home: MatchSide {
                team_id: TeamId::new(row.get(4)?),
                name: row.get(5)?,
                division: text_column(6, &home_division)?,
                score: row.get(7)?,
            },
            away: MatchSide {
                team_id: TeamId::new(row.get(8)?),
                name: row.get(9)?,
                division: text_column(10, &away_division)?,
                score: row.get(11)?,
            },
            period: row.get(12)?,
            summary: row.get(13)?,
        })
    }

    /// Helper to convert a database row to a MatchFixture
    pub(crate) fn row_to_fixture(&self, row: &Row) -> rusqlite::Result<MatchFixture> {
        let status: String = row.get(3)?;

        Ok(MatchFixture {
            match_id: MatchId::new(row.get(0)?),
            home_team_id: TeamId::new(row.get(1)?),
            away_team_id: TeamId::new(row.get(2)?),
            status: text_column(3, &status)?,
            scheduled_at: row.get(4)?,
            location: row.get(5)?,
            home_score: row.get(6)?,
            away_score: row.get(7)?,
            period: row.get(8)?,
            summary: row.get(9)?,
            created_at: row.get(10)?,
        })
    }
}
