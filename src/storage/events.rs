//! Event query operations and team registration

use super::{models::*, now_ts, schema::FederationDatabase, text_column};
use crate::cli::types::{EventId, EventStatus, TeamId};
use crate::error::{NhuError, Result};
use rusqlite::{params, Row};

impl FederationDatabase {
    /// Create a new event and return its ID. New events start out upcoming.
    pub fn save_event(&mut self, event: &NewEvent) -> Result<EventId> {
        if event.end_time <= event.start_time {
            return Err(NhuError::InvalidEventWindow);
        }
        if event.max_teams == 0 {
            return Err(NhuError::InvalidMaxTeams);
        }

        self.conn.execute(
            "INSERT INTO events (title, description, location, start_time, end_time,
                                 status, max_teams, registered_teams, image_url, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, 0, ?, ?)",
            params![
                event.title,
                event.description,
                event.location,
                event.start_time,
                event.end_time,
                EventStatus::Upcoming.to_string(),
                event.max_teams,
                event.image_url,
                now_ts()
            ],
        )?;
        Ok(EventId::new(self.conn.last_insert_rowid()))
    }

    /// Get all events, ordered by start time
    pub fn get_events(&self) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT event_id, title, description, location, start_time, end_time,
                    status, max_teams, registered_teams, image_url, created_at
             FROM events ORDER BY start_time",
        )?;

        let rows = stmt.query_map([], |row| self.row_to_event(row))?;

        let mut events = Vec::new();
        for row in rows {
            events.push(row?);
        }
        Ok(events)
    }

    /// Get one event by ID
    pub fn get_event_by_id(&self, event_id: EventId) -> Result<Option<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT event_id, title, description, location, start_time, end_time,
                    status, max_teams, registered_teams, image_url, created_at
             FROM events WHERE event_id = ?",
        )?;

        let result = stmt.query_row(params![event_id.as_i64()], |row| self.row_to_event(row));

        match result {
            Ok(event) => Ok(Some(event)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The next upcoming events by start time, as shown on the home feed
    pub fn upcoming_events(&self, limit: u32) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT event_id, title, description, location, start_time, end_time,
                    status, max_teams, registered_teams, image_url, created_at
             FROM events
             WHERE status = ?
             ORDER BY start_time
             LIMIT ?",
        )?;

        let rows = stmt.query_map(
            params![EventStatus::Upcoming.to_string(), limit],
            |row| self.row_to_event(row),
        )?;

        let mut events = Vec::new();
        for row in rows {
            events.push(row?);
        }
        Ok(events)
    }

    /// Events a team is registered for, ordered by start time
    pub fn get_events_for_team(&self, team_id: TeamId) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT e.event_id, e.title, e.description, e.location, e.start_time, e.end_time,
                    e.status, e.max_teams, e.registered_teams, e.image_url, e.created_at
             FROM events e
             JOIN event_registrations r ON r.event_id = e.event_id
             WHERE r.team_id = ?
             ORDER BY e.start_time",
        )?;

        let rows = stmt.query_map(params![team_id.as_i64()], |row| self.row_to_event(row))?;

        let mut events = Vec::new();
        for row in rows {
            events.push(row?);
        }
        Ok(events)
    }

    /// Teams registered for an event, in registration order
    pub fn get_registered_teams_for_event(&self, event_id: EventId) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.team_id, t.name, t.division, t.coach, t.manager, t.contact_email,
                    t.contact_phone, t.logo_url, t.wins, t.losses, t.created_at
             FROM teams t
             JOIN event_registrations r ON r.team_id = t.team_id
             WHERE r.event_id = ?
             ORDER BY r.registered_at, t.team_id",
        )?;

        let rows = stmt.query_map(params![event_id.as_i64()], |row| self.row_to_team(row))?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Register a team for an event.
    ///
    /// The capacity check, duplicate check, relation insert, and counter
    /// increment all happen inside one transaction, so the stored
    /// `registered_teams` counter always matches the registration rows.
    pub fn register_team_for_event(&mut self, event_id: EventId, team_id: TeamId) -> Result<()> {
        let tx = self.conn.transaction()?;

        let event = tx.query_row(
            "SELECT status, max_teams, registered_teams FROM events WHERE event_id = ?",
            params![event_id.as_i64()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, u32>(2)?,
                ))
            },
        );
        let (status, max_teams, registered_teams) = match event {
            Ok(v) => v,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(NhuError::EventNotFound {
                    id: event_id.as_i64(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let status: EventStatus = status.parse()?;
        if !status.accepts_registrations() {
            return Err(NhuError::RegistrationClosed {
                status: status.to_string(),
            });
        }

        let team_exists: i64 = tx.query_row(
            "SELECT COUNT(*) FROM teams WHERE team_id = ?",
            params![team_id.as_i64()],
            |row| row.get(0),
        )?;
        if team_exists == 0 {
            return Err(NhuError::TeamNotFound {
                id: team_id.as_i64(),
            });
        }

        let already_registered: i64 = tx.query_row(
            "SELECT COUNT(*) FROM event_registrations WHERE event_id = ? AND team_id = ?",
            params![event_id.as_i64(), team_id.as_i64()],
            |row| row.get(0),
        )?;
        if already_registered > 0 {
            return Err(NhuError::AlreadyRegistered);
        }

        if registered_teams >= max_teams {
            return Err(NhuError::EventFull { max_teams });
        }

        tx.execute(
            "INSERT INTO event_registrations (event_id, team_id, registered_at)
             VALUES (?, ?, ?)",
            params![event_id.as_i64(), team_id.as_i64(), now_ts()],
        )?;
        tx.execute(
            "UPDATE events SET registered_teams = registered_teams + 1 WHERE event_id = ?",
            params![event_id.as_i64()],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Move an event to a new lifecycle status
    pub fn update_event_status(&mut self, event_id: EventId, status: EventStatus) -> Result<()> {
        let rows_affected = self.conn.execute(
            "UPDATE events SET status = ? WHERE event_id = ?",
            params![status.to_string(), event_id.as_i64()],
        )?;

        if rows_affected == 0 {
            return Err(NhuError::EventNotFound {
                id: event_id.as_i64(),
            });
        }
        Ok(())
    }

    /// Helper to convert a database row to an Event
    pub(crate) fn row_to_event(&self, row: &Row) -> rusqlite::Result<Event> {
        let status: String = row.get(6)?;

        Ok(Event {
            event_id: EventId::new(row.get(0)?),
            title: row.get(1)?,
            description: row.get(2)?,
            location: row.get(3)?,
            start_time: row.get(4)?,
            end_time: row.get(5)?,
            status: text_column(6, &status)?,
            max_teams: row.get(7)?,
            registered_teams: row.get(8)?,
            image_url: row.get(9)?,
            created_at: row.get(10)?,
        })
    }
}
