//! Sample federation data for first runs.
//!
//! Mirrors the demo content the app ships with: a slate of teams across
//! divisions, a few events with registrations, the match card list, and
//! the demo login.

use super::{models::*, schema::FederationDatabase};
use crate::cli::types::{Division, EventStatus, Position, TeamId};
use crate::error::Result;
use chrono::{Duration, Utc};
use rusqlite::params;

/// What `seed_sample_data` inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub teams: usize,
    pub players: usize,
    pub events: usize,
    pub matches: usize,
    pub users: usize,
}

impl FederationDatabase {
    /// Whether the database already holds federation data.
    pub fn has_data(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT (SELECT COUNT(*) FROM teams) + (SELECT COUNT(*) FROM users)",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Populate the database with the demo fixtures.
    ///
    /// Goes through the regular storage operations, so counters and
    /// standings end up consistent with the registrations and results
    /// they derive from.
    pub fn seed_sample_data(&mut self) -> Result<SeedSummary> {
        let now = Utc::now();

        let warriors = self.seed_team(
            "Windhoek Warriors",
            Division::MensPremier,
            "Johannes Shikongo",
            Some("Maria Nakale"),
            "warriors@nhu.org.na",
            "+264 61 234 567",
        )?;
        let nationals = self.seed_team(
            "Namibia Nationals",
            Division::MensPremier,
            "Petrus Amukoto",
            None,
            "nationals@nhu.org.na",
            "+264 61 765 432",
        )?;
        let strikers = self.seed_team(
            "Coastal Strikers",
            Division::WomensPremier,
            "Helena Ndjavera",
            Some("Anna Shilongo"),
            "strikers@nhu.org.na",
            "+264 64 221 100",
        )?;
        let foxes = self.seed_team(
            "Desert Foxes",
            Division::JuniorGirls,
            "Sara Garises",
            None,
            "foxes@nhu.org.na",
            "+264 61 998 877",
        )?;
        let capital = self.seed_team(
            "Capital City HC",
            Division::MensPremier,
            "David Tjongarero",
            None,
            "capitalcity@nhu.org.na",
            "+264 61 445 566",
        )?;
        let stars = self.seed_team(
            "Swakopmund Stars",
            Division::MensPremier,
            "Frans Uirab",
            Some("Otto Kandjii"),
            "stars@nhu.org.na",
            "+264 64 330 909",
        )?;
        let teams = 6;

        let roster = [
            ("Tangeni", "Amupolo", 1, Position::Goalkeeper),
            ("Joseph", "Kaujeua", 4, Position::Defender),
            ("Martin", "Hangula", 7, Position::Midfielder),
            ("Paulus", "Iipinge", 9, Position::Forward),
            ("Simon", "Nuujoma", 11, Position::Forward),
            ("Erastus", "Shalongo", 14, Position::Utility),
        ];
        for (first, last, jersey, position) in roster {
            self.save_player(&NewPlayer {
                team_id: warriors,
                first_name: first.to_string(),
                last_name: last.to_string(),
                date_of_birth: None,
                jersey_number: jersey,
                position,
                nationality: Some("Namibian".to_string()),
                height_cm: None,
                weight_kg: None,
                email: None,
                phone: None,
                photo_url: None,
            })?;
        }
        let strikers_roster = [
            ("Ndapewa", "Hamutenya", 1, Position::Goalkeeper),
            ("Selma", "Iyambo", 10, Position::Forward),
        ];
        for (first, last, jersey, position) in strikers_roster {
            self.save_player(&NewPlayer {
                team_id: strikers,
                first_name: first.to_string(),
                last_name: last.to_string(),
                date_of_birth: None,
                jersey_number: jersey,
                position,
                nationality: Some("Namibian".to_string()),
                height_cm: None,
                weight_kg: None,
                email: None,
                phone: None,
                photo_url: None,
            })?;
        }
        let players = roster.len() + strikers_roster.len();

        let championship = self.save_event(&NewEvent {
            title: "Annual Championship Tournament".to_string(),
            description: "The federation's flagship knockout tournament, open to all senior divisions.".to_string(),
            location: "Windhoek Stadium".to_string(),
            start_time: (now + Duration::days(14)).timestamp(),
            end_time: (now + Duration::days(16)).timestamp(),
            max_teams: 12,
            image_url: None,
        })?;
        self.register_team_for_event(championship, warriors)?;
        self.register_team_for_event(championship, nationals)?;

        self.save_event(&NewEvent {
            title: "Junior Development Camp".to_string(),
            description: "Skills clinic for junior squads with national team coaching staff.".to_string(),
            location: "Sports Complex".to_string(),
            start_time: (now + Duration::days(7)).timestamp(),
            end_time: (now + Duration::days(7) + Duration::hours(6)).timestamp(),
            max_teams: 8,
            image_url: None,
        })?;

        let finals = self.save_event(&NewEvent {
            title: "Women's League Finals".to_string(),
            description: "Deciding round of the women's premier league season.".to_string(),
            location: "Swakopmund Sports Complex".to_string(),
            start_time: (now + Duration::days(21)).timestamp(),
            end_time: (now + Duration::days(21) + Duration::hours(5)).timestamp(),
            max_teams: 4,
            image_url: None,
        })?;
        self.register_team_for_event(finals, strikers)?;

        let friendly = self.save_event(&NewEvent {
            title: "Pre-Season Friendly Cup".to_string(),
            description: "Warm-up fixtures ahead of the league season.".to_string(),
            location: "Central Field".to_string(),
            start_time: (now - Duration::days(30)).timestamp(),
            end_time: (now - Duration::days(28)).timestamp(),
            max_teams: 8,
            image_url: None,
        })?;
        self.register_team_for_event(friendly, warriors)?;
        self.register_team_for_event(friendly, capital)?;
        self.update_event_status(friendly, EventStatus::Completed)?;
        let events = 4;

        // Upcoming fixtures
        self.save_match(&NewMatch {
            home_team_id: warriors,
            away_team_id: nationals,
            scheduled_at: (now + Duration::days(3)).timestamp(),
            location: "Windhoek Stadium".to_string(),
        })?;
        self.save_match(&NewMatch {
            home_team_id: strikers,
            away_team_id: foxes,
            scheduled_at: (now + Duration::days(5)).timestamp(),
            location: "Sports Complex".to_string(),
        })?;

        // A fixture currently in play
        let live = self.save_match(&NewMatch {
            home_team_id: capital,
            away_team_id: stars,
            scheduled_at: now.timestamp(),
            location: "Central Field".to_string(),
        })?;
        self.set_match_live(live, "2nd Quarter")?;
        self.conn.execute(
            "UPDATE matches SET home_score = 2, away_score = 1 WHERE match_id = ?",
            params![live.as_i64()],
        )?;

        // Past results, recorded so standings line up with the scores
        let past = self.save_match(&NewMatch {
            home_team_id: warriors,
            away_team_id: nationals,
            scheduled_at: (now - Duration::days(10)).timestamp(),
            location: "Windhoek Stadium".to_string(),
        })?;
        self.record_match_result(
            past,
            3,
            1,
            Some(
                "An intense match that saw the Warriors secure a decisive victory against the \
                 Nationals with solid defensive play and clinical finishing.",
            ),
        )?;
        let past = self.save_match(&NewMatch {
            home_team_id: strikers,
            away_team_id: foxes,
            scheduled_at: (now - Duration::days(15)).timestamp(),
            location: "Sports Complex".to_string(),
        })?;
        self.record_match_result(
            past,
            4,
            0,
            Some(
                "The Coastal Strikers dominated with their superior speed and technical skills, \
                 claiming a well-deserved victory.",
            ),
        )?;
        let matches = 5;

        // Demo login, kept if an earlier seed already created it
        let users = if self.get_user_by_username("user123")?.is_none() {
            self.create_user(&NewUser {
                username: "user123".to_string(),
                password: "12345".to_string(),
                full_name: "Coach Smith".to_string(),
                email: "coach.smith@nhu.org.na".to_string(),
                phone: None,
                role: "Team Coach".to_string(),
            })?;
            1
        } else {
            0
        };

        Ok(SeedSummary {
            teams,
            players,
            events,
            matches,
            users,
        })
    }

    fn seed_team(
        &mut self,
        name: &str,
        division: Division,
        coach: &str,
        manager: Option<&str>,
        contact_email: &str,
        contact_phone: &str,
    ) -> Result<TeamId> {
        self.save_team(&NewTeam {
            name: name.to_string(),
            division,
            coach: coach.to_string(),
            manager: manager.map(|m| m.to_string()),
            contact_email: contact_email.to_string(),
            contact_phone: contact_phone.to_string(),
            logo_url: None,
        })
    }
}
