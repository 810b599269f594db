//! Status enums for events and match fixtures.

use crate::error::NhuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a federation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    /// Whether teams may still register for an event in this status.
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, EventStatus::Upcoming | EventStatus::Ongoing)
    }

    /// Whether this status belongs on the "past" tab of the event list.
    pub fn is_past(&self) -> bool {
        matches!(self, EventStatus::Completed | EventStatus::Cancelled)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for EventStatus {
    type Err = NhuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" | "canceled" => Ok(EventStatus::Cancelled),
            _ => Err(NhuError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// Lifecycle status of a match fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MatchStatus {
    type Err = NhuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(MatchStatus::Upcoming),
            "live" => Ok(MatchStatus::Live),
            "completed" | "results" => Ok(MatchStatus::Completed),
            _ => Err(NhuError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}
