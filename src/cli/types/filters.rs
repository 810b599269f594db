//! Filter and sort types for CLI commands.

use std::fmt;

/// Sort key for the player roster list.
///
/// Matches the sort options offered on the roster screen: full name,
/// jersey number, or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerSortKey {
    /// Alphabetical by "First Last"
    Name,
    /// Numeric by jersey number
    Jersey,
    /// Alphabetical by position label
    Position,
}

impl fmt::Display for PlayerSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerSortKey::Name => "name",
            PlayerSortKey::Jersey => "jersey",
            PlayerSortKey::Position => "position",
        };
        write!(f, "{}", s)
    }
}

/// Sort direction shared by list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        };
        write!(f, "{}", s)
    }
}

/// Tabs on the event list: upcoming, past, or the selected team's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EventTab {
    /// Events that are upcoming or currently ongoing
    Upcoming,
    /// Events that have completed or been cancelled
    Past,
    /// Events the selected team is registered for
    Mine,
}

impl fmt::Display for EventTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventTab::Upcoming => "upcoming",
            EventTab::Past => "past",
            EventTab::Mine => "mine",
        };
        write!(f, "{}", s)
    }
}
