//! Field hockey position types and utilities.

use crate::error::NhuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player positions recognized by the federation.
///
/// Covers the four on-field roles plus the utility designation for players
/// registered without a fixed role.
///
/// # Examples
///
/// ```rust
/// use nhu_cli::Position;
///
/// let gk = Position::Goalkeeper;
/// assert_eq!(gk.to_string(), "Goalkeeper");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Utility,
}

impl Position {
    /// All positions, in the order they appear in roster filters.
    pub fn all() -> [Position; 5] {
        [
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Forward,
            Position::Utility,
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
            Position::Utility => "Utility Player",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = NhuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "goalkeeper" | "gk" | "keeper" => Ok(Position::Goalkeeper),
            "defender" | "def" => Ok(Position::Defender),
            "midfielder" | "mid" => Ok(Position::Midfielder),
            "forward" | "fwd" | "striker" => Ok(Position::Forward),
            "utility" | "utility player" | "util" => Ok(Position::Utility),
            _ => Err(NhuError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::Goalkeeper.to_string(), "Goalkeeper");
        assert_eq!(Position::Defender.to_string(), "Defender");
        assert_eq!(Position::Midfielder.to_string(), "Midfielder");
        assert_eq!(Position::Forward.to_string(), "Forward");
        assert_eq!(Position::Utility.to_string(), "Utility Player");
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!("goalkeeper".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("GK".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("Defender".parse::<Position>().unwrap(), Position::Defender);
        assert_eq!("mid".parse::<Position>().unwrap(), Position::Midfielder);
        assert_eq!("striker".parse::<Position>().unwrap(), Position::Forward);
        assert_eq!("Utility Player".parse::<Position>().unwrap(), Position::Utility);
        assert!("libero".parse::<Position>().is_err());
    }
}
