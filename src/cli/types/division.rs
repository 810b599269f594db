//! Federation divisions and division categories.

use crate::error::NhuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Competitive divisions run by the federation.
///
/// # Examples
///
/// ```rust
/// use nhu_cli::Division;
///
/// let div: Division = "mens-premier".parse().unwrap();
/// assert_eq!(div.to_string(), "Men's Premier");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    MensPremier,
    WomensPremier,
    MensFirstDivision,
    WomensFirstDivision,
    JuniorBoys,
    JuniorGirls,
}

impl Division {
    /// All divisions, in display order.
    pub fn all() -> [Division; 6] {
        [
            Division::MensPremier,
            Division::WomensPremier,
            Division::MensFirstDivision,
            Division::WomensFirstDivision,
            Division::JuniorBoys,
            Division::JuniorGirls,
        ]
    }

    /// The broad category this division belongs to.
    pub fn category(&self) -> DivisionCategory {
        match self {
            Division::MensPremier | Division::MensFirstDivision => DivisionCategory::Men,
            Division::WomensPremier | Division::WomensFirstDivision => DivisionCategory::Women,
            Division::JuniorBoys | Division::JuniorGirls => DivisionCategory::Junior,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Division::MensPremier => "Men's Premier",
            Division::WomensPremier => "Women's Premier",
            Division::MensFirstDivision => "Men's First Division",
            Division::WomensFirstDivision => "Women's First Division",
            Division::JuniorBoys => "Junior Boys",
            Division::JuniorGirls => "Junior Girls",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Division {
    type Err = NhuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the display form and a dashed CLI-friendly form.
        let normalized = s
            .to_lowercase()
            .replace(&['\'', ' ', '_'][..], "-")
            .replace("--", "-");
        match normalized.as_str() {
            "men-s-premier" | "mens-premier" => Ok(Division::MensPremier),
            "women-s-premier" | "womens-premier" => Ok(Division::WomensPremier),
            "men-s-first-division" | "mens-first-division" | "mens-first" => {
                Ok(Division::MensFirstDivision)
            }
            "women-s-first-division" | "womens-first-division" | "womens-first" => {
                Ok(Division::WomensFirstDivision)
            }
            "junior-boys" => Ok(Division::JuniorBoys),
            "junior-girls" => Ok(Division::JuniorGirls),
            _ => Err(NhuError::InvalidDivision {
                division: s.to_string(),
            }),
        }
    }
}

/// Broad division grouping used by the team list tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DivisionCategory {
    Men,
    Women,
    Junior,
}

impl fmt::Display for DivisionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DivisionCategory::Men => "Men",
            DivisionCategory::Women => "Women",
            DivisionCategory::Junior => "Junior",
        };
        write!(f, "{}", s)
    }
}
