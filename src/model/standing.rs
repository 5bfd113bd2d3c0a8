use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::model::Team;

/// A team's aggregated season record and its rank in the league table.
///
/// Carries its own copy of the [`Team`] record. `points` is stored as
/// reported, not derived from the win/draw counts.
#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    /// Rank in the table, 1-based and contiguous across a season.
    pub position: u32,
    pub team: Team,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    /// The last five results, most recent last.
    pub form: Vec<FormResult>,
}

/// The outcome of a single fixture from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
pub enum FormResult {
    #[strum(serialize = "W")]
    #[serde(rename = "W")]
    Win,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    Draw,
    #[strum(serialize = "L")]
    #[serde(rename = "L")]
    Loss,
}
