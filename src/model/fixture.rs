use chrono::NaiveDateTime;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::model::Team;

/// A scheduled or completed match between two clubs.
///
/// Both sides are held by value. Scores are present exactly when the
/// fixture is [`FixtureStatus::Completed`].
#[derive(Debug, Clone, Serialize)]
pub struct Fixture {
    pub id: String,
    pub home: Team,
    pub away: Team,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub kickoff: NaiveDateTime,
    pub venue: String,
    pub status: FixtureStatus,
    /// Round of the season this fixture belongs to, 1-based.
    pub week: u32,
}

impl Fixture {
    /// Whether the given team plays in this fixture, on either side.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }

    /// The other side of the fixture, if the given team plays in it.
    pub fn opponent(&self, team_id: &str) -> Option<&Team> {
        if self.home.id == team_id {
            Some(&self.away)
        } else if self.away.id == team_id {
            Some(&self.home)
        } else {
            None
        }
    }
}

/// Lifecycle state of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    Upcoming,
    Live,
    Completed,
}
