use crate::model::FixtureStatus;

/// All errors that can occur when working with league data.
///
/// Missing slugs and ids are not errors: store lookups report absence as
/// `None`. The variants here are precondition violations and data
/// consistency failures, which callers are expected to treat as defects.
#[derive(thiserror::Error, Debug)]
pub enum LeagueError {
    /// A result was requested for a fixture without a final score.
    #[error("fixture {fixture_id} has no final score (status {status})")]
    FixtureNotScored {
        fixture_id: String,
        status: FixtureStatus,
    },

    /// The team is neither the home nor the away side of the fixture.
    #[error("team {team_id} did not take part in fixture {fixture_id}")]
    TeamNotInFixture {
        team_id: String,
        fixture_id: String,
    },

    /// The season data failed a consistency check.
    #[error("inconsistent season data: {0}")]
    InconsistentData(String),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
