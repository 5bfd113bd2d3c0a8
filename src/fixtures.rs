//! Selection, grouping, and per-team classification of fixtures.
//!
//! All functions take a fixture slice and return derived copies; nothing
//! here mutates or caches. Week buckets come back unordered; display
//! order is a separate policy applied via [`weeks_newest_first`].

use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::{debug, warn};

use crate::error::{LeagueError, Result};
use crate::model::{Fixture, FixtureStatus, FormResult, Team};

/// Tab-style selection over fixture lifecycle states.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Completed,
    Live,
}

impl StatusFilter {
    /// Parse a filter from an untrusted query value.
    ///
    /// Unknown values select [`StatusFilter::All`], a compatibility
    /// default for stray links rather than a validated input path.
    /// Trusted callers construct the variant directly.
    pub fn from_query(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!(value, "unknown status filter, showing all fixtures");
            Self::All
        })
    }

    /// Whether a fixture passes this filter.
    pub fn accepts(self, fixture: &Fixture) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => fixture.status == FixtureStatus::Upcoming,
            StatusFilter::Completed => fixture.status == FixtureStatus::Completed,
            StatusFilter::Live => fixture.status == FixtureStatus::Live,
        }
    }
}

/// Select fixtures by lifecycle status, preserving input order.
pub fn filter_by_status(fixtures: &[Fixture], filter: StatusFilter) -> Vec<Fixture> {
    let selected = fixtures
        .iter()
        .filter(|f| filter.accepts(f))
        .cloned()
        .collect_vec();
    debug!(count = selected.len(), %filter, "filtered fixtures");
    selected
}

/// Group fixtures by week number.
///
/// Fixtures keep their relative input order within each bucket. The
/// bucket keys carry no display order of their own; pair with
/// [`weeks_newest_first`] to walk them schedule-style.
pub fn group_by_week(fixtures: &[Fixture]) -> HashMap<u32, Vec<Fixture>> {
    fixtures
        .iter()
        .cloned()
        .map(|f| (f.week, f))
        .into_group_map()
}

/// Week keys ordered most recent first, the way schedules are displayed.
pub fn weeks_newest_first(by_week: &HashMap<u32, Vec<Fixture>>) -> Vec<u32> {
    by_week
        .keys()
        .copied()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect()
}

/// Every fixture the team plays in, home or away, in input order.
pub fn fixtures_of_team(fixtures: &[Fixture], team_id: &str) -> Vec<Fixture> {
    fixtures
        .iter()
        .filter(|f| f.involves(team_id))
        .cloned()
        .collect()
}

/// The first `limit` completed fixtures, in input order.
pub fn recent_results(fixtures: &[Fixture], limit: usize) -> Vec<Fixture> {
    fixtures
        .iter()
        .filter(|f| f.status == FixtureStatus::Completed)
        .take(limit)
        .cloned()
        .collect()
}

/// The first `limit` upcoming fixtures, in input order.
pub fn next_fixtures(fixtures: &[Fixture], limit: usize) -> Vec<Fixture> {
    fixtures
        .iter()
        .filter(|f| f.status == FixtureStatus::Upcoming)
        .take(limit)
        .cloned()
        .collect()
}

/// A completed fixture seen from one team's side.
#[derive(Debug, Clone, Serialize)]
pub struct TeamPerspective {
    pub opponent: Team,
    pub is_home: bool,
    pub team_score: u8,
    pub opponent_score: u8,
    pub result: FormResult,
}

/// Classify a completed fixture from the given team's point of view.
///
/// The team must be one of the two sides and the fixture must carry a
/// final score. Both are preconditions: violations come back as errors,
/// never as a silently defaulted result.
pub fn team_perspective(team_id: &str, fixture: &Fixture) -> Result<TeamPerspective> {
    let is_home = if fixture.home.id == team_id {
        true
    } else if fixture.away.id == team_id {
        false
    } else {
        return Err(LeagueError::TeamNotInFixture {
            team_id: team_id.to_owned(),
            fixture_id: fixture.id.clone(),
        });
    };

    let (Some(home_score), Some(away_score)) = (fixture.home_score, fixture.away_score) else {
        return Err(LeagueError::FixtureNotScored {
            fixture_id: fixture.id.clone(),
            status: fixture.status,
        });
    };

    let (team_score, opponent_score) = if is_home {
        (home_score, away_score)
    } else {
        (away_score, home_score)
    };
    let result = match team_score.cmp(&opponent_score) {
        Ordering::Greater => FormResult::Win,
        Ordering::Equal => FormResult::Draw,
        Ordering::Less => FormResult::Loss,
    };
    let opponent = if is_home {
        fixture.away.clone()
    } else {
        fixture.home.clone()
    };

    Ok(TeamPerspective {
        opponent,
        is_home,
        team_score,
        opponent_score,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league;

    #[test]
    fn completed_filter_keeps_only_completed_fixtures() {
        let completed = filter_by_status(league().fixtures(), StatusFilter::Completed);
        assert_eq!(completed.len(), 4);
        assert!(completed
            .iter()
            .all(|f| f.status == FixtureStatus::Completed));
    }

    #[test]
    fn all_filter_is_the_identity() {
        let fixtures = league().fixtures();
        let all = filter_by_status(fixtures, StatusFilter::All);
        let ids: Vec<&str> = all.iter().map(|f| f.id.as_str()).collect();
        let expected: Vec<&str> = fixtures.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn live_filter_is_empty_between_matchdays() {
        assert!(filter_by_status(league().fixtures(), StatusFilter::Live).is_empty());
    }

    #[test]
    fn query_parsing_falls_back_to_all() {
        assert_eq!(StatusFilter::from_query("upcoming"), StatusFilter::Upcoming);
        assert_eq!(StatusFilter::from_query("completed"), StatusFilter::Completed);
        assert_eq!(StatusFilter::from_query("finished"), StatusFilter::All);
        assert_eq!(StatusFilter::from_query(""), StatusFilter::All);
    }

    #[test]
    fn week_buckets_hold_their_own_fixtures_in_input_order() {
        let by_week = group_by_week(league().fixtures());
        assert_eq!(by_week.len(), 2);

        let week_19: Vec<&str> = by_week[&19].iter().map(|f| f.id.as_str()).collect();
        assert_eq!(week_19, vec!["1", "2", "3", "4"]);
        let week_18: Vec<&str> = by_week[&18].iter().map(|f| f.id.as_str()).collect();
        assert_eq!(week_18, vec!["5", "6", "7", "8"]);

        assert!(by_week[&18].iter().all(|f| f.week == 18));
        assert!(by_week[&19].iter().all(|f| f.week == 19));
    }

    #[test]
    fn week_display_order_is_newest_first() {
        let by_week = group_by_week(league().fixtures());
        assert_eq!(weeks_newest_first(&by_week), vec![19, 18]);
    }

    #[test]
    fn grouping_nothing_yields_no_buckets() {
        assert!(group_by_week(&[]).is_empty());
    }

    #[test]
    fn team_selection_spans_both_sides() {
        let fixtures = league().fixtures();
        let inter = fixtures_of_team(fixtures, "1");
        let ids: Vec<&str> = inter.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);

        assert_eq!(recent_results(&inter, 5).len(), 1);
        assert_eq!(next_fixtures(fixtures, 3).len(), 3);
    }

    #[test]
    fn home_win_classifies_as_w() {
        let store = league();
        let fixture = store
            .fixtures()
            .iter()
            .find(|f| f.id == "5")
            .expect("fixture 5 is embedded");

        let view = team_perspective("1", fixture).unwrap();
        assert!(view.is_home);
        assert_eq!(view.team_score, 3);
        assert_eq!(view.opponent_score, 1);
        assert_eq!(view.result, FormResult::Win);
        assert_eq!(view.opponent.name, "FCS Nacional");
    }

    #[test]
    fn away_side_sees_mirrored_scores() {
        let store = league();
        let fixture = store
            .fixtures()
            .iter()
            .find(|f| f.id == "8")
            .expect("fixture 8 is embedded");

        let view = team_perspective("7", fixture).unwrap();
        assert!(!view.is_home);
        assert_eq!(view.team_score, 2);
        assert_eq!(view.opponent_score, 0);
        assert_eq!(view.result, FormResult::Win);

        let home_view = team_perspective("6", fixture).unwrap();
        assert_eq!(home_view.result, FormResult::Loss);
    }

    #[test]
    fn drawn_fixture_classifies_as_d_for_both_sides() {
        let store = league();
        let fixture = store
            .fixtures()
            .iter()
            .find(|f| f.id == "6")
            .expect("fixture 6 is embedded");

        for team_id in ["2", "3"] {
            let view = team_perspective(team_id, fixture).unwrap();
            assert_eq!(view.result, FormResult::Draw);
            assert_eq!(view.team_score, 2);
        }
    }

    #[test]
    fn unscored_fixture_is_a_precondition_violation() {
        let store = league();
        let upcoming = store
            .fixtures()
            .iter()
            .find(|f| f.status == FixtureStatus::Upcoming)
            .expect("season has upcoming fixtures");

        let err = team_perspective(&upcoming.home.id, upcoming).unwrap_err();
        assert!(matches!(err, LeagueError::FixtureNotScored { .. }));
    }

    #[test]
    fn outsider_team_is_rejected() {
        let store = league();
        let fixture = store
            .fixtures()
            .iter()
            .find(|f| f.id == "5")
            .expect("fixture 5 is embedded");

        let err = team_perspective("2", fixture).unwrap_err();
        assert!(matches!(err, LeagueError::TeamNotInFixture { .. }));
    }

    #[test]
    fn opponent_lookup_covers_upcoming_fixtures() {
        let store = league();
        let fixture = store
            .fixtures()
            .iter()
            .find(|f| f.id == "1")
            .expect("fixture 1 is embedded");

        assert_eq!(fixture.opponent("1").unwrap().name, "SV Robinhood");
        assert_eq!(fixture.opponent("2").unwrap().name, "Inter Moengotapoe");
        assert!(fixture.opponent("3").is_none());
        assert!(fixture.involves("1") && !fixture.involves("3"));
    }
}
