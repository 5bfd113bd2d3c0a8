//! Ordering of the league table.
//!
//! The table is displayed in many orders (by rank, points, goals) but the
//! underlying standings never move; [`rank`] returns a freshly ordered
//! copy. Which column is selected and in which direction is caller-owned
//! state, modeled by [`TableSort`] and passed in explicitly.

use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::model::Standing;

/// The column a league table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    Position,
    Points,
    GoalDifference,
    GoalsFor,
}

impl SortKey {
    /// The direction a freshly selected column starts in.
    ///
    /// Best-first in domain terms: ascending for position, descending for
    /// the counting columns.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Position => SortDirection::Ascending,
            SortKey::Points | SortKey::GoalDifference | SortKey::GoalsFor => {
                SortDirection::Descending
            }
        }
    }

    fn value(self, standing: &Standing) -> i64 {
        match self {
            SortKey::Position => i64::from(standing.position),
            SortKey::Points => i64::from(standing.points),
            SortKey::GoalDifference => i64::from(standing.goal_difference),
            SortKey::GoalsFor => i64::from(standing.goals_for),
        }
    }
}

/// Ordering applied to the selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum SortDirection {
    #[strum(serialize = "asc")]
    Ascending,
    #[strum(serialize = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A table's current sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for TableSort {
    /// The official table order: position, ascending.
    fn default() -> Self {
        Self {
            key: SortKey::Position,
            direction: SortDirection::Ascending,
        }
    }
}

impl TableSort {
    /// The selection after a column header is clicked.
    ///
    /// Re-selecting the active column flips its direction; selecting a new
    /// column resets to that column's default direction.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: key.default_direction(),
            }
        }
    }
}

/// Order standings by a single numeric column.
///
/// The sort is stable, so standings with equal values keep their relative
/// input order. The input is left untouched; an empty slice yields an
/// empty table.
pub fn rank(standings: &[Standing], key: SortKey, direction: SortDirection) -> Vec<Standing> {
    let mut ranked = standings.to_vec();
    ranked.sort_by(|a, b| {
        let ordering = key.value(a).cmp(&key.value(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    debug!(count = ranked.len(), %key, %direction, "ranked standings");
    ranked
}

/// [`rank`] with the column and direction bundled as a [`TableSort`].
pub fn rank_with(standings: &[Standing], sort: TableSort) -> Vec<Standing> {
    rank(standings, sort.key, sort.direction)
}

/// The side currently topping the table.
pub fn leader(standings: &[Standing]) -> Option<&Standing> {
    standings.iter().min_by_key(|s| s.position)
}

/// The side with the fewest goals conceded.
pub fn best_defense(standings: &[Standing]) -> Option<&Standing> {
    standings.iter().min_by_key(|s| s.goals_against)
}

/// The side with the most wins.
pub fn most_wins(standings: &[Standing]) -> Option<&Standing> {
    standings.iter().max_by_key(|s| s.won)
}
