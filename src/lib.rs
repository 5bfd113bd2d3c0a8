//! Suriname Major League season data and the transformations its display
//! layers are built on.
//!
//! Three pieces make up the crate:
//!
//! - [`LeagueStore`], a read-only catalog of teams, standings, fixtures,
//!   rosters, news, and merchandise, with slug/id lookups that report
//!   absence as `None`. [`league`] returns the embedded 2024 season.
//! - [`table`], stable ranking of the standings by a selectable column,
//!   with the sort selection modeled as caller-owned state.
//! - [`fixtures`], status filtering, week grouping, and per-team result
//!   classification of fixtures.
//!
//! # Examples
//!
//! ```
//! use sml_league::fixtures::{filter_by_status, StatusFilter};
//! use sml_league::table::{rank, SortDirection, SortKey};
//!
//! let store = sml_league::league();
//!
//! let table = rank(store.standings(), SortKey::Points, SortDirection::Descending);
//! assert_eq!(table[0].team.name, "Inter Moengotapoe");
//!
//! let completed = filter_by_status(store.fixtures(), StatusFilter::Completed);
//! assert!(completed.iter().all(|f| f.home_score.is_some()));
//! ```

pub use error::{LeagueError, Result};
pub use store::{league, LeagueStore};

pub mod error;
pub mod fixtures;
pub mod model;
mod season;
pub mod store;
pub mod table;
