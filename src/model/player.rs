use serde::Serialize;

/// A squad member.
///
/// Players relate to their club through `team_id` only; the club does not
/// hold them back. Resolve a roster via
/// [`LeagueStore::players_of_team`](crate::LeagueStore::players_of_team).
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: String,
    pub team_id: String,
    pub name: String,
    /// Role label as displayed, e.g. "Goalkeeper" or "Forward".
    pub position: String,
    pub number: u8,
    pub nationality: String,
    pub age: u8,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
}
