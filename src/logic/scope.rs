//! Standings scopes: which matches a standings table covers.

use crate::logic::standings::aggregate;
use crate::models::{DayId, Match, MatchId, TeamStanding, Tournament, TournamentError};
use serde::{Deserialize, Serialize};

/// A slice of the tournament to report standings for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingsScope {
    /// A single match.
    Match(MatchId),
    /// Every match played on one day.
    Day(DayId),
    /// Every match of every day.
    Overall,
}

/// Resolve a scope to the matches it covers, in day order then match order.
pub fn matches_in_scope(
    tournament: &Tournament,
    scope: StandingsScope,
) -> Result<Vec<&Match>, TournamentError> {
    match scope {
        StandingsScope::Match(match_id) => tournament
            .find_match(match_id)
            .map(|m| vec![m])
            .ok_or(TournamentError::MatchNotFound(match_id)),
        StandingsScope::Day(day_id) => tournament
            .day(day_id)
            .map(|d| d.matches.iter().collect())
            .ok_or(TournamentError::DayNotFound(day_id)),
        StandingsScope::Overall => Ok(tournament.matches().collect()),
    }
}

/// Ranked standings of the tournament's roster over the matches in `scope`.
pub fn tournament_standings(
    tournament: &Tournament,
    scope: StandingsScope,
) -> Result<Vec<TeamStanding>, TournamentError> {
    let matches = matches_in_scope(tournament, scope)?;
    Ok(aggregate(&tournament.teams, matches))
}
