//! Result entry: record placements and kills for the teams in a match.

use crate::models::{
    MatchId, MatchResult, ResultEntry, TeamId, Tournament, TournamentError,
};
use std::collections::HashSet;

/// Check one entry against the roster: the team must be registered and the
/// placement must be 0 (unrecorded) or at most the number of teams.
fn validate_entry(tournament: &Tournament, entry: &ResultEntry) -> Result<(), TournamentError> {
    if tournament.team(entry.team_id).is_none() {
        return Err(TournamentError::TeamNotFound(entry.team_id));
    }
    let max = u32::try_from(tournament.teams.len()).unwrap_or(u32::MAX);
    if entry.placement > max {
        return Err(TournamentError::PlacementOutOfRange {
            placement: entry.placement,
            max,
        });
    }
    Ok(())
}

/// Record (or overwrite) one team's placement and kills in a match.
/// Points are recomputed from the inputs.
pub fn set_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    team_id: TeamId,
    placement: u32,
    kills: u32,
) -> Result<MatchResult, TournamentError> {
    let entry = ResultEntry {
        team_id,
        placement,
        kills,
    };
    validate_entry(tournament, &entry)?;
    let result = MatchResult::from(entry);
    tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?
        .upsert_result(result);
    Ok(result)
}

/// Replace all results of a match with `entries` (delete all, then insert all).
///
/// Either every entry is valid and the match ends up with exactly these results,
/// or an error is returned and the match is left untouched.
pub fn replace_match_results(
    tournament: &mut Tournament,
    match_id: MatchId,
    entries: &[ResultEntry],
) -> Result<(), TournamentError> {
    let mut seen: HashSet<TeamId> = HashSet::new();
    for entry in entries {
        validate_entry(tournament, entry)?;
        if !seen.insert(entry.team_id) {
            return Err(TournamentError::DuplicateResult(entry.team_id));
        }
    }
    let tournament_id = tournament.id;
    let m = tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.results = entries.iter().copied().map(MatchResult::from).collect();
    log::debug!(
        "tournament {}: match {} now has {} result(s)",
        tournament_id,
        match_id,
        m.results.len()
    );
    Ok(())
}

/// Remove every result of a match.
pub fn clear_match_results(tournament: &mut Tournament, match_id: MatchId) -> Result<(), TournamentError> {
    tournament
        .find_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?
        .results
        .clear();
    Ok(())
}
