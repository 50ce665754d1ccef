//! Standings aggregation: fold match results into a ranked table.

use crate::models::{Match, Team, TeamId, TeamStanding};
use std::collections::HashMap;

/// Aggregate `matches` into ranked standings for every team in `teams`.
///
/// 1. Start every rostered team at zero (name and flag copied from the roster).
/// 2. Fold in each result; results for teams not in the roster are ignored.
/// 3. Stable sort by total points, descending. Ties keep roster order; there is
///    no secondary tie-break on kills or WWCD.
/// 4. Rank 1..=n by position, so tied teams still get distinct ranks.
///
/// The output always has one entry per team, in rank order. Totals saturate at
/// `u32::MAX` rather than overflow.
pub fn aggregate<'a, I>(teams: &[Team], matches: I) -> Vec<TeamStanding>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut standings: Vec<TeamStanding> = teams.iter().map(TeamStanding::for_team).collect();
    let index: HashMap<TeamId, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| (s.team_id, i))
        .collect();

    for result in matches.into_iter().flat_map(|m| m.results.iter()) {
        let Some(&i) = index.get(&result.team_id) else {
            continue;
        };
        let s = &mut standings[i];
        s.total_kills = s.total_kills.saturating_add(result.kills);
        s.total_placement_points = s.total_placement_points.saturating_add(result.placement_points);
        s.total_points = s.total_points.saturating_add(result.total_points);
        if result.is_wwcd() {
            s.wwcd = s.wwcd.saturating_add(1);
        }
    }

    // sort_by is stable
    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (i, s) in standings.iter_mut().enumerate() {
        s.rank = u32::try_from(i + 1).unwrap_or(u32::MAX);
    }
    standings
}
