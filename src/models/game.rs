//! Match (one game of a match day) and MatchResult (one team's outcome in it).

use crate::logic::scoring::{kill_points, placement_points, total_points};
use crate::models::day::DayId;
use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// The raw input for one team in one match, as typed in by the organizer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub team_id: TeamId,
    /// 1 = winner; 0 = not yet recorded.
    #[serde(default)]
    pub placement: u32,
    #[serde(default)]
    pub kills: u32,
}

/// One team's outcome in one match. Points are derived from placement and kills
/// and are recomputed whenever a result is built or deserialized.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "ResultEntry")]
pub struct MatchResult {
    pub team_id: TeamId,
    pub placement: u32,
    pub kills: u32,
    pub placement_points: u32,
    pub kill_points: u32,
    pub total_points: u32,
}

impl MatchResult {
    pub fn new(team_id: TeamId, placement: u32, kills: u32) -> Self {
        let placement_points = placement_points(i64::from(placement));
        let kill_points = kill_points(kills);
        Self {
            team_id,
            placement,
            kills,
            placement_points,
            kill_points,
            total_points: total_points(placement_points, kill_points),
        }
    }

    /// True if this team won the match (winner winner chicken dinner).
    pub fn is_wwcd(&self) -> bool {
        self.placement == 1
    }

    /// The inputs this result was built from.
    pub fn entry(&self) -> ResultEntry {
        ResultEntry {
            team_id: self.team_id,
            placement: self.placement,
            kills: self.kills,
        }
    }
}

impl From<ResultEntry> for MatchResult {
    fn from(entry: ResultEntry) -> Self {
        Self::new(entry.team_id, entry.placement, entry.kills)
    }
}

/// A single game. Holds at most one result per team; empty until results are entered.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub name: String,
    pub day_id: DayId,
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub results: Vec<MatchResult>,
}

impl Match {
    pub fn new(name: impl Into<String>, day_id: DayId, tournament_id: TournamentId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            day_id,
            tournament_id,
            results: Vec::new(),
        }
    }

    /// Result recorded for a team in this match, if any.
    pub fn result_for(&self, team_id: TeamId) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.team_id == team_id)
    }

    /// Insert or replace the result for `result.team_id`, keeping the existing position.
    pub fn upsert_result(&mut self, result: MatchResult) {
        match self.results.iter_mut().find(|r| r.team_id == result.team_id) {
            Some(existing) => *existing = result,
            None => self.results.push(result),
        }
    }

    /// Drop the result for a team. Returns true if one was present.
    pub fn remove_result(&mut self, team_id: TeamId) -> bool {
        let before = self.results.len();
        self.results.retain(|r| r.team_id != team_id);
        self.results.len() != before
    }

    /// The team that finished first, if a winner has been recorded.
    pub fn winner(&self) -> Option<TeamId> {
        self.results.iter().find(|r| r.is_wwcd()).map(|r| r.team_id)
    }
}
