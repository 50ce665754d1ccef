//! Day: the matches played on one date.

use crate::models::game::{Match, MatchId};
use crate::models::tournament::TournamentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match day.
pub type DayId = Uuid;

/// A match day. Match order is for display only; standings ignore it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub id: DayId,
    pub name: String,
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Day {
    pub fn new(name: impl Into<String>, tournament_id: TournamentId, date: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tournament_id,
            date,
            matches: Vec::new(),
        }
    }

    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn find_match_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == match_id)
    }
}
