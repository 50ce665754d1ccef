//! TeamStanding: one row of a standings table (computed, never stored).

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Per-team rollup over a chosen set of matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub team_name: String,
    pub team_flag: Option<String>,
    pub total_kills: u32,
    pub total_placement_points: u32,
    pub total_points: u32,
    /// Matches finished in first place.
    pub wwcd: u32,
    /// 1-based position after sorting; 0 until ranked.
    pub rank: u32,
}

impl TeamStanding {
    /// Zeroed standing for a team, before any result is folded in.
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            team_flag: team.flag.clone(),
            ..Self::default()
        }
    }
}
