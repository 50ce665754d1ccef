//! Tournament: the root aggregate holding the team roster and the match days.

use crate::models::day::{Day, DayId};
use crate::models::game::{Match, MatchId};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A name (tournament, team, day or match) was empty after trimming.
    EmptyName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    TeamNotFound(TeamId),
    DayNotFound(DayId),
    MatchNotFound(MatchId),
    /// Placement is larger than the number of registered teams.
    PlacementOutOfRange { placement: u32, max: u32 },
    /// The same team appears more than once in one batch of results.
    DuplicateResult(TeamId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::DayNotFound(_) => write!(f, "Day not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::PlacementOutOfRange { placement, max } => {
                write!(f, "Placement {} is out of range (0 to {})", placement, max)
            }
            TournamentError::DuplicateResult(_) => {
                write!(f, "A team can only have one result per match")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: roster, days and their matches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Match days in display order.
    #[serde(default)]
    pub days: Vec<Day>,
    /// Registered teams; this order is the tie order for standings.
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Trim a user-supplied name, rejecting blanks.
fn clean_name(name: &str) -> Result<String, TournamentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Treat blank optional text as absent.
fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Tournament {
    /// Create an empty tournament (no teams, no days).
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            created_at: Utc::now(),
            days: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Like `new`, but validates user input: the name must be non-blank.
    pub fn create(name: &str, description: Option<String>) -> Result<Self, TournamentError> {
        Ok(Self::new(clean_name(name)?, clean_optional(description)))
    }

    /// Create a tournament with an initial roster.
    pub fn with_teams(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::new(name, None)
        }
    }

    pub fn update_details(&mut self, name: &str, description: Option<String>) -> Result<(), TournamentError> {
        self.name = clean_name(name)?;
        self.description = clean_optional(description);
        Ok(())
    }

    // ---- Teams ----

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    fn name_taken(&self, name: &str, except: Option<TeamId>) -> bool {
        self.teams
            .iter()
            .filter(|t| Some(t.id) != except)
            .any(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Register a team. Names must be unique (case-insensitive).
    pub fn add_team(
        &mut self,
        name: &str,
        flag: Option<String>,
        logo: Option<String>,
    ) -> Result<TeamId, TournamentError> {
        let name = clean_name(name)?;
        if self.name_taken(&name, None) {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team {
            flag: clean_optional(flag),
            logo: clean_optional(logo),
            ..Team::new(name)
        };
        let id = team.id;
        log::debug!("tournament {}: added team {} ({})", self.id, team.name, id);
        self.teams.push(team);
        Ok(id)
    }

    /// Replace a team's display data. The id and roster position are kept.
    pub fn update_team(
        &mut self,
        team_id: TeamId,
        name: &str,
        flag: Option<String>,
        logo: Option<String>,
    ) -> Result<(), TournamentError> {
        let name = clean_name(name)?;
        if self.team(team_id).is_none() {
            return Err(TournamentError::TeamNotFound(team_id));
        }
        if self.name_taken(&name, Some(team_id)) {
            return Err(TournamentError::DuplicateTeamName);
        }
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) {
            team.name = name;
            team.flag = clean_optional(flag);
            team.logo = clean_optional(logo);
        }
        Ok(())
    }

    /// Remove a team from the roster along with all of its match results.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        self.teams.remove(idx);
        let mut dropped = 0;
        for m in self.days.iter_mut().flat_map(|d| d.matches.iter_mut()) {
            if m.remove_result(team_id) {
                dropped += 1;
            }
        }
        log::debug!(
            "tournament {}: removed team {} and {} result(s)",
            self.id,
            team_id,
            dropped
        );
        Ok(())
    }

    // ---- Days ----

    pub fn day(&self, day_id: DayId) -> Option<&Day> {
        self.days.iter().find(|d| d.id == day_id)
    }

    pub fn add_day(&mut self, name: &str, date: Option<NaiveDate>) -> Result<DayId, TournamentError> {
        let day = Day::new(clean_name(name)?, self.id, date);
        let id = day.id;
        self.days.push(day);
        Ok(id)
    }

    pub fn rename_day(
        &mut self,
        day_id: DayId,
        name: &str,
        date: Option<NaiveDate>,
    ) -> Result<(), TournamentError> {
        let name = clean_name(name)?;
        let day = self
            .days
            .iter_mut()
            .find(|d| d.id == day_id)
            .ok_or(TournamentError::DayNotFound(day_id))?;
        day.name = name;
        day.date = date;
        Ok(())
    }

    /// Remove a day and every match scheduled on it.
    pub fn remove_day(&mut self, day_id: DayId) -> Result<(), TournamentError> {
        let idx = self
            .days
            .iter()
            .position(|d| d.id == day_id)
            .ok_or(TournamentError::DayNotFound(day_id))?;
        let day = self.days.remove(idx);
        log::debug!(
            "tournament {}: removed day {} with {} match(es)",
            self.id,
            day.id,
            day.matches.len()
        );
        Ok(())
    }

    // ---- Matches ----

    /// All matches of all days, in day order then match order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.days.iter().flat_map(|d| d.matches.iter())
    }

    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.days.iter().find_map(|d| d.find_match(match_id))
    }

    pub fn find_match_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.days
            .iter_mut()
            .find_map(|d| d.find_match_mut(match_id))
    }

    /// Schedule a new (empty) match at the end of a day.
    pub fn add_match(&mut self, day_id: DayId, name: &str) -> Result<MatchId, TournamentError> {
        let name = clean_name(name)?;
        let tournament_id = self.id;
        let day = self
            .days
            .iter_mut()
            .find(|d| d.id == day_id)
            .ok_or(TournamentError::DayNotFound(day_id))?;
        let m = Match::new(name, day_id, tournament_id);
        let id = m.id;
        day.matches.push(m);
        Ok(id)
    }

    pub fn rename_match(&mut self, match_id: MatchId, name: &str) -> Result<(), TournamentError> {
        let name = clean_name(name)?;
        let m = self
            .find_match_mut(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        m.name = name;
        Ok(())
    }

    pub fn remove_match(&mut self, match_id: MatchId) -> Result<(), TournamentError> {
        for day in &mut self.days {
            if let Some(idx) = day.matches.iter().position(|m| m.id == match_id) {
                day.matches.remove(idx);
                return Ok(());
            }
        }
        Err(TournamentError::MatchNotFound(match_id))
    }
}
