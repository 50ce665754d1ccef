//! Data structures for the tournament: teams, days, matches, results and standings.

mod day;
mod game;
mod standing;
mod team;
mod tournament;

pub use day::{Day, DayId};
pub use game::{Match, MatchId, MatchResult, ResultEntry};
pub use standing::TeamStanding;
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId};
