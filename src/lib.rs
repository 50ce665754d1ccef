//! PUBG Mobile tournament organizer: library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use logic::{
    aggregate, clear_match_results, kill_points, matches_in_scope, placement_points,
    replace_match_results, set_match_result, split_columns, standings_to_csv, total_points,
    tournament_standings, ExportError, StandingsScope,
};
pub use models::{
    Day, DayId, Match, MatchId, MatchResult, ResultEntry, Team, TeamId, TeamStanding, Tournament,
    TournamentError, TournamentId,
};
