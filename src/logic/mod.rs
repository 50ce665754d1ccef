//! Tournament business logic: scoring, standings, result entry and export.

pub mod export;
mod results;
pub mod scope;
pub mod scoring;
mod standings;

pub use export::{split_columns, standings_to_csv, ExportError};
pub use results::{clear_match_results, replace_match_results, set_match_result};
pub use scope::{matches_in_scope, tournament_standings, StandingsScope};
pub use scoring::{kill_points, placement_points, total_points};
pub use standings::aggregate;
