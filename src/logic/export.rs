//! Standings export: CSV and the two-column banner layout.

use crate::models::TeamStanding;

/// Failure while writing a standings export.
#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    /// The writer produced bytes that are not UTF-8 (only possible with non-UTF-8 team names).
    Encoding(std::string::FromUtf8Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "CSV export failed: {}", e),
            ExportError::Encoding(e) => write!(f, "CSV export is not valid UTF-8: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Csv(e) => Some(e),
            ExportError::Encoding(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ExportError {
    fn from(e: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ExportError::Csv(csv::Error::from(e.into_error()))
    }
}

/// Render standings as CSV, one row per team in the given order.
pub fn standings_to_csv(standings: &[TeamStanding]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "rank",
        "team",
        "flag",
        "wwcd",
        "placement_points",
        "kills",
        "total_points",
    ])?;
    for s in standings {
        wtr.write_record([
            s.rank.to_string(),
            s.team_name.clone(),
            s.team_flag.clone().unwrap_or_default(),
            s.wwcd.to_string(),
            s.total_placement_points.to_string(),
            s.total_kills.to_string(),
            s.total_points.to_string(),
        ])?;
    }
    let bytes = wtr.into_inner()?;
    String::from_utf8(bytes).map_err(ExportError::Encoding)
}

/// Split a ranked table into the two banner columns: the left column gets the
/// first half (rounded up), the right column the rest.
pub fn split_columns(standings: &[TeamStanding]) -> (&[TeamStanding], &[TeamStanding]) {
    standings.split_at(standings.len().div_ceil(2))
}
