//! Team data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in results and standings).
pub type TeamId = Uuid;

/// A registered team. Never modified while standings are computed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Display glyph or country code shown next to the name.
    #[serde(default)]
    pub flag: Option<String>,
    /// Logo reference (URL or asset key).
    #[serde(default)]
    pub logo: Option<String>,
}

impl Team {
    /// Create a new team with the given name and no flag or logo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            flag: None,
            logo: None,
        }
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}
