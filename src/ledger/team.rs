use serde::{Deserialize, Serialize};

/// Represents a hired helper who contributes passive income each tick.
///
/// The roster lives on the game session, not on the player aggregate, so
/// the balance-sheet invariants stay untouched by hiring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Currency units credited per passive-income tick.
    pub contribution: i64,
}

impl TeamMember {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        skills: Vec<String>,
        contribution: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            skills,
            contribution,
        }
    }
}
