use serde::{Deserialize, Serialize};

/// Represents an obligation of ongoing value owed by the player.
///
/// Liabilities come from seed data or explicit game events; the trade flows
/// never touch them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub value: i64,
    #[serde(rename = "type")]
    pub kind: LiabilityKind,
}

impl Liability {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: i64,
        kind: LiabilityKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            kind,
        }
    }
}

/// Balance-sheet classification of a liability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LiabilityKind {
    Current,
    LongTerm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_term_serializes_with_hyphen() {
        let json = serde_json::to_string(&LiabilityKind::LongTerm).unwrap();
        assert_eq!(json, "\"long-term\"");
    }
}
