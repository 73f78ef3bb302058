use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a one-time consumed cost on the profit-and-loss view.
///
/// The expense log is append-only: entries are never edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: i64,
    pub date: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: i64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            date,
        }
    }
}
