use serde::{Deserialize, Serialize};

/// Id of the synthetic cash asset every player carries from creation.
pub const CASH_ASSET_ID: &str = "cash";

/// Represents a thing of ongoing value on the player's balance sheet.
///
/// Apart from the cash entry, an asset's value never changes after it is
/// added; resale removes the whole entry instead of marking it down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub value: i64,
    #[serde(rename = "type")]
    pub kind: AssetKind,
}

impl Asset {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: i64, kind: AssetKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            kind,
        }
    }

    /// Creates the synthetic cash entry mirroring the player's free money.
    pub fn cash(value: i64) -> Self {
        Self::new(CASH_ASSET_ID, "Cash", value, AssetKind::Current)
    }

    pub fn is_cash(&self) -> bool {
        self.id == CASH_ASSET_ID
    }
}

/// Balance-sheet classification of an asset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Current,
    Fixed,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Current => "current",
            AssetKind::Fixed => "fixed",
        }
    }
}
