use serde::{Deserialize, Serialize};

use super::asset::AssetKind;

/// Fixed share of the purchase price returned when an asset is resold.
pub const RESALE_PERCENT: i64 = 70;

/// Tunable ledger behavior that the game skins disagree on.
///
/// The classic skin stamps purchased assets `current`, the modern skin
/// stamps them `fixed`; neither documents why, so the choice is
/// configuration rather than a code fork.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerPolicy {
    /// Classification stamped on assets created by purchases.
    pub new_asset_kind: AssetKind,
}

impl LedgerPolicy {
    pub fn new(new_asset_kind: AssetKind) -> Self {
        Self { new_asset_kind }
    }
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            new_asset_kind: AssetKind::Fixed,
        }
    }
}

/// Computes the credit for reselling an item bought at `price`, rounded
/// down. Lossy on purpose: the games teach markup asymmetry with it.
pub fn resale_value(price: i64) -> i64 {
    price * RESALE_PERCENT / 100
}
