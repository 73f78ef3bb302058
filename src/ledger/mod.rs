//! Ledger domain models: the player aggregate, its entities, and the
//! derived statement views.

pub mod asset;
pub mod expense;
pub mod liability;
pub mod player;
pub mod policy;
pub mod statement;
pub mod team;

pub use asset::{Asset, AssetKind, CASH_ASSET_ID};
pub use expense::Expense;
pub use liability::{Liability, LiabilityKind};
pub use player::Player;
pub use policy::{resale_value, LedgerPolicy, RESALE_PERCENT};
pub use statement::{BalanceSheet, LedgerTotals, ProfitLoss, StatementLine};
pub use team::TeamMember;
