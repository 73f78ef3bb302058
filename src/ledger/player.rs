use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::{
    asset::Asset,
    expense::Expense,
    liability::{Liability, LiabilityKind},
};

/// The sole ledger aggregate of a single-player session.
///
/// All entities are held exclusively by this struct; money is mirrored into
/// the synthetic cash asset on every money-changing mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub money: i64,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub liabilities: Vec<Liability>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Creates a player holding `opening_money` of free cash, mirrored into
    /// the seeded cash asset.
    pub fn new(id: impl Into<String>, name: impl Into<String>, opening_money: i64) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            money: opening_money,
            assets: vec![Asset::cash(opening_money)],
            liabilities: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Standard game start: 100,000 in cash and nothing else.
    pub fn standard_seed(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, 100_000)
    }

    /// Extended game start: cash plus savings, a student loan, and one
    /// logged lunch expense dated `now`.
    pub fn extended_seed(
        id: impl Into<String>,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut player = Self::new(id, name, 100_000);
        player.add_asset(Asset::new(
            "savings",
            "Savings",
            50_000,
            super::asset::AssetKind::Current,
        ));
        player.add_liability(Liability::new(
            "student_loan",
            "Student loan",
            30_000,
            LiabilityKind::LongTerm,
        ));
        player.record_expense(Expense::new("lunch", "Lunch", 800, now));
        player
    }

    pub fn add_asset(&mut self, asset: Asset) -> String {
        let id = asset.id.clone();
        self.assets.push(asset);
        self.touch();
        id
    }

    pub fn add_liability(&mut self, liability: Liability) -> String {
        let id = liability.id.clone();
        self.liabilities.push(liability);
        self.touch();
        id
    }

    pub fn record_expense(&mut self, expense: Expense) -> String {
        let id = expense.id.clone();
        self.expenses.push(expense);
        self.touch();
        id
    }

    /// Removes the asset with `id` and returns it. The cash entry is part
    /// of the aggregate's invariant and is never removed.
    pub fn remove_asset(&mut self, id: &str) -> Option<Asset> {
        let index = self
            .assets
            .iter()
            .position(|asset| asset.id == id && !asset.is_cash())?;
        let removed = self.assets.remove(index);
        self.touch();
        Some(removed)
    }

    /// Credits free cash and resynchronizes the cash asset.
    pub fn credit(&mut self, amount: i64) {
        self.money += amount;
        self.sync_cash();
        self.touch();
    }

    /// Debits free cash, failing with `InsufficientFunds` and leaving the
    /// aggregate untouched when `amount` exceeds the current balance.
    pub fn debit(&mut self, amount: i64) -> Result<(), LedgerError> {
        if self.money < amount {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        self.sync_cash();
        self.touch();
        Ok(())
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub fn cash(&self) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.is_cash())
    }

    /// Assets the player may sell, which excludes the cash entry.
    pub fn tradable_assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(|asset| !asset.is_cash())
    }

    pub fn total_assets(&self) -> i64 {
        self.assets.iter().map(|asset| asset.value).sum()
    }

    pub fn total_liabilities(&self) -> i64 {
        self.liabilities.iter().map(|liability| liability.value).sum()
    }

    pub fn net_worth(&self) -> i64 {
        self.total_assets() - self.total_liabilities()
    }

    pub fn total_expenses(&self) -> i64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn sync_cash(&mut self) {
        match self.assets.iter_mut().find(|asset| asset.is_cash()) {
            Some(cash) => cash.value = self.money,
            None => self.assets.insert(0, Asset::cash(self.money)),
        }
    }
}
