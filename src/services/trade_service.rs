//! Business logic for buying from shop catalogs and reselling owned assets.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductKind};
use crate::errors::LedgerError;
use crate::ids::IdSource;
use crate::ledger::{resale_value, Asset, Expense, LedgerPolicy, Player, CASH_ASSET_ID};
use crate::time::Clock;

use super::ServiceResult;

/// Receipt for a completed purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOutcome {
    /// Id of the asset or expense entry appended to the ledger.
    pub entry_id: String,
    pub classified_as: ProductKind,
    pub price: i64,
    /// Text for the game message banner.
    pub message: String,
}

/// Receipt for a completed sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleOutcome {
    pub asset_id: String,
    pub asset_name: String,
    pub proceeds: i64,
    pub message: String,
}

/// Provides the purchase and resale transactions.
pub struct TradeService;

impl TradeService {
    /// Buys `product`, classifying the outlay as an asset or an expense per
    /// the product kind. Atomic: on `InsufficientFunds` nothing changes.
    pub fn purchase(
        player: &mut Player,
        product: &Product,
        policy: &LedgerPolicy,
        ids: &mut dyn IdSource,
        clock: &dyn Clock,
    ) -> ServiceResult<PurchaseOutcome> {
        player.debit(product.price)?;

        let entry_id = ids.entry_id(&product.id);
        match product.kind {
            ProductKind::Asset => {
                player.add_asset(Asset::new(
                    entry_id.clone(),
                    product.name.clone(),
                    product.price,
                    policy.new_asset_kind,
                ));
            }
            ProductKind::Expense => {
                player.record_expense(Expense::new(
                    entry_id.clone(),
                    product.name.clone(),
                    product.price,
                    clock.now(),
                ));
            }
        }

        tracing::info!(
            product = %product.id,
            entry = %entry_id,
            price = product.price,
            kind = product.kind.label(),
            "purchase applied"
        );

        Ok(PurchaseOutcome {
            message: format!("Bought {} ({}).", product.name, product.kind.label()),
            entry_id,
            classified_as: product.kind,
            price: product.price,
        })
    }

    /// Sells the owned asset with `asset_id`, crediting the fixed resale
    /// share of its recorded value. The cash entry is not sellable.
    pub fn sell(player: &mut Player, asset_id: &str) -> ServiceResult<SaleOutcome> {
        if asset_id == CASH_ASSET_ID {
            return Err(LedgerError::InvalidRef(
                "the cash entry cannot be sold".into(),
            ));
        }
        let asset = player.remove_asset(asset_id).ok_or_else(|| {
            LedgerError::InvalidRef(format!("asset `{asset_id}` is not owned"))
        })?;

        let proceeds = resale_value(asset.value);
        player.credit(proceeds);

        tracing::info!(asset = %asset.id, proceeds, "sale applied");

        let message = format!("Sold {} for {}.", asset.name, proceeds);
        Ok(SaleOutcome {
            asset_id: asset.id,
            asset_name: asset.name,
            proceeds,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::CounterIds;
    use crate::ledger::AssetKind;
    use crate::time::ManualClock;
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> ManualClock {
        ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap())
    }

    fn asset_product() -> Product {
        Product::new("cookware", "Cookware", 5_000, ProductKind::Asset)
    }

    fn expense_product() -> Product {
        Product::new("meal", "Meal", 1_000, ProductKind::Expense)
    }

    #[test]
    fn purchasing_an_asset_appends_and_keeps_cash_synced() {
        let mut player = Player::new("player1", "Player", 100_000);
        let mut ids = CounterIds::new();
        let outcome = TradeService::purchase(
            &mut player,
            &asset_product(),
            &LedgerPolicy::default(),
            &mut ids,
            &fixed_clock(),
        )
        .unwrap();

        assert_eq!(player.money, 95_000);
        assert_eq!(player.cash().unwrap().value, 95_000);
        assert_eq!(player.assets.len(), 2);
        assert_eq!(player.total_assets(), 100_000);
        assert_eq!(outcome.entry_id, "cookware_1");
        assert_eq!(outcome.classified_as, ProductKind::Asset);
        assert!(outcome.message.contains("Cookware"));
        assert!(outcome.message.contains("asset"));
    }

    #[test]
    fn purchased_asset_kind_follows_the_policy() {
        let mut player = Player::new("player1", "Player", 100_000);
        let mut ids = CounterIds::new();
        let policy = LedgerPolicy::new(AssetKind::Current);
        TradeService::purchase(&mut player, &asset_product(), &policy, &mut ids, &fixed_clock())
            .unwrap();
        assert_eq!(player.asset("cookware_1").unwrap().kind, AssetKind::Current);
    }

    #[test]
    fn purchasing_an_expense_logs_it_with_the_clock_date() {
        let mut player = Player::new("player1", "Player", 100_000);
        let mut ids = CounterIds::new();
        let clock = fixed_clock();
        let outcome = TradeService::purchase(
            &mut player,
            &expense_product(),
            &LedgerPolicy::default(),
            &mut ids,
            &clock,
        )
        .unwrap();

        assert_eq!(player.money, 99_000);
        assert_eq!(player.assets.len(), 1);
        assert_eq!(player.expenses.len(), 1);
        assert_eq!(player.total_expenses(), 1_000);
        assert_eq!(player.expenses[0].date, clock.now());
        assert_eq!(outcome.classified_as, ProductKind::Expense);
    }

    #[test]
    fn purchase_without_funds_changes_nothing() {
        let mut player = Player::new("player1", "Player", 500);
        let mut ids = CounterIds::new();
        let err = TradeService::purchase(
            &mut player,
            &expense_product(),
            &LedgerPolicy::default(),
            &mut ids,
            &fixed_clock(),
        )
        .expect_err("500 cannot cover 1000");

        assert!(err.is_insufficient_funds());
        assert_eq!(player.money, 500);
        assert_eq!(player.assets.len(), 1);
        assert!(player.expenses.is_empty());
    }

    #[test]
    fn repeat_purchases_mint_distinct_entry_ids() {
        let mut player = Player::new("player1", "Player", 100_000);
        let mut ids = CounterIds::new();
        let policy = LedgerPolicy::default();
        let clock = fixed_clock();
        let first =
            TradeService::purchase(&mut player, &asset_product(), &policy, &mut ids, &clock)
                .unwrap();
        let second =
            TradeService::purchase(&mut player, &asset_product(), &policy, &mut ids, &clock)
                .unwrap();
        assert_ne!(first.entry_id, second.entry_id);
        assert_eq!(player.assets.len(), 3);
    }

    #[test]
    fn selling_credits_the_resale_share() {
        let mut player = Player::new("player1", "Player", 100_000);
        let mut ids = CounterIds::new();
        TradeService::purchase(
            &mut player,
            &asset_product(),
            &LedgerPolicy::default(),
            &mut ids,
            &fixed_clock(),
        )
        .unwrap();

        let outcome = TradeService::sell(&mut player, "cookware_1").unwrap();
        assert_eq!(outcome.proceeds, 3_500);
        assert_eq!(player.money, 98_500);
        assert_eq!(player.cash().unwrap().value, 98_500);
        assert!(player.asset("cookware_1").is_none());
    }

    #[test]
    fn selling_cash_or_unknown_assets_is_rejected() {
        let mut player = Player::new("player1", "Player", 100_000);
        let before = player.clone();

        let err = TradeService::sell(&mut player, CASH_ASSET_ID).expect_err("cash is not sellable");
        assert!(matches!(err, LedgerError::InvalidRef(_)));

        let err = TradeService::sell(&mut player, "ghost").expect_err("unknown id");
        assert!(matches!(err, LedgerError::InvalidRef(_)));

        assert_eq!(player.money, before.money);
        assert_eq!(player.assets, before.assets);
    }
}
