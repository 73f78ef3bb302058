use serde::{Deserialize, Serialize};

use super::player::Player;

/// Point-in-time rollup of the derived aggregates, recomputed per read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerTotals {
    pub money: i64,
    pub total_assets: i64,
    pub total_liabilities: i64,
    pub net_worth: i64,
    pub total_expenses: i64,
}

impl LedgerTotals {
    pub fn of(player: &Player) -> Self {
        Self {
            money: player.money,
            total_assets: player.total_assets(),
            total_liabilities: player.total_liabilities(),
            net_worth: player.net_worth(),
            total_expenses: player.total_expenses(),
        }
    }
}

/// One named row on a rendered statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementLine {
    pub id: String,
    pub name: String,
    pub amount: i64,
}

/// Balance sheet: what the player owns and owes at this instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceSheet {
    pub assets: Vec<StatementLine>,
    pub total_assets: i64,
    pub liabilities: Vec<StatementLine>,
    pub total_liabilities: i64,
    pub net_worth: i64,
}

impl BalanceSheet {
    pub fn of(player: &Player) -> Self {
        let assets = player
            .assets
            .iter()
            .map(|asset| StatementLine {
                id: asset.id.clone(),
                name: asset.name.clone(),
                amount: asset.value,
            })
            .collect();
        let liabilities = player
            .liabilities
            .iter()
            .map(|liability| StatementLine {
                id: liability.id.clone(),
                name: liability.name.clone(),
                amount: liability.value,
            })
            .collect();
        Self {
            assets,
            total_assets: player.total_assets(),
            liabilities,
            total_liabilities: player.total_liabilities(),
            net_worth: player.net_worth(),
        }
    }
}

/// Profit and loss: the expense log accumulated over the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfitLoss {
    pub expenses: Vec<StatementLine>,
    pub total_expenses: i64,
}

impl ProfitLoss {
    pub fn of(player: &Player) -> Self {
        let expenses = player
            .expenses
            .iter()
            .map(|expense| StatementLine {
                id: expense.id.clone(),
                name: expense.name.clone(),
                amount: expense.amount,
            })
            .collect();
        Self {
            expenses,
            total_expenses: player.total_expenses(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::asset::{Asset, AssetKind};
    use crate::ledger::liability::{Liability, LiabilityKind};

    #[test]
    fn balance_sheet_mirrors_the_aggregate() {
        let mut player = Player::new("player1", "Player", 95_000);
        player.add_asset(Asset::new("cookware_1", "Cookware", 5_000, AssetKind::Fixed));
        player.add_liability(Liability::new(
            "loan",
            "Loan",
            30_000,
            LiabilityKind::LongTerm,
        ));

        let sheet = BalanceSheet::of(&player);
        assert_eq!(sheet.assets.len(), 2);
        assert_eq!(sheet.total_assets, 100_000);
        assert_eq!(sheet.total_liabilities, 30_000);
        assert_eq!(sheet.net_worth, 70_000);
        assert_eq!(sheet.assets[0].id, "cash");
        assert_eq!(sheet.assets[0].amount, 95_000);
    }

    #[test]
    fn totals_read_is_idempotent() {
        let player = Player::new("player1", "Player", 42_000);
        assert_eq!(LedgerTotals::of(&player), LedgerTotals::of(&player));
    }
}
