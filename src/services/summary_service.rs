use crate::ledger::{BalanceSheet, LedgerTotals, Player, ProfitLoss};

/// Read-only statement derivations for the presentation layer. All of these
/// recompute from the aggregate on every call; nothing is cached.
pub struct SummaryService;

impl SummaryService {
    pub fn totals(player: &Player) -> LedgerTotals {
        LedgerTotals::of(player)
    }

    pub fn balance_sheet(player: &Player) -> BalanceSheet {
        BalanceSheet::of(player)
    }

    pub fn profit_loss(player: &Player) -> ProfitLoss {
        ProfitLoss::of(player)
    }
}
