//! Session controller: owns the player aggregate, the team roster, the
//! current game message, and the passive income schedule. Game skins talk
//! to this facade and render from its read accessors.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductKind};
use crate::ids::{CounterIds, IdSource};
use crate::ledger::{
    BalanceSheet, LedgerPolicy, LedgerTotals, Player, ProfitLoss, TeamMember,
};
use crate::services::{
    HireOutcome, PurchaseOutcome, SaleOutcome, ServiceResult, SummaryService, TeamService,
    TradeService,
};
use crate::time::{Clock, SystemClock};

/// Demo cadence of the passive income payout.
pub fn default_tick_interval() -> Duration {
    Duration::seconds(10)
}

/// Session-level counters shown on the modern skin's dashboard. These sit
/// outside the ledger invariants and only this facade updates them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStats {
    /// Completed purchases.
    pub transactions: u32,
    /// Passive income accumulated over the session.
    pub business_growth: i64,
    /// Starts at 75 and gains a point per asset purchase.
    pub literacy_score: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            transactions: 0,
            business_growth: 0,
            literacy_score: 75,
        }
    }
}

/// Logical passive-income schedule. The session polls it under the injected
/// clock; nothing here touches the wall clock or spawns a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveIncomeTicker {
    interval: Duration,
    next_due: DateTime<Utc>,
}

impl PassiveIncomeTicker {
    pub fn new(interval: Duration, now: DateTime<Utc>) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Counts and consumes the whole intervals elapsed through `now`, so a
    /// slow poller neither loses nor inflates payouts. A non-positive
    /// interval is treated as one millisecond.
    pub fn due_ticks(&mut self, now: DateTime<Utc>) -> u32 {
        let step_ms = self.interval.num_milliseconds().max(1);
        let mut ticks = 0u32;
        while self.next_due <= now {
            self.next_due = self.next_due + Duration::milliseconds(step_ms);
            ticks += 1;
        }
        ticks
    }
}

/// One run of a game skin: player, roster, policy, message, stats, and the
/// optional passive-income schedule, with the clock and id source injected.
pub struct GameSession {
    player: Player,
    roster: Vec<TeamMember>,
    policy: LedgerPolicy,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    message: String,
    stats: GameStats,
    ticker: Option<PassiveIncomeTicker>,
}

impl GameSession {
    /// Wires a session with the production defaults: system clock, counter
    /// ids, and the default policy.
    pub fn new(player: Player) -> Self {
        Self::with_parts(
            player,
            LedgerPolicy::default(),
            Box::new(CounterIds::new()),
            Box::new(SystemClock),
        )
    }

    pub fn with_parts(
        player: Player,
        policy: LedgerPolicy,
        ids: Box<dyn IdSource>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            player,
            roster: Vec::new(),
            policy,
            ids,
            clock,
            message: "Shop along the street and learn BS and P/L!".into(),
            stats: GameStats::default(),
            ticker: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn roster(&self) -> &[TeamMember] {
        &self.roster
    }

    pub fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    /// Text for the message banner, updated by every transaction outcome.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn totals(&self) -> LedgerTotals {
        SummaryService::totals(&self.player)
    }

    pub fn balance_sheet(&self) -> BalanceSheet {
        SummaryService::balance_sheet(&self.player)
    }

    pub fn profit_loss(&self) -> ProfitLoss {
        SummaryService::profit_loss(&self.player)
    }

    /// Buys `product` from the active catalog. Updates the message banner
    /// and stats on success; on failure the banner carries the error text
    /// and the ledger stays unchanged.
    pub fn purchase(&mut self, product: &Product) -> ServiceResult<PurchaseOutcome> {
        match TradeService::purchase(
            &mut self.player,
            product,
            &self.policy,
            self.ids.as_mut(),
            self.clock.as_ref(),
        ) {
            Ok(outcome) => {
                self.stats.transactions += 1;
                if outcome.classified_as == ProductKind::Asset {
                    self.stats.literacy_score += 1;
                }
                self.message = outcome.message.clone();
                Ok(outcome)
            }
            Err(err) => {
                self.message = err.to_string();
                Err(err)
            }
        }
    }

    /// Sells the owned asset with `asset_id` at the resale rate.
    pub fn sell(&mut self, asset_id: &str) -> ServiceResult<SaleOutcome> {
        match TradeService::sell(&mut self.player, asset_id) {
            Ok(outcome) => {
                self.message = outcome.message.clone();
                Ok(outcome)
            }
            Err(err) => {
                self.message = err.to_string();
                Err(err)
            }
        }
    }

    /// Hires `candidate` from the recruitment board.
    pub fn hire(&mut self, candidate: TeamMember, hire_cost: i64) -> ServiceResult<HireOutcome> {
        match TeamService::hire(&mut self.player, &mut self.roster, candidate, hire_cost) {
            Ok(outcome) => {
                self.message = outcome.message.clone();
                Ok(outcome)
            }
            Err(err) => {
                self.message = err.to_string();
                Err(err)
            }
        }
    }

    /// Removes a member from the roster; the hiring fee stays spent.
    pub fn dismiss(&mut self, member_id: &str) -> ServiceResult<TeamMember> {
        match TeamService::dismiss(&mut self.roster, member_id) {
            Ok(member) => {
                self.message = format!("{} left the team.", member.name);
                Ok(member)
            }
            Err(err) => {
                self.message = err.to_string();
                Err(err)
            }
        }
    }

    /// Arms the passive income schedule from the session clock.
    pub fn start_passive_income(&mut self, interval: Duration) {
        self.ticker = Some(PassiveIncomeTicker::new(interval, self.clock.now()));
        tracing::debug!(interval_ms = interval.num_milliseconds(), "passive income armed");
    }

    /// Disarms the schedule. Called on teardown; polling afterwards is a
    /// no-op.
    pub fn stop_passive_income(&mut self) {
        self.ticker = None;
        tracing::debug!("passive income disarmed");
    }

    pub fn passive_income_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Credits one payout per whole interval elapsed since the last poll
    /// and returns the total credited. No-op while disarmed.
    pub fn poll_passive_income(&mut self) -> i64 {
        let now = self.clock.now();
        let ticks = match self.ticker.as_mut() {
            Some(ticker) => ticker.due_ticks(now),
            None => 0,
        };

        let mut credited = 0;
        for _ in 0..ticks {
            credited += TeamService::payout(&mut self.player, &self.roster);
        }
        if credited > 0 {
            self.stats.business_growth += credited;
            self.message = format!("Your team earned {credited}.");
        }
        credited
    }
}
