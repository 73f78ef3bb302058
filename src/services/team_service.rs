//! Business logic for the recruitment board and passive income payouts.

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{Player, TeamMember};

use super::ServiceResult;

/// Flat fee the recruitment board charges per hire.
pub const DEFAULT_HIRE_COST: i64 = 10_000;

/// Receipt for a completed hire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HireOutcome {
    pub member_id: String,
    pub hire_cost: i64,
    pub message: String,
}

/// Provides hiring, dismissal, and the periodic contribution payout.
pub struct TeamService;

impl TeamService {
    /// Hires `candidate` for `hire_cost`. Atomic: on `InsufficientFunds`
    /// neither the money nor the roster changes.
    pub fn hire(
        player: &mut Player,
        roster: &mut Vec<TeamMember>,
        candidate: TeamMember,
        hire_cost: i64,
    ) -> ServiceResult<HireOutcome> {
        player.debit(hire_cost)?;

        tracing::info!(member = %candidate.id, hire_cost, "hire applied");
        let outcome = HireOutcome {
            member_id: candidate.id.clone(),
            hire_cost,
            message: format!("Hired {} as {}.", candidate.name, candidate.role),
        };
        roster.push(candidate);
        Ok(outcome)
    }

    /// Removes the member with `member_id` from the roster. The hiring fee
    /// is not refunded.
    pub fn dismiss(roster: &mut Vec<TeamMember>, member_id: &str) -> ServiceResult<TeamMember> {
        let index = roster
            .iter()
            .position(|member| member.id == member_id)
            .ok_or_else(|| {
                LedgerError::InvalidRef(format!("team member `{member_id}` is not on the roster"))
            })?;
        let removed = roster.remove(index);
        tracing::info!(member = %removed.id, "dismissal applied");
        Ok(removed)
    }

    /// Sum of per-tick contributions across the roster.
    pub fn total_contribution(roster: &[TeamMember]) -> i64 {
        roster.iter().map(|member| member.contribution).sum()
    }

    /// Credits one tick's worth of contributions. Never fails; an empty
    /// roster is a no-op. Returns the amount credited.
    pub fn payout(player: &mut Player, roster: &[TeamMember]) -> i64 {
        let income = Self::total_contribution(roster);
        if income > 0 {
            player.credit(income);
            tracing::debug!(income, "passive income credited");
        }
        income
    }
}
