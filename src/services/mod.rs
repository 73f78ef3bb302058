//! Stateless services that apply validated transactions to the player
//! aggregate and derive read-only statement views.

pub mod summary_service;
pub mod team_service;
pub mod trade_service;

pub use summary_service::SummaryService;
pub use team_service::{HireOutcome, TeamService, DEFAULT_HIRE_COST};
pub use trade_service::{PurchaseOutcome, SaleOutcome, TradeService};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, LedgerError>;
