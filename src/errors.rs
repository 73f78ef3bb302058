use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A transaction's cost exceeds the player's free cash. The ledger is
    /// left untouched when this is raised.
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: i64, available: i64 },
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    /// True when the error is the recoverable out-of-money case rather
    /// than a caller bug or a catalog loading failure.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, LedgerError::InsufficientFunds { .. })
    }
}
