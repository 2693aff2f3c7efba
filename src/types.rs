//! Core types and data structures for the ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date pattern used on statements (`dd/mm/yyyy`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Direction of money movement for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money paid into the account
    Deposit,
    /// Money taken out of the account
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A single recorded ledger event
///
/// Transactions are created by [`crate::Account`] only and cannot be changed
/// afterwards. `balance` is the running balance of the owning account right
/// after this transaction was applied. Serialize-only: there is no public way
/// to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    date: NaiveDate,
    amount: i64,
    balance: i64,
}

impl Transaction {
    pub(crate) fn new(date: NaiveDate, amount: i64, balance: i64) -> Self {
        Self {
            date,
            amount,
            balance,
        }
    }

    /// Calendar date the transaction was recorded on
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Signed amount; negative for withdrawals
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Account balance immediately after this transaction
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Whether this was a deposit or a withdrawal
    pub fn kind(&self) -> TransactionKind {
        if self.amount < 0 {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        }
    }

    /// Date rendered as `dd/mm/yyyy`
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Canonical statement line: `<date> || <amount> || <balance>`
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} || {} || {}",
            self.formatted_date(),
            self.amount,
            self.balance
        )
    }
}

/// Errors that can occur in the ledger
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("{kind} amount must be positive")]
    InvalidAmount { kind: TransactionKind, amount: i64 },
    #[error("Insufficient funds")]
    InsufficientFunds { balance: i64, requested: i64 },
    #[error("Balance overflow: cannot add {amount} to {balance}")]
    BalanceOverflow { balance: i64, amount: i64 },
    #[error("Failed to write statement: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
