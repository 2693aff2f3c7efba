//! Validation utilities

use crate::types::*;

/// Validate that an amount is strictly positive
pub fn validate_positive_amount(kind: TransactionKind, amount: i64) -> LedgerResult<()> {
    if amount <= 0 {
        Err(LedgerError::InvalidAmount { kind, amount })
    } else {
        Ok(())
    }
}

/// Validate that `amount` can be withdrawn from `balance`
pub fn validate_sufficient_funds(balance: i64, amount: i64) -> LedgerResult<()> {
    if amount > balance {
        Err(LedgerError::InsufficientFunds {
            balance,
            requested: amount,
        })
    } else {
        Ok(())
    }
}
