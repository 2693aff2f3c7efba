//! Traits for the pluggable parts of an account

use chrono::NaiveDate;

use crate::types::*;

/// Public operations of a bank account
///
/// [`crate::Account`] is the only implementation shipped with this crate.
pub trait AccountService {
    /// Pay a strictly positive amount into the account
    fn deposit(&mut self, amount: i64) -> LedgerResult<()>;

    /// Take a strictly positive amount out of the account
    fn withdraw(&mut self, amount: i64) -> LedgerResult<()>;

    /// Write the statement to standard output
    fn print_statement(&self) -> LedgerResult<()>;
}

/// Renders a transaction history as statement text
///
/// Implementations must be pure: the same input always yields the same
/// output. Accounts accept a custom formatter so tests can observe or replace
/// the rendering.
pub trait StatementFormatter: Send + Sync {
    /// Format `transactions` (given in chronological order)
    fn format(&self, transactions: &[Transaction]) -> String;
}

/// Source of the date stamped on new transactions
pub trait Clock: Send + Sync {
    /// Today's calendar date
    fn today(&self) -> NaiveDate;
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate + Send + Sync,
{
    fn today(&self) -> NaiveDate {
        self()
    }
}
