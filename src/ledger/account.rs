//! Account management functionality

use std::fmt;
use std::io::{self, Write};

use crate::ledger::StandardStatementFormatter;
use crate::traits::*;
use crate::types::*;
use crate::utils::{validate_positive_amount, validate_sufficient_funds, SystemClock};

/// A single bank account with its transaction history
///
/// The balance starts at zero and only changes through [`Account::deposit`]
/// and [`Account::withdraw`]. Every accepted operation appends one
/// [`Transaction`]; rejected operations leave the account untouched.
pub struct Account {
    balance: i64,
    transactions: Vec<Transaction>,
    formatter: Box<dyn StatementFormatter>,
    clock: Box<dyn Clock>,
}

impl Account {
    /// Create an empty account using the standard formatter and system date
    pub fn new() -> Self {
        Self::with_components(Box::new(StandardStatementFormatter), Box::new(SystemClock))
    }

    /// Create an empty account with a custom statement formatter
    pub fn with_formatter(formatter: Box<dyn StatementFormatter>) -> Self {
        Self::with_components(formatter, Box::new(SystemClock))
    }

    /// Create an empty account with a custom clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self::with_components(Box::new(StandardStatementFormatter), clock)
    }

    /// Create an empty account with both collaborators supplied
    pub fn with_components(formatter: Box<dyn StatementFormatter>, clock: Box<dyn Clock>) -> Self {
        Self {
            balance: 0,
            transactions: Vec::new(),
            formatter,
            clock,
        }
    }

    /// Deposit money into the account
    pub fn deposit(&mut self, amount: i64) -> LedgerResult<()> {
        if let Err(err) = validate_positive_amount(TransactionKind::Deposit, amount) {
            tracing::warn!(amount, "rejected deposit: {}", err);
            return Err(err);
        }

        let balance = match self.balance.checked_add(amount) {
            Some(balance) => balance,
            None => {
                tracing::warn!(amount, balance = self.balance, "rejected deposit: overflow");
                return Err(LedgerError::BalanceOverflow {
                    balance: self.balance,
                    amount,
                });
            }
        };

        self.record(amount, balance);
        Ok(())
    }

    /// Withdraw money from the account
    ///
    /// The amount is checked for positivity before it is checked against the
    /// balance.
    pub fn withdraw(&mut self, amount: i64) -> LedgerResult<()> {
        let checked = validate_positive_amount(TransactionKind::Withdrawal, amount)
            .and_then(|()| validate_sufficient_funds(self.balance, amount));
        if let Err(err) = checked {
            tracing::warn!(amount, balance = self.balance, "rejected withdrawal: {}", err);
            return Err(err);
        }

        // amount is in 1..=balance, so neither side can overflow
        self.record(-amount, self.balance - amount);
        Ok(())
    }

    fn record(&mut self, amount: i64, balance: i64) {
        let transaction = Transaction::new(self.clock.today(), amount, balance);
        tracing::debug!(
            date = %transaction.formatted_date(),
            amount,
            balance,
            "recorded transaction"
        );
        self.balance = balance;
        self.transactions.push(transaction);
    }

    /// Current balance
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Copy of the transaction history, oldest first
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Read-only view of the transaction history, oldest first
    pub fn transactions_view(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Render the statement, newest transaction first
    pub fn render_statement(&self) -> String {
        self.formatter.format(&self.transactions)
    }

    /// Write the statement to `out`, one line per row
    pub fn write_statement<W: Write>(&self, out: &mut W) -> LedgerResult<()> {
        writeln!(out, "{}", self.render_statement())?;
        out.flush()?;
        Ok(())
    }

    /// Write the statement to standard output
    pub fn print_statement(&self) -> LedgerResult<()> {
        let stdout = io::stdout();
        self.write_statement(&mut stdout.lock())
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("balance", &self.balance)
            .field("transactions", &self.transactions)
            .finish_non_exhaustive()
    }
}

impl AccountService for Account {
    fn deposit(&mut self, amount: i64) -> LedgerResult<()> {
        Account::deposit(self, amount)
    }

    fn withdraw(&mut self, amount: i64) -> LedgerResult<()> {
        Account::withdraw(self, amount)
    }

    fn print_statement(&self) -> LedgerResult<()> {
        Account::print_statement(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    fn account() -> Account {
        Account::with_clock(Box::new(FixedClock::new(
            NaiveDate::from_ymd_opt(2012, 1, 10).unwrap(),
        )))
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = Account::new();
        assert_eq!(account.balance(), 0);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_deposit() {
        let mut account = account();
        account.deposit(1000).unwrap();

        assert_eq!(account.balance(), 1000);
        assert_eq!(account.transaction_count(), 1);
        assert_eq!(account.transactions()[0].amount(), 1000);
        assert_eq!(account.transactions()[0].balance(), 1000);
    }

    #[test]
    fn test_withdraw_records_negative_amount() {
        let mut account = account();
        account.deposit(1000).unwrap();
        account.withdraw(500).unwrap();

        assert_eq!(account.balance(), 500);
        let history = account.transactions();
        assert_eq!(history[1].amount(), -500);
        assert_eq!(history[1].balance(), 500);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = account();
        account.deposit(700).unwrap();
        account.withdraw(700).unwrap();

        assert_eq!(account.balance(), 0);
        assert_eq!(account.transaction_count(), 2);
    }

    #[test]
    fn test_non_positive_deposit_rejected() {
        let mut account = account();
        for amount in [0, -5] {
            let err = account.deposit(amount).unwrap_err();
            assert_eq!(err.to_string(), "Deposit amount must be positive");
        }
        assert_eq!(account.balance(), 0);
        assert_eq!(account.transaction_count(), 0);
    }

    #[test]
    fn test_non_positive_withdrawal_checked_before_funds() {
        let mut account = account();
        for amount in [0, -5] {
            let err = account.withdraw(amount).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount { .. }));
            assert_eq!(err.to_string(), "Withdrawal amount must be positive");
        }
        assert_eq!(account.transaction_count(), 0);
    }

    #[test]
    fn test_insufficient_funds() {
        let mut account = account();
        account.deposit(500).unwrap();

        let err = account.withdraw(1000).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientFunds {
                balance: 500,
                requested: 1000
            }
        ));
        assert_eq!(err.to_string(), "Insufficient funds");
        assert_eq!(account.balance(), 500);
        assert_eq!(account.transaction_count(), 1);
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut account = account();
        account.deposit(i64::MAX).unwrap();

        let err = account.deposit(1).unwrap_err();
        assert!(matches!(err, LedgerError::BalanceOverflow { .. }));
        assert_eq!(account.balance(), i64::MAX);
        assert_eq!(account.transaction_count(), 1);
    }

    #[test]
    fn test_rejected_operation_does_not_read_clock() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let clock = move || {
            *counter.lock().unwrap() += 1;
            NaiveDate::from_ymd_opt(2012, 1, 10).unwrap()
        };
        let mut account = Account::with_clock(Box::new(clock));

        account.withdraw(10).unwrap_err();
        account.deposit(-1).unwrap_err();
        assert_eq!(*calls.lock().unwrap(), 0);

        account.deposit(10).unwrap();
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_transactions_returns_a_copy() {
        let mut account = account();
        account.deposit(100).unwrap();

        let mut copy = account.transactions();
        copy.clear();

        assert_eq!(account.transaction_count(), 1);
        assert_eq!(account.transactions_view().len(), 1);
    }

    struct CountingFormatter;

    impl StatementFormatter for CountingFormatter {
        fn format(&self, transactions: &[Transaction]) -> String {
            format!("{} transactions", transactions.len())
        }
    }

    #[test]
    fn test_custom_formatter() {
        let mut account = Account::with_formatter(Box::new(CountingFormatter));
        account.deposit(1).unwrap();
        account.deposit(2).unwrap();

        assert_eq!(account.render_statement(), "2 transactions");
    }

    #[test]
    fn test_write_statement() {
        let mut account = account();
        account.deposit(1000).unwrap();

        let mut out = Vec::new();
        account.write_statement(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Date       || Amount || Balance\n10/01/2012 || 1000 || 1000\n"
        );
    }

    #[test]
    fn test_account_service_trait_object() {
        let mut account = account();
        {
            let service: &mut dyn AccountService = &mut account;
            service.deposit(300).unwrap();
            service.withdraw(100).unwrap();
            service.print_statement().unwrap();
        }
        assert_eq!(account.balance(), 200);
    }
}
