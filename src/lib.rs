//! # Account Ledger
//!
//! A single-account ledger that records deposits and withdrawals, keeps a
//! running balance and prints a statement of all transactions, newest first.
//!
//! ## Features
//!
//! - **Validated operations**: non-positive amounts and overdrafts are rejected without touching the account
//! - **Running balance**: every transaction carries the balance right after it was applied
//! - **Statements**: fixed-format text table, rendered purely or written to any `io::Write`
//! - **Pluggable collaborators**: custom statement formatters and clocks for testing
//!
//! ## Quick Start
//!
//! ```rust
//! use account_ledger::Account;
//!
//! let mut account = Account::new();
//! account.deposit(1000).unwrap();
//! account.withdraw(400).unwrap();
//!
//! assert_eq!(account.balance(), 600);
//! assert!(account.render_statement().starts_with("Date       || Amount || Balance"));
//! ```

pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
pub use utils::{FixedClock, SequenceClock, SystemClock};
