//! Ledger module containing the account and statement rendering

pub mod account;
pub mod statement;

pub use account::*;
pub use statement::*;
