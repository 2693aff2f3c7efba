//! Statement rendering

use crate::traits::StatementFormatter;
use crate::types::*;

/// First line of every statement; the date column is padded to width 10
pub const STATEMENT_HEADER: &str = "Date       || Amount || Balance";

/// Default formatter: header followed by transactions, newest first
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardStatementFormatter;

impl StatementFormatter for StandardStatementFormatter {
    fn format(&self, transactions: &[Transaction]) -> String {
        std::iter::once(STATEMENT_HEADER.to_string())
            .chain(transactions.iter().rev().map(Transaction::to_string))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
