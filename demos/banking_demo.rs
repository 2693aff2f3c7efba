//! Banking demo: deposit, withdraw and print a statement

use account_ledger::{Account, LedgerError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // fails only if a subscriber is already installed, which is fine
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();

    println!("==============================================");
    println!("         Account Ledger - Banking Demo        ");
    println!("==============================================\n");

    let mut account = Account::new();

    println!("1. Depositing 1000...");
    account.deposit(1000)?;

    println!("2. Depositing 2000...");
    account.deposit(2000)?;

    println!("3. Withdrawing 500...");
    account.withdraw(500)?;

    println!("4. Attempting to withdraw 10000...");
    match account.withdraw(10_000) {
        Err(err @ LedgerError::InsufficientFunds { .. }) => println!("   Rejected: {}", err),
        other => other?,
    }

    println!("\n--- Account Statement ---\n");
    account.print_statement()?;

    println!("\n==============================================");
    println!("Current Balance: {}", account.balance());
    println!("==============================================");

    Ok(())
}
