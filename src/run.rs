use anyhow::Result;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::ledger::Ledger;
use crate::models::{Account, Transaction, TransactionKind};

pub(crate) fn as_cli(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    match command.as_str() {
        "accounts" => cli_accounts(ledger),
        "account" => cli_account(&args[2..], ledger),
        "txns" => cli_txns(&args[2..], ledger),
        "txn" => cli_txn(&args[2..], ledger),
        "clear-txns" => cli_clear_txns(ledger),
        "clear-accounts" => cli_clear_accounts(ledger),
        "seed" => cli_seed(&args[2..], ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ledgerbook {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Ledgerbook — personal budget ledger");
    println!();
    println!("Usage: ledgerbook <command>");
    println!();
    println!("Commands:");
    println!("  accounts                                     List accounts with balances");
    println!("  account add <name> <balance> <currency>      Create an account");
    println!("  account edit <name> <balance> <currency>     Replace balance and currency");
    println!("  account show <name>                          Show one account");
    println!("  account rm <name>                            Delete an account (must be unreferenced)");
    println!("  txns [--account <name>]                      List transactions");
    println!("  txn add <credit|debit> <account> <amount> <currency> <description>");
    println!("  txn edit <id> <credit|debit> <account> <amount> <currency> <description>");
    println!("  txn show <id>                                Show one transaction");
    println!("  txn rm <id>                                  Delete a transaction (reverses its effect)");
    println!("  clear-txns                                   Delete all transactions, reversing each");
    println!("  clear-accounts                               Delete all accounts (all must be unreferenced)");
    println!("  seed <file.json>                             Bulk-import accounts with embedded transactions");
    println!("  --help, -h                                   Show this help");
    println!("  --version, -V                                Show version");
}

// ── Accounts ──────────────────────────────────────────────

fn cli_accounts(ledger: &Ledger) -> Result<()> {
    let accounts = ledger.list_accounts()?;
    if accounts.is_empty() {
        println!("No accounts.");
        return Ok(());
    }
    for account in accounts {
        println!("{account}");
    }
    Ok(())
}

fn cli_account(args: &[String], ledger: &mut Ledger) -> Result<()> {
    match args {
        [cmd, name, balance, currency] if cmd == "add" => {
            let account =
                ledger.create_account(Account::new(name.clone(), parse_amount(balance)?, currency.clone()))?;
            println!("Created {account}");
            Ok(())
        }
        [cmd, name, balance, currency] if cmd == "edit" => {
            let account = ledger.edit_account(
                name,
                Account::new(name.clone(), parse_amount(balance)?, currency.clone()),
            )?;
            println!("Updated {account}");
            Ok(())
        }
        [cmd, name] if cmd == "show" => {
            println!("{}", ledger.get_account(name)?);
            Ok(())
        }
        [cmd, name] if cmd == "rm" => {
            ledger.delete_account(name)?;
            println!("Deleted account {name}");
            Ok(())
        }
        _ => {
            print_usage();
            anyhow::bail!("Usage: ledgerbook account add|edit <name> <balance> <currency>, or show|rm <name>");
        }
    }
}

// ── Transactions ──────────────────────────────────────────

fn cli_txns(args: &[String], ledger: &Ledger) -> Result<()> {
    let account_name = args
        .windows(2)
        .find(|w| w[0] == "--account")
        .map(|w| w[1].as_str());

    let txns = match account_name {
        Some(name) => ledger.transactions_for_account(name)?,
        None => ledger.list_transactions()?,
    };

    if txns.is_empty() {
        println!("No transactions.");
        return Ok(());
    }
    for txn in txns {
        println!(
            "#{}  {}  {}  {} {}  {}",
            txn.id.unwrap_or(0),
            txn.kind,
            txn.account_name,
            txn.amount,
            txn.currency,
            txn.description,
        );
    }
    Ok(())
}

fn cli_txn(args: &[String], ledger: &mut Ledger) -> Result<()> {
    match args {
        [cmd, kind, account, amount, currency, description @ ..] if cmd == "add" => {
            let txn = ledger.create_transaction(build_txn(kind, account, amount, currency, description)?)?;
            println!(
                "Posted #{} {} {} {} to {}",
                txn.id.unwrap_or(0),
                txn.kind,
                txn.amount,
                txn.currency,
                txn.account_name,
            );
            Ok(())
        }
        [cmd, id, kind, account, amount, currency, description @ ..] if cmd == "edit" => {
            let id: i64 = id.parse()?;
            let txn =
                ledger.edit_transaction(id, build_txn(kind, account, amount, currency, description)?)?;
            println!("Updated #{id}: {} {} {}", txn.kind, txn.amount, txn.currency);
            Ok(())
        }
        [cmd, id] if cmd == "show" => {
            let txn = ledger.get_transaction(id.parse()?)?;
            println!(
                "#{}  {}  {}  {} {}  {}",
                txn.id.unwrap_or(0),
                txn.kind,
                txn.account_name,
                txn.amount,
                txn.currency,
                txn.description,
            );
            Ok(())
        }
        [cmd, id] if cmd == "rm" => {
            let id: i64 = id.parse()?;
            ledger.delete_transaction(id)?;
            println!("Deleted transaction #{id} (effect reversed)");
            Ok(())
        }
        _ => {
            print_usage();
            anyhow::bail!("Usage: ledgerbook txn add|edit|rm ...");
        }
    }
}

fn cli_clear_txns(ledger: &mut Ledger) -> Result<()> {
    let count = ledger.delete_all_transactions()?;
    println!("Deleted {count} transactions (all effects reversed)");
    Ok(())
}

fn cli_clear_accounts(ledger: &mut Ledger) -> Result<()> {
    ledger.delete_all_accounts()?;
    println!("Deleted all accounts");
    Ok(())
}

fn cli_seed(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let Some(file) = args.first() else {
        anyhow::bail!("Usage: ledgerbook seed <file.json>");
    };
    let path = Path::new(file);
    if !path.exists() {
        anyhow::bail!("File not found: {file}");
    }
    let count = crate::import::seed_from_file(ledger.db_mut(), path)?;
    println!("Imported {count} transactions");
    Ok(())
}

// ── Parsing helpers ───────────────────────────────────────

fn build_txn(
    kind: &str,
    account: &str,
    amount: &str,
    currency: &str,
    description: &[String],
) -> Result<Transaction> {
    let kind = TransactionKind::parse(kind)
        .ok_or_else(|| anyhow::anyhow!("Expected 'credit' or 'debit', got '{kind}'"))?;
    Ok(Transaction::new(
        kind,
        account.to_string(),
        description.join(" "),
        parse_amount(amount)?,
        currency.to_string(),
    ))
}

fn parse_amount(s: &str) -> Result<Decimal> {
    Decimal::from_str(s).map_err(|_| anyhow::anyhow!("Not a decimal amount: '{s}'"))
}
