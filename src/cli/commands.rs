//! CLI command implementations
//!
//! Commands are thin glue: they wire the store, the directory and the
//! operation log together and print what happened. All record semantics live
//! in the record/codec modules.

use serde_json::Value;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::directory::CustomerDirectory;
use crate::observability::{Logger, OperationLog};
use crate::record::{Clock, Customer, MembershipTier, Profile, SystemClock};
use crate::store::JsonStore;

/// Executes the parsed CLI command.
pub fn execute(cli: Cli) -> CliResult<()> {
    let store = JsonStore::new(&cli.store);
    let oplog = OperationLog::open(&cli.log)?;
    let clock = SystemClock;

    match cli.command {
        Command::Demo => demo(&store, &oplog, &clock),
        Command::List => list(&store, &clock),
        Command::Show { email } => show(&store, &clock, &email),
        Command::Remove { email } => remove(&store, &oplog, &email),
    }
}

/// Seeds one customer of each variant and exercises the variant operations.
fn demo(store: &JsonStore, oplog: &OperationLog, clock: &dyn Clock) -> CliResult<()> {
    let mut directory = CustomerDirectory::new();

    let standard = Customer::standard(
        Profile::new(
            "Juan Pérez",
            "juan.perez@email.com",
            "+56912345678",
            "Av. Libertador 1234, Santiago",
        )?,
        clock,
    );

    let mut loyalty = Customer::loyalty(
        Profile::new(
            "María López",
            "maria.lopez@email.com",
            "987654321",
            "Av. Principal 456, Providencia",
        )?,
        MembershipTier::Gold,
        20.0,
    )?;

    let mut corporate = Customer::corporate(
        Profile::new(
            "Carlos Rodríguez",
            "carlos@empresa.cl",
            "+56955556666",
            "Av. Apoquindo 4500, Las Condes",
        )?,
        "Tech Solutions Chile SpA",
        "76.123.456-7",
        "Carlos Rodríguez",
        300000.0,
    )?;

    // Point ledger: accumulate, then redeem within and beyond the balance.
    if let Some(status) = loyalty.as_loyalty_mut() {
        status.add_points(500)?;
        status.add_points(300)?;
        let redeemed = status.redeem_points(600)?;
        println!(
            "redeem 600 points: {} (balance {})",
            if redeemed { "ok" } else { "insufficient" },
            status.points()
        );
        let redeemed = status.redeem_points(500)?;
        println!(
            "redeem 500 points: {} (balance {})",
            if redeemed { "ok" } else { "insufficient" },
            status.points()
        );
    }

    // Credit ledger: use within the limit, overspend, then pay down.
    if let Some(account) = corporate.as_corporate_mut() {
        let used = account.use_credit(100000.0)?;
        println!(
            "use 100000 credit: {} (available {})",
            if used { "ok" } else { "rejected" },
            account.available_credit()
        );
        let used = account.use_credit(250000.0)?;
        println!(
            "use 250000 credit: {} (available {})",
            if used { "ok" } else { "rejected" },
            account.available_credit()
        );
        account.pay_credit(500000.0)?;
        println!("pay 500000 credit (clamped): used {}", account.credit_used());
    }

    // Polymorphic discount over the same purchase amount.
    for customer in [&standard, &loyalty, &corporate] {
        println!(
            "discount on 100000 for {}: {}",
            customer.profile().name(),
            customer.discount(100000.0)
        );
    }

    for customer in [standard, loyalty, corporate] {
        oplog.record(
            "CUSTOMER_ADDED",
            Some(customer.profile().email()),
            customer.kind().as_str(),
        )?;
        directory.add(customer)?;
    }

    store.save_all(directory.list())?;
    let counts = directory.counts();
    Logger::info(
        "DEMO_COMPLETE",
        &[
            ("standard", &counts.standard.to_string()),
            ("loyalty", &counts.loyalty.to_string()),
            ("corporate", &counts.corporate.to_string()),
            ("store", &store.path().display().to_string()),
        ],
    );
    Ok(())
}

/// Prints a summary line per stored record and reports skipped entries.
fn list(store: &JsonStore, clock: &dyn Clock) -> CliResult<()> {
    let outcome = store.load(clock)?;

    for entry in &outcome.skipped {
        Logger::warn(
            "RECORD_SKIPPED",
            &[
                ("index", &entry.index.to_string()),
                ("reason", &entry.error.to_string()),
            ],
        );
    }

    if outcome.customers.is_empty() {
        println!("store is empty");
        return Ok(());
    }

    for customer in &outcome.customers {
        println!("{}", customer.summary());
    }

    let directory = CustomerDirectory::from_customers(outcome.customers);
    let counts = directory.counts();
    println!(
        "{} records ({} standard, {} loyalty, {} corporate), {} skipped",
        counts.total(),
        counts.standard,
        counts.loyalty,
        counts.corporate,
        outcome.skipped.len()
    );
    Ok(())
}

/// Prints one record's summary and pretty snapshot.
fn show(store: &JsonStore, clock: &dyn Clock, email: &str) -> CliResult<()> {
    let outcome = store.load(clock)?;
    let directory = CustomerDirectory::from_customers(outcome.customers);

    match directory.find_by_email(email) {
        Some(customer) => {
            println!("{}", customer.summary());
            let snapshot = Value::Object(customer.snapshot());
            println!(
                "{}",
                serde_json::to_string_pretty(&snapshot).unwrap_or_default()
            );
            Ok(())
        }
        None => {
            Err(crate::directory::DirectoryError::NotFound {
                email: email.to_string(),
            }
            .into())
        }
    }
}

/// Removes a record from the store by email.
fn remove(store: &JsonStore, oplog: &OperationLog, email: &str) -> CliResult<()> {
    if store.remove(email)? {
        oplog.record("CUSTOMER_REMOVED", Some(email), "")?;
        println!("removed {}", email);
    } else {
        println!("no customer with email {}", email);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli_for(dir: &TempDir, args: &[&str]) -> Cli {
        use clap::Parser;
        let store = dir.path().join("customers.json");
        let log = dir.path().join("custodb.log");
        let mut full: Vec<String> = vec![
            "custodb".into(),
            "--store".into(),
            store.display().to_string(),
            "--log".into(),
            log.display().to_string(),
        ];
        full.extend(args.iter().map(|s| s.to_string()));
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_demo_then_list_and_remove() {
        let dir = TempDir::new().unwrap();

        execute(cli_for(&dir, &["demo"])).unwrap();
        execute(cli_for(&dir, &["list"])).unwrap();
        execute(cli_for(&dir, &["show", "--email", "maria.lopez@email.com"])).unwrap();
        execute(cli_for(&dir, &["remove", "--email", "juan.perez@email.com"])).unwrap();

        // The demo persisted three records; one was just removed.
        let store = JsonStore::new(dir.path().join("customers.json"));
        let outcome = store.load(&SystemClock).unwrap();
        assert_eq!(outcome.customers.len(), 2);
    }

    #[test]
    fn test_show_unknown_email_fails() {
        let dir = TempDir::new().unwrap();
        execute(cli_for(&dir, &["demo"])).unwrap();

        let result = execute(cli_for(&dir, &["show", "--email", "nobody@email.com"]));
        assert!(result.is_err());
    }
}
