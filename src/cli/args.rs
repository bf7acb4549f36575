//! CLI argument definitions using clap
//!
//! Commands:
//! - custodb demo
//! - custodb list
//! - custodb show --email <email>
//! - custodb remove --email <email>
//!
//! Every command operates on the store file given by `--store` and records
//! mutations to the operation log given by `--log`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// custodb - A strict, validated customer record store
#[derive(Parser, Debug)]
#[command(name = "custodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the customer store file
    #[arg(long, global = true, default_value = "./customers.json")]
    pub store: PathBuf,

    /// Path to the operation log file
    #[arg(long, global = true, default_value = "./custodb.log")]
    pub log: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed one customer of each variant and exercise their operations
    Demo,

    /// List every customer in the store, reporting skipped entries
    List,

    /// Show one customer's full snapshot
    Show {
        /// Email of the customer to show
        #[arg(long)]
        email: String,
    },

    /// Remove a customer from the store
    Remove {
        /// Email of the customer to remove
        #[arg(long)]
        email: String,
    },
}
