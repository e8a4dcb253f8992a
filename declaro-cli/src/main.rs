use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod declare;
mod logging;
mod prompts;
mod state;

#[derive(Parser, Debug)]
#[command(name = "declaro", version, about = "Monthly public-transport expense declarations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full flow: export, clean, reconcile, submit
    Declare {
        /// Expense year; prompted for when omitted
        #[arg(long)]
        year: Option<i32>,

        /// Expense month (1-12); prompted for when omitted
        #[arg(long)]
        month: Option<u32>,

        /// Expected total amount; prompted for when omitted
        #[arg(long)]
        amount: Option<f64>,
    },

    /// Parse, clean and reconcile a local export without a browser
    Inspect {
        /// Path to a downloaded export (.xls/.xlsx/.csv)
        file: PathBuf,

        /// Expected total to reconcile against
        #[arg(long)]
        amount: Option<f64>,

        /// Write the cleaned rows as CSV to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write the default config to ~/.declaro/config.toml
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Declare {
            year,
            month,
            amount,
        } => {
            let config = config::load_config()?;
            declare::run_declare(&config, year, month, amount).await?;
        }

        Command::Inspect { file, amount, out } => {
            declare::run_inspect(&file, amount, out.as_deref())?;
        }

        Command::InitConfig => {
            config::init_config()?;
        }
    }

    Ok(())
}
