//! The end-to-end declaration flow and the browserless inspect path.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use declaro_core::{
    DeclarationPeriod, Reconciliation, build_expense_rows, clean_transactions, computed_total,
};
use declaro_ingest::{load_export, wait_for_export, write_cleaned_csv};
use declaro_portal::{PortalSession, download_travel_export, submit_declaration};
use tracing::info;

use crate::config::Config;
use crate::prompts;
use crate::state::{self, RunReceipt};

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Full flow: export from the travel portal, clean, reconcile, then fill
/// the expense form. Missing inputs are prompted for.
pub async fn run_declare(
    config: &Config,
    year: Option<i32>,
    month: Option<u32>,
    amount: Option<f64>,
) -> Result<()> {
    let year = year.unwrap_or_else(prompts::prompt_year);
    let month = month.unwrap_or_else(prompts::prompt_month);
    let expected = amount.unwrap_or_else(prompts::prompt_amount);
    let period = DeclarationPeriod::new(year, month)?;

    println!(
        "Declaring {} with an expected total of {expected:.2}\n",
        period.label()
    );
    if let Some(last) = state::read_receipt()? {
        println!(
            "Previous declaration: {} ({} rows, total {:.2})\n",
            last.period, last.rows, last.total
        );
    }

    // Travel portal: trigger the export and wait for the file. The browser
    // must stay open until the download lands.
    let session = PortalSession::connect(&config.webdriver_url, Some(&config.downloads_dir))
        .await
        .context("starting browser for the travel portal")?;
    download_travel_export(
        &session,
        &config.travel_portal.selectors,
        &config.travel_portal.login_url,
        &period,
    )
    .await?;
    let export = wait_for_export(&config.downloads_dir, DOWNLOAD_TIMEOUT)?;
    session.quit().await?;
    println!("Export downloaded: {}", export.display());

    let cleaned = clean_transactions(
        load_export(&export).with_context(|| format!("parsing {}", export.display()))?,
    );
    println!("Parsed {} trips from the export", cleaned.len());

    match Reconciliation::check(expected, &cleaned) {
        Reconciliation::Match { total } => {
            println!("Entered amount matches the export total ({total:.2}), continuing...");
        }
        Reconciliation::Mismatch { expected, computed } => {
            println!(
                "Entered amount and export total do not match:\n\n  \
                 entered:  {expected:.2}\n  computed: {computed:.2}\n"
            );
            if !prompts::confirm("Do you want to continue anyway") {
                println!("Abort, nothing was submitted.");
                return Ok(());
            }
            println!("Continuing...");
        }
    }

    let rows = build_expense_rows(&cleaned);
    info!(rows = rows.len(), period = %period.label(), "starting form fill");

    // Expense portal: fresh browser, no download prefs needed.
    let session = PortalSession::connect(&config.webdriver_url, None)
        .await
        .context("starting browser for the expense portal")?;
    submit_declaration(
        &session,
        &config.expense_portal.selectors,
        &config.expense_portal.url,
        &config.expense_portal.category,
        &period,
        expected,
        &rows,
    )
    .await?;
    session.quit().await?;

    let receipt = RunReceipt {
        period: period.label(),
        rows: rows.len(),
        total: computed_total(&cleaned),
        finished_at_utc: chrono::Utc::now().to_rfc3339(),
    };
    state::write_receipt(&receipt)?;
    println!(
        "Declared {} rows for {}. Receipt: {}",
        receipt.rows,
        receipt.period,
        state::receipt_path()?.display()
    );

    Ok(())
}

/// Parse and clean a local export, print the planned rows, and optionally
/// reconcile and write the cleaned CSV. No browser involved.
pub fn run_inspect(file: &Path, amount: Option<f64>, out: Option<&Path>) -> Result<()> {
    let cleaned = clean_transactions(
        load_export(file).with_context(|| format!("parsing {}", file.display()))?,
    );
    let rows = build_expense_rows(&cleaned);

    println!(
        "{} trips, total {:.2}\n",
        rows.len(),
        computed_total(&cleaned)
    );
    for row in &rows {
        println!(
            "{}  #{}  {:>8}  {} -> {}",
            row.date_field(),
            row.trip_number,
            row.amount_field(),
            row.origin,
            row.destination
        );
    }

    if let Some(expected) = amount {
        match Reconciliation::check(expected, &cleaned) {
            Reconciliation::Match { total } => {
                println!("\nEntered amount matches the export total ({total:.2})");
            }
            Reconciliation::Mismatch { expected, computed } => {
                println!(
                    "\nEntered amount and export total do not match: \
                     entered {expected:.2}, computed {computed:.2}"
                );
            }
        }
    }

    if let Some(out) = out {
        write_cleaned_csv(&rows, out)?;
        println!("\nWrote cleaned rows to {}", out.display());
    }

    Ok(())
}
