//! Record-keeping CSV of the cleaned declaration rows.

use std::path::Path;

use anyhow::{Context, Result};
use declaro_core::ExpenseRow;

/// Write the planned rows as a CSV next to the declaration, for the
/// operator's own records.
pub fn write_cleaned_csv(rows: &[ExpenseRow], path: impl AsRef<Path>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;

    wtr.write_record(["Date", "Trip", "Amount", "From", "To"])?;
    for row in rows {
        wtr.write_record([
            row.date_field(),
            row.trip_number_field(),
            row.amount_field(),
            row.origin.clone(),
            row.destination.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
