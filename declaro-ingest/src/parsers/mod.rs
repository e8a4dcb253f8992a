//! Export parsers for the operator's travel-history downloads.
//!
//! The same table ships in two flavours (spreadsheet and CSV); both carry a
//! date column, a free-text description and a price-including-tax column.

pub mod travel_csv;
pub mod travel_xlsx;

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use declaro_core::TripTransaction;

pub(crate) const DATE_HEADER: &str = "Datum";
pub(crate) const DESCRIPTION_HEADER: &str = "Omschrijving";
pub(crate) const AMOUNT_HEADER: &str = "Prijs (incl. btw)";

/// Parse an export file, picking the parser from the extension.
pub fn load_export(path: impl AsRef<Path>) -> Result<Vec<TripTransaction>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        travel_csv::parse_travel_csv(path)
    } else {
        travel_xlsx::parse_travel_xlsx(path)
    }
}

/// Dates appear as dd-mm-yyyy in the portal export, but ISO and slashed
/// variants show up in older files.
pub(crate) fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    for fmt in ["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date);
        }
    }
    None
}

/// Amounts may use a comma decimal in the Dutch export flavour.
pub(crate) fn parse_amount_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(v) = text.parse::<f64>() {
        return Some(v);
    }
    text.replace(',', ".").parse::<f64>().ok()
}
