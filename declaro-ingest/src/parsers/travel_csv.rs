//! CSV flavour of the travel-history export.
//!
//! Layout mirrors the spreadsheet: optional preamble rows, then a header
//! row naming the columns, then data rows and a trailing totals row.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use declaro_core::TripTransaction;

use super::{AMOUNT_HEADER, DATE_HEADER, DESCRIPTION_HEADER, parse_amount_text, parse_date_text};

pub fn parse_travel_csv(path: impl AsRef<Path>) -> Result<Vec<TripTransaction>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_travel_csv_reader(file)
}

/// Parse the CSV export from any reader.
///
/// Rows before the header are skipped. A data row without a parseable date
/// (the trailing totals row) inherits the previous row's date so the table
/// keeps its shape for the cleaning step, which drops the last row.
pub fn parse_travel_csv_reader<R: Read>(reader: R) -> Result<Vec<TripTransaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut columns: Option<(usize, usize, usize)> = None;
    let mut prev_date: Option<NaiveDate> = None;
    let mut txns = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let Some((date_col, desc_col, amount_col)) = columns else {
            columns = header_columns(record.iter());
            continue;
        };

        let date_text = record.get(date_col).unwrap_or("");
        let description = record.get(desc_col).unwrap_or("").trim().to_string();
        let amount = record.get(amount_col).and_then(parse_amount_text);

        match (parse_date_text(date_text), amount) {
            (Some(date), amount) => {
                prev_date = Some(date);
                txns.push(TripTransaction::new(date, description, amount.unwrap_or(0.0)));
            }
            (None, Some(amount)) => {
                // Totals row: no date, but an amount.
                if let Some(date) = prev_date {
                    txns.push(TripTransaction::new(date, description, amount));
                }
            }
            (None, None) => continue,
        }
    }

    columns.context("export has no header row naming the expected columns")?;
    Ok(txns)
}

fn header_columns<'a>(fields: impl Iterator<Item = &'a str>) -> Option<(usize, usize, usize)> {
    let mut date_col = None;
    let mut desc_col = None;
    let mut amount_col = None;

    for (pos, field) in fields.enumerate() {
        match field.trim() {
            DATE_HEADER => date_col = Some(pos),
            DESCRIPTION_HEADER => desc_col = Some(pos),
            AMOUNT_HEADER => amount_col = Some(pos),
            _ => {}
        }
    }
    Some((date_col?, desc_col?, amount_col?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Reistransacties,,,
,,,
Datum,Transactie,Omschrijving,Prijs (incl. btw)
03-02-2026,Check-uit,Trein-uit: Amsterdam Zuid - Utrecht Centraal,8.20
03-02-2026,Check-in,Saldo automatisch opgeladen,0
12-02-2026,Check-uit,\"Bus, halte Vredenburg naar halte Jaarbeurs\",\"2,10\"
,,Totaal,10.30
";

    #[test]
    fn test_parses_rows_after_header() {
        let txns = parse_travel_csv_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(txns.len(), 4);

        assert_eq!(
            txns[0].date,
            NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
        );
        assert!(txns[0].description.contains("Amsterdam Zuid"));
        assert_eq!(txns[0].amount, 8.20);
    }

    #[test]
    fn test_comma_decimal_amount() {
        let txns = parse_travel_csv_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(txns[2].amount, 2.10);
    }

    #[test]
    fn test_totals_row_inherits_previous_date() {
        let txns = parse_travel_csv_reader(EXPORT.as_bytes()).unwrap();
        let last = txns.last().unwrap();
        assert_eq!(last.description, "Totaal");
        assert_eq!(last.date, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());
        assert_eq!(last.amount, 10.30);
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let result = parse_travel_csv_reader("a,b,c\n1,2,3\n".as_bytes());
        assert!(result.is_err());
    }
}
