//! Spreadsheet flavour of the travel-history export (.xls/.xlsx).

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::NaiveDate;
use declaro_core::TripTransaction;

use super::{AMOUNT_HEADER, DATE_HEADER, DESCRIPTION_HEADER, parse_amount_text, parse_date_text};

pub fn parse_travel_xlsx(path: impl AsRef<Path>) -> Result<Vec<TripTransaction>> {
    let mut workbook = open_workbook_auto(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no sheets")?
        .context("reading first sheet")?;
    parse_rows(range.rows())
}

/// Same contract as the CSV parser: preamble rows are skipped until the
/// header row is found; a dateless row with an amount (the trailing totals
/// row) inherits the previous row's date.
fn parse_rows<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Result<Vec<TripTransaction>> {
    let mut columns: Option<(usize, usize, usize)> = None;
    let mut prev_date: Option<NaiveDate> = None;
    let mut txns = Vec::new();

    for row in rows {
        let Some((date_col, desc_col, amount_col)) = columns else {
            columns = header_columns(row);
            continue;
        };

        let date = row.get(date_col).and_then(cell_date);
        let description = row
            .get(desc_col)
            .and_then(|c| c.get_string())
            .unwrap_or("")
            .trim()
            .to_string();
        let amount = row.get(amount_col).and_then(cell_amount);

        match (date, amount) {
            (Some(date), amount) => {
                prev_date = Some(date);
                txns.push(TripTransaction::new(date, description, amount.unwrap_or(0.0)));
            }
            (None, Some(amount)) => {
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

fn header_columns(row: &[Data]) -> Option<(usize, usize, usize)> {
    let mut date_col = None;
    let mut desc_col = None;
    let mut amount_col = None;

    for (pos, cell) in row.iter().enumerate() {
        match cell.get_string().map(str::trim) {
            Some(DATE_HEADER) => date_col = Some(pos),
            Some(DESCRIPTION_HEADER) => desc_col = Some(pos),
            Some(AMOUNT_HEADER) => amount_col = Some(pos),
            _ => {}
        }
    }
    Some((date_col?, desc_col?, amount_col?))
}

/// Date cells are text in the .xls export, native datetimes in newer files.
fn cell_date(cell: &Data) -> Option<NaiveDate> {
    if let Some(text) = cell.get_string() {
        return parse_date_text(text);
    }
    cell.as_date()
}

fn cell_amount(cell: &Data) -> Option<f64> {
    if let Some(text) = cell.get_string() {
        return parse_amount_text(text);
    }
    cell.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    fn sheet() -> Vec<Vec<Data>> {
        vec![
            vec![s("Reistransacties"), Data::Empty, Data::Empty],
            vec![Data::Empty, Data::Empty, Data::Empty],
            vec![s("Datum"), s("Omschrijving"), s("Prijs (incl. btw)")],
            vec![
                s("03-02-2026"),
                s("Trein-uit: Amsterdam Zuid - Utrecht Centraal"),
                Data::Float(8.20),
            ],
            vec![s("03-02-2026"), s("Check-in"), Data::Float(0.0)],
            vec![s("12-02-2026"), s("Bus, halte A naar halte B"), s("2,10")],
            vec![Data::Empty, s("Totaal"), Data::Float(10.30)],
        ]
    }

    #[test]
    fn test_parses_after_header_row() {
        let rows = sheet();
        let txns = parse_rows(rows.iter().map(|r| r.as_slice())).unwrap();
        assert_eq!(txns.len(), 4);

        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2026, 2, 3).unwrap());
        assert_eq!(txns[0].amount, 8.20);
        assert!(txns[1].is_zero());
    }

    #[test]
    fn test_text_amount_with_comma_decimal() {
        let rows = sheet();
        let txns = parse_rows(rows.iter().map(|r| r.as_slice())).unwrap();
        assert_eq!(txns[2].amount, 2.10);
    }

    #[test]
    fn test_totals_row_kept_with_inherited_date() {
        let rows = sheet();
        let txns = parse_rows(rows.iter().map(|r| r.as_slice())).unwrap();
        let last = txns.last().unwrap();
        assert_eq!(last.description, "Totaal");
        assert_eq!(last.date, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());
    }

    #[test]
    fn test_no_header_errors() {
        let rows = vec![vec![s("a"), s("b"), s("c")]];
        assert!(parse_rows(rows.iter().map(|r| r.as_slice())).is_err());
    }
}
