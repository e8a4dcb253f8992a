//! Expense-form row planning: trip numbers plus form-ready field values.

use chrono::NaiveDate;

use crate::route::parse_route;
use crate::transaction::TripTransaction;

/// One line item of the declaration, ready to be keyed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub date: NaiveDate,
    /// Per-day sequence number distinguishing legs made on the same date.
    pub trip_number: u32,
    pub amount: f64,
    pub origin: String,
    pub destination: String,
}

impl ExpenseRow {
    /// Date as the form expects it.
    pub fn date_field(&self) -> String {
        self.date.format("%d-%m-%Y").to_string()
    }

    pub fn trip_number_field(&self) -> String {
        self.trip_number.to_string()
    }

    /// Two-decimal dot notation; the form rejects comma decimals.
    pub fn amount_field(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

/// Number consecutive same-day rows 1, 2, 3…; a date change resets to 1.
/// Assumes the rows are already date-sorted (see `clean_transactions`).
pub fn assign_trip_numbers(rows: &[TripTransaction]) -> Vec<u32> {
    let mut numbers = Vec::with_capacity(rows.len());
    let mut prev_date: Option<NaiveDate> = None;
    let mut current = 0u32;

    for t in rows {
        current = if prev_date == Some(t.date) {
            current + 1
        } else {
            1
        };
        prev_date = Some(t.date);
        numbers.push(current);
    }
    numbers
}

/// Combine trip numbering with the route heuristic into form-ready rows.
pub fn build_expense_rows(rows: &[TripTransaction]) -> Vec<ExpenseRow> {
    let numbers = assign_trip_numbers(rows);
    rows.iter()
        .zip(numbers)
        .map(|(t, trip_number)| {
            let route = parse_route(&t.description);
            ExpenseRow {
                date: t.date,
                trip_number,
                amount: t.amount,
                origin: route.origin,
                destination: route.destination,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn txn(day: u32, amount: f64) -> TripTransaction {
        TripTransaction::new(d(day), "A - B", amount)
    }

    #[test]
    fn test_same_day_increments() {
        let rows = vec![txn(2, 1.0), txn(2, 2.0), txn(2, 3.0)];
        assert_eq!(assign_trip_numbers(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_date_change_resets() {
        let rows = vec![txn(2, 1.0), txn(2, 2.0), txn(3, 3.0), txn(5, 4.0), txn(5, 5.0)];
        assert_eq!(assign_trip_numbers(&rows), vec![1, 2, 1, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(assign_trip_numbers(&[]).is_empty());
    }

    #[test]
    fn test_build_rows_carries_route_and_numbering() {
        let rows = vec![
            TripTransaction::new(d(2), "Trein-uit: Amsterdam Zuid - Utrecht Centraal", 7.90),
            TripTransaction::new(d(2), "Correctietarief: niet uitgecheckt", 4.00),
        ];
        let planned = build_expense_rows(&rows);
        assert_eq!(planned.len(), 2);

        assert_eq!(planned[0].trip_number, 1);
        assert_eq!(planned[0].origin, "Amsterdam Zuid");
        assert_eq!(planned[0].destination, "Utrecht Centraal");

        assert_eq!(planned[1].trip_number, 2);
        assert_eq!(planned[1].origin, "Correctietarief");
    }

    #[test]
    fn test_field_formatting() {
        let row = ExpenseRow {
            date: d(7),
            trip_number: 2,
            amount: 2.5,
            origin: "A".to_string(),
            destination: "B".to_string(),
        };
        assert_eq!(row.date_field(), "07-03-2026");
        assert_eq!(row.trip_number_field(), "2");
        assert_eq!(row.amount_field(), "2.50");
    }
}
