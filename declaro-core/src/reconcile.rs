//! Reconciliation: does the cleaned export add up to what the user expects?

use crate::transaction::TripTransaction;

/// Sum of the cleaned amounts, rounded to two decimals.
pub fn computed_total(rows: &[TripTransaction]) -> f64 {
    let sum: f64 = rows.iter().map(|t| t.amount).sum();
    (sum * 100.0).round() / 100.0
}

/// Outcome of comparing the user-entered total against the export.
///
/// A mismatch is a soft warning: the caller decides whether the operator
/// gets to continue anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reconciliation {
    Match { total: f64 },
    Mismatch { expected: f64, computed: f64 },
}

impl Reconciliation {
    pub fn check(expected: f64, rows: &[TripTransaction]) -> Self {
        let computed = computed_total(rows);
        // Compare in cents so float noise never trips a false mismatch.
        if (expected * 100.0).round() as i64 == (computed * 100.0).round() as i64 {
            Reconciliation::Match { total: computed }
        } else {
            Reconciliation::Mismatch { expected, computed }
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Reconciliation::Match { .. })
    }
}
