//! Export-table cleanup.
//!
//! The operator's export always ends with a totals row, and check-in/out
//! service events appear as zero-amount rows between the real trips.

use crate::transaction::TripTransaction;

/// Drop the trailing totals row, remove zero-amount rows, and sort the
/// remainder ascending by date. The totals row is dropped unconditionally,
/// even if it happens to look like a trip.
pub fn clean_transactions(mut rows: Vec<TripTransaction>) -> Vec<TripTransaction> {
    rows.pop();
    rows.retain(|t| !t.is_zero());
    // Stable sort keeps the export's intra-day ordering.
    rows.sort_by_key(|t| t.date);
    rows
}
