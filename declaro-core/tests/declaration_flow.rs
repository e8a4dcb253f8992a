use chrono::NaiveDate;
use declaro_core::{
    DeclarationPeriod, Reconciliation, build_expense_rows, clean_transactions, computed_total,
    TripTransaction,
};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

/// A raw export the way the operator delivers it: unsorted, with zero-amount
/// service rows and a trailing totals row.
fn raw_export() -> Vec<TripTransaction> {
    vec![
        TripTransaction::new(d(12), "Trein-uit: Utrecht Centraal - Amsterdam Zuid", 8.20),
        TripTransaction::new(d(3), "Trein-uit: Amsterdam Zuid - Utrecht Centraal", 8.20),
        TripTransaction::new(d(3), "Saldo automatisch opgeladen", 0.0),
        TripTransaction::new(d(3), "Bus, halte Vredenburg naar halte Jaarbeurs", 2.10),
        TripTransaction::new(d(12), "Correctietarief: vergeten uit te checken", 4.00),
        TripTransaction::new(d(28), "Totaal", 22.50),
    ]
}

#[test]
fn test_clean_then_reconcile_then_plan() {
    let cleaned = clean_transactions(raw_export());

    // Totals row and the zero row are gone; dates ascend.
    assert_eq!(cleaned.len(), 4);
    assert!(cleaned.windows(2).all(|w| w[0].date <= w[1].date));

    assert_eq!(computed_total(&cleaned), 22.50);
    assert!(Reconciliation::check(22.50, &cleaned).is_match());

    let rows = build_expense_rows(&cleaned);
    assert_eq!(rows.len(), 4);

    // Feb 3: two trips, numbered 1 and 2; Feb 12 resets.
    assert_eq!(rows[0].trip_number, 1);
    assert_eq!(rows[1].trip_number, 2);
    assert_eq!(rows[2].trip_number, 1);
    assert_eq!(rows[3].trip_number, 2);

    // Routes survive the pipeline.
    assert_eq!(rows[0].origin, "Amsterdam Zuid");
    assert_eq!(rows[0].destination, "Utrecht Centraal");
    assert_eq!(rows[1].origin, "halte Vredenburg");
    assert_eq!(rows[3].origin, "Correctietarief");
}

#[test]
fn test_mismatch_reports_computed_total() {
    let cleaned = clean_transactions(raw_export());
    match Reconciliation::check(20.00, &cleaned) {
        Reconciliation::Mismatch { expected, computed } => {
            assert_eq!(expected, 20.00);
            assert_eq!(computed, 22.50);
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}

#[test]
fn test_period_covers_the_export() {
    let period = DeclarationPeriod::new(2026, 2).unwrap();
    let cleaned = clean_transactions(raw_export());
    assert!(
        cleaned
            .iter()
            .all(|t| t.date >= period.first_day() && t.date <= period.last_day())
    );
}
