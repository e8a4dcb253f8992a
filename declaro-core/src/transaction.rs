use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized row of the operator's travel export (format-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripTransaction {
    pub date: NaiveDate,
    /// Free-text description; carries the origin/destination when present.
    pub description: String,
    /// Price including tax. Zero rows are check-in/service events, not trips.
    pub amount: f64,
}

impl TripTransaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Zero at cent resolution, so `0.004999` from a float cell still counts.
    pub fn is_zero(&self) -> bool {
        (self.amount * 100.0).round() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero_at_cent_resolution() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        assert!(TripTransaction::new(date, "check-in", 0.0).is_zero());
        assert!(TripTransaction::new(date, "rounding noise", 0.0049).is_zero());
        assert!(!TripTransaction::new(date, "trip", 0.01).is_zero());
        assert!(!TripTransaction::new(date, "refund", -2.50).is_zero());
    }
}
