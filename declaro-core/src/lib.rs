//! declaro-core: period math, export-table cleanup, reconciliation and
//! expense-row planning for monthly transit declarations.

pub mod clean;
pub mod period;
pub mod reconcile;
pub mod route;
pub mod rows;
pub mod transaction;

pub use clean::clean_transactions;
pub use period::DeclarationPeriod;
pub use reconcile::{Reconciliation, computed_total};
pub use route::{DEFAULT_DESTINATION, DEFAULT_ORIGIN, RouteEndpoints, parse_route};
pub use rows::{ExpenseRow, assign_trip_numbers, build_expense_rows};
pub use transaction::TripTransaction;
