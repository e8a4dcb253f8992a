//! declaro-portal: WebDriver automation for the two portals.
//!
//! Both portals require a manual login; the session pauses for the operator
//! and resumes on Enter. Element identifiers are not a stable contract, so
//! they live in serde structs the config file can override.

pub mod expense_form;
pub mod selectors;
pub mod session;
pub mod travel_history;

pub use expense_form::submit_declaration;
pub use selectors::{ExpenseFormSelectors, TravelPortalSelectors};
pub use session::PortalSession;
pub use travel_history::download_travel_export;
