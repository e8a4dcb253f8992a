//! declaro-ingest: locating the operator's export download and parsing it
//! into typed transactions.

pub mod cleaned_csv;
pub mod downloads;
pub mod parsers;

pub use cleaned_csv::write_cleaned_csv;
pub use downloads::{latest_download, wait_for_export};
pub use parsers::load_export;
