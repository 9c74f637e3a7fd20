pub mod csv_store;
pub mod records;

pub use csv_store::{CsvStore, read_event_rows, read_summary_rows};
pub use records::{SummaryRecord, TeamRecord};
