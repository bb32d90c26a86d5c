//! Infrastructure layer: adapters for the application ports and journal I/O.

pub mod journal;
pub mod persistence;

pub use journal::{JournalError, JournalFile, load_journal, parse_journal};
