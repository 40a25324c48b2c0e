//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod session;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository, STORE_FILE};
pub use store::{CsvRecordStore, RecordStore};
