//! Storage Adapters
//!
//! Implementations of the persistence ports.
//!
//! ## Available Adapters
//!
//! - **FileQuoteRecordRepository** - Finished records as YAML files on disk
//! - **InMemoryQuoteRecordRepository** - Finished records in memory (testing/development)
//! - **InMemorySessionStore** - Sessions in progress
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileQuoteRecordRepository, InMemorySessionStore};
//!
//! let records = FileQuoteRecordRepository::new("./data/qualifications");
//! let sessions = InMemorySessionStore::new();
//! ```

mod file_record_repository;
mod in_memory_record_repository;
mod in_memory_session_store;

pub use file_record_repository::FileQuoteRecordRepository;
pub use in_memory_record_repository::InMemoryQuoteRecordRepository;
pub use in_memory_session_store::InMemorySessionStore;
