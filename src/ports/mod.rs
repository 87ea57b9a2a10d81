//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuoteRecordRepository` - Load and save qualification records per quote
//! - `ActiveSessionStore` - Sessions in progress between requests

mod active_session_store;
mod quote_record_repository;

pub use active_session_store::ActiveSessionStore;
pub use quote_record_repository::QuoteRecordRepository;
