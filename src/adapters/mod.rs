//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Record repositories (YAML files, in-memory) and the session store
//! - `http` - Axum REST API over the qualification handlers

pub mod http;
pub mod storage;
