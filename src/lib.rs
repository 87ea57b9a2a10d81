//! Quote Qualifier - guided project qualification with live estimates
//!
//! A prospect picks a service category, answers the steps planned for it,
//! and sees a price range recomputed after every answer. The finished
//! record is stored against its quote and can be resumed later.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
