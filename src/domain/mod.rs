//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - Service categories and their closed answer sets
//! - `record` - The form record and the patches steps write into it
//! - `pricing` - Pure estimation engine over a configurable rate table
//! - `summary` - Review panels projected from a record
//! - `wizard` - Step planning and the qualification session

pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod record;
pub mod summary;
pub mod wizard;
