//! Descriptor registry: the query surface over registered extensions.
//!
//! # Responsibility
//! - Answer enumeration, filtering, lookup and category queries.
//! - Build the categorized view consumed by creation workflows.
//!
//! # Invariants
//! - Queries are pure reads over injected extension lists and may run
//!   concurrently from any thread.

pub mod descriptor_registry;
pub mod view;
