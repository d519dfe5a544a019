//! Unit tests for the task module.
//!
//! Organised by layer: domain invariants, the in-memory store's ordering
//! contract, orchestration services, and the diesel row mapping.

mod categorize_tests;
mod memory_store_tests;
mod postgres_mapping_tests;
