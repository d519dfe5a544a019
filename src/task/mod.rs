//! Task and owner records for Dovecote.
//!
//! This module owns the task lifecycle: structured task records captured from
//! chat messages, the owners those tasks belong to, and the triage services
//! that act on persisted tasks. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
