//! Message interpretation and command dispatch for Dovecote.
//!
//! This module is the decision-making layer of the service: it classifies an
//! inbound chat message into a command, extracts structured task fields from
//! natural language with bounded confidence, and applies the corresponding
//! state transition to the owner's task list. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`] (classifier, positional addressing, oracle
//!   projection)
//! - Port contracts in [`ports`] (extraction oracle, outbound channel,
//!   re-categorization queue)
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`] (dispatcher, lenient extraction
//!   boundary, reply rendering)

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
