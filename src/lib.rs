//! Dovecote: chat-driven task capture service.
//!
//! This crate turns free-form chat messages into structured task records and
//! supports a small set of imperative commands (list, complete, cancel, help)
//! against the same task store.
//!
//! # Architecture
//!
//! Dovecote follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task and owner records, persistence ports, and triage services
//! - [`chat`]: Message interpretation, command dispatch, and channel adapters

pub mod chat;
pub mod task;
