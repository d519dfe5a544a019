//! Unit tests for the chat module.
//!
//! Organised by concern: classification, reply rendering, the lenient
//! extraction boundary, command dispatch, and the webhook processors.

mod command_tests;
mod extraction_tests;
