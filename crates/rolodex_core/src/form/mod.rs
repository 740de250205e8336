//! Record form use-case layer.
//!
//! # Responsibility
//! - Orchestrate field editing, validation and submit dispatch into the
//!   record store.
//! - Keep the UI boundary decoupled from store and validation details.

pub mod controller;
