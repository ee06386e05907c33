//! Core use-case services.
//!
//! # Responsibility
//! - Turn command-level intents (add, change, show) into book operations.
//! - Keep callers decoupled from storage details.

pub mod contact_service;
