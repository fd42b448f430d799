//! Outbound adapters.

pub mod registration;
