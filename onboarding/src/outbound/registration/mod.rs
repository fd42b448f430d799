//! Outbound adapter for the user-registration endpoint.

mod dto;
mod http_client;

pub use http_client::{RegistrationConfig, RegistrationHttpClient};
