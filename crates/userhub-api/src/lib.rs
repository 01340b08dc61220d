//! Base types and utilities for UserHub API clients.
//!
//! This crate provides common functionality shared across all UserHub API
//! client crates:
//! - Configuration types for API clients
//! - Error handling types
//! - Request sending and response parsing helpers

mod configuration;
mod error;
mod util;

pub use configuration::Configuration;
pub use error::{Error, ResponseContent};
pub use util::{send_json_request, AuthRequired};
