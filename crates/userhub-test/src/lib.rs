//! Test helpers shared by the UserHub SDK crates.

mod api;

pub use api::start_api_mock;
