#![doc = include_str!("../README.md")]

/// This module provides the generic storage interface for session values.
pub mod store;

mod memory;

pub use memory::MemorySessionStore;
pub use store::SessionStore;
