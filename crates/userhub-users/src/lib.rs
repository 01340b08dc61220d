//! User directory module
//!
//! CRUD wrapper over the `/users` endpoints: list the directory, fetch a
//! single record, update the calling user's profile, and delete accounts.
//! All calls are bearer-authenticated.

pub mod api;

mod users_client;

pub use users_client::{GetUserError, UsersClient, UsersClientExt};
