//! Authentication module
//!
//! Contains all the authentication related functionality: primary login,
//! the OTP second factor, recovery codes, password recovery and change,
//! registration, and logout.

pub mod api;

mod auth_client;
mod current_user;
mod login;
mod logout;
mod otp;
mod password;
mod recovery;
mod register;

pub use auth_client::{AuthClient, AuthClientExt};
