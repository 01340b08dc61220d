//! Request and response models for the user directory endpoints.

mod models;

pub use models::{
    RemoveUserResponse, UpdateUserRequest, User, UserListResponse, UserResponse,
};
