use thiserror::Error;
use userhub_api::{send_json_request, AuthRequired};
use userhub_core::{require, ApiError, Client, MissingFieldError};

use crate::api::{RemoveUserResponse, UpdateUserRequest, User, UserListResponse, UserResponse};

/// Error type for single-record lookups.
#[derive(Debug, Error)]
pub enum GetUserError {
    /// API error occurred during the lookup.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A required field was missing in the response.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

/// Sub-client for the user directory.
#[derive(Clone)]
pub struct UsersClient {
    pub(crate) client: Client,
}

impl UsersClient {
    /// Constructs a new `UsersClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists every record in the directory.
    pub async fn list(&self) -> Result<UserListResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .get(format!("{}/users", config.base_path))
            .with_extension(AuthRequired::Bearer);

        send_json_request(builder).await.map_err(ApiError::from)
    }

    /// Fetches a single record by id.
    pub async fn get_one(&self, id: i64) -> Result<User, GetUserError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .get(format!("{}/users/{}", config.base_path, id))
            .with_extension(AuthRequired::Bearer);

        let response: UserResponse = send_json_request(builder).await.map_err(ApiError::from)?;
        Ok(require!(response.user))
    }

    /// Updates the calling user's profile. Unset fields are omitted from
    /// the body, never sent as empty-string overwrites.
    pub async fn update(&self, request: &UpdateUserRequest) -> Result<UserResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .put(format!("{}/users", config.base_path))
            .with_extension(AuthRequired::Bearer)
            .json(request);

        send_json_request(builder).await.map_err(ApiError::from)
    }

    /// Deletes the record with the given id. There is no rollback; callers
    /// drop the record from any local cache only after this confirms.
    pub async fn delete(&self, id: i64) -> Result<RemoveUserResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .delete(format!("{}/users/{}", config.base_path, id))
            .with_extension(AuthRequired::Bearer);

        send_json_request(builder).await.map_err(ApiError::from)
    }
}

/// Extension trait for `Client` to provide access to the `UsersClient`.
pub trait UsersClientExt {
    /// Creates a new `UsersClient` instance.
    fn users(&self) -> UsersClient;
}

impl UsersClientExt for Client {
    fn users(&self) -> UsersClient {
        UsersClient {
            client: self.clone(),
        }
    }
}
