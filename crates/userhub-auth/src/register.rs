use tracing::debug;
use userhub_api::{send_json_request, AuthRequired};
use userhub_core::ApiError;

use crate::{
    api::{request::RegisterUserRequest, response::RegisterUserResponse},
    AuthClient,
};

impl AuthClient {
    /// Registers a new account. The endpoint is admin-only, so the request
    /// carries the caller's bearer token.
    pub async fn register_user(
        &self,
        request: &RegisterUserRequest,
    ) -> Result<RegisterUserResponse, ApiError> {
        debug!(username = %request.username, "registering user");

        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .post(format!("{}/auth/register", config.base_path))
            .with_extension(AuthRequired::Bearer)
            .json(request);

        send_json_request(builder).await.map_err(ApiError::from)
    }
}
