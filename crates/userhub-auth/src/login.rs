use tracing::debug;
use userhub_api::send_json_request;
use userhub_core::ApiError;

use crate::{
    api::{request::LoginRequest, response::LoginResponse},
    AuthClient,
};

impl AuthClient {
    /// Performs primary authentication with username and password.
    ///
    /// Exactly one request, no retry. On `success` the caller stores the
    /// returned token and routes on `otp_qr_code_base64`: present means the
    /// account still needs authenticator enrollment.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        debug!(username = %request.username, "logging in");

        let config = self.client.internal.get_api_configuration();
        let query = serde_qs::to_string(request).expect("Serialize should be infallible");

        let builder = config
            .client
            .post(format!("{}/auth/login?{}", config.base_path, query));

        send_json_request(builder).await.map_err(ApiError::from)
    }
}
