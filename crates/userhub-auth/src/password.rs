use userhub_api::{send_json_request, AuthRequired};
use userhub_core::ApiError;

use crate::{
    api::{
        request::{ChangePasswordRequest, ForgotPasswordRequest},
        response::{ChangePasswordResponse, ForgotPasswordResponse},
    },
    AuthClient,
};

impl AuthClient {
    /// Initiates a password reset for the given username/email pair.
    /// Unauthenticated: this is how locked-out users get back in.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();
        let query = serde_qs::to_string(request).expect("Serialize should be infallible");

        let builder = config
            .client
            .post(format!("{}/auth/forgot-password?{}", config.base_path, query));

        send_json_request(builder).await.map_err(ApiError::from)
    }

    /// Changes the calling account's password.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .put(format!("{}/auth/change-password", config.base_path))
            .with_extension(AuthRequired::Bearer)
            .json(request);

        send_json_request(builder).await.map_err(ApiError::from)
    }
}
