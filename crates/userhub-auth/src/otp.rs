use userhub_api::{send_json_request, AuthRequired};
use userhub_core::ApiError;

use crate::{
    api::{request::VerifyOtpRequest, response::VerifyOtpResponse},
    AuthClient,
};

impl AuthClient {
    /// Verifies a TOTP code for the second authentication factor.
    ///
    /// On success the caller stores the returned token, which is fresh and
    /// now MFA-satisfied. On failure the token store must not be touched.
    pub async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .post(format!("{}/auth/mfa/verify-otp", config.base_path))
            .with_extension(AuthRequired::Bearer)
            .json(request);

        send_json_request(builder).await.map_err(ApiError::from)
    }
}
