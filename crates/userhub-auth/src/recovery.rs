use userhub_api::{send_json_request, AuthRequired};
use userhub_core::ApiError;

use crate::{
    api::{
        request::VerifyRecoveryOtpRequest,
        response::{DownloadRecoveryOtpResponse, VerifyRecoveryOtpResponse},
    },
    AuthClient,
};

impl AuthClient {
    /// Fetches the account's recovery codes, shown once so the user can
    /// store them offline.
    pub async fn download_recovery_otp(&self) -> Result<DownloadRecoveryOtpResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .get(format!("{}/auth/mfa/download-recovery-otp", config.base_path))
            .with_extension(AuthRequired::Bearer);

        send_json_request(builder).await.map_err(ApiError::from)
    }

    /// Verifies a recovery code in place of a lost authenticator.
    pub async fn verify_recovery_otp(
        &self,
        request: &VerifyRecoveryOtpRequest,
    ) -> Result<VerifyRecoveryOtpResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();
        let query = serde_qs::to_string(request).expect("Serialize should be infallible");

        let builder = config
            .client
            .post(format!(
                "{}/auth/mfa/verify-recovery-otp?{}",
                config.base_path, query
            ))
            .with_extension(AuthRequired::Bearer);

        send_json_request(builder).await.map_err(ApiError::from)
    }
}
