use userhub_api::{send_json_request, AuthRequired};
use userhub_core::ApiError;

use crate::{api::response::CurrentUserResponse, AuthClient};

impl AuthClient {
    /// Fetches the profile of the account the stored bearer token belongs
    /// to.
    pub async fn current_user(&self) -> Result<CurrentUserResponse, ApiError> {
        let config = self.client.internal.get_api_configuration();

        let builder = config
            .client
            .get(format!("{}/auth/current-user", config.base_path))
            .with_extension(AuthRequired::Bearer);

        send_json_request(builder).await.map_err(ApiError::from)
    }
}
