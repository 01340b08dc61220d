use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the target and
/// behavior of the UserHub Client. They are optional and uneditable once the
/// client is initialized.
///
/// Defaults to
///
/// ```
/// # use userhub_core::ClientSettings;
/// let settings = ClientSettings {
///     api_url: "https://api.userhub.dev".to_string(),
///     user_agent: "UserHub Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the targeted UserHub instance. Defaults to `https://api.userhub.dev`
    pub api_url: String,
    /// The user_agent sent to the server. Defaults to `UserHub Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.userhub.dev".into(),
            user_agent: "UserHub Rust-SDK".into(),
        }
    }
}
