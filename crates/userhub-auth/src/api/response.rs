use serde::Deserialize;

/// Server response to a login attempt.
#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    /// Whether primary authentication succeeded.
    #[serde(default)]
    pub success: bool,
    /// Fresh bearer token, present on success. Not yet MFA-satisfied.
    pub access_token: Option<String>,
    /// TOTP provisioning QR image, present when the account has not yet
    /// enrolled an authenticator.
    pub otp_qr_code_base64: Option<String>,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

/// Server response to an OTP verification.
#[derive(Deserialize, Debug)]
pub struct VerifyOtpResponse {
    /// Whether the code was accepted.
    #[serde(default)]
    pub success: bool,
    /// Fresh, MFA-satisfied bearer token, present on success.
    pub access_token: Option<String>,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

/// Server response carrying the account's recovery codes.
#[derive(Deserialize, Debug)]
pub struct DownloadRecoveryOtpResponse {
    /// Whether the codes could be produced.
    #[serde(default)]
    pub success: bool,
    /// The recovery codes, present on success.
    pub list_otp_recovery: Option<Vec<String>>,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

/// Server response to a recovery-code verification.
#[derive(Deserialize, Debug)]
pub struct VerifyRecoveryOtpResponse {
    /// Whether the recovery code was accepted.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

/// Server response to a password-reset request.
#[derive(Deserialize, Debug)]
pub struct ForgotPasswordResponse {
    /// Whether the reset was initiated.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

/// Server response to a password change.
#[derive(Deserialize, Debug)]
pub struct ChangePasswordResponse {
    /// Whether the password was changed.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

/// Server response to a registration.
#[derive(Deserialize, Debug)]
pub struct RegisterUserResponse {
    /// Whether the account was created.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
}

/// Server response describing the signed-in account.
#[derive(Deserialize, Debug)]
pub struct CurrentUserResponse {
    /// Whether the lookup succeeded.
    #[serde(default)]
    pub success: bool,
    /// Human-readable failure reason.
    pub message: Option<String>,
    /// The signed-in account's profile.
    pub user: Option<UserProfile>,
}

/// The signed-in account's profile as the auth endpoints report it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Record id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Contact email.
    pub email: String,
    /// Whether the account has the admin role.
    pub is_admin: bool,
}
