use serde::Serialize;

/// Credentials for primary authentication. Sent as query parameters,
/// matching the server contract.
#[derive(Serialize, Debug)]
pub struct LoginRequest {
    /// Username of the account to authenticate.
    pub username: String,
    /// Password of the account to authenticate.
    pub password: String,
}

/// A TOTP code for the second authentication factor.
#[derive(Serialize, Debug)]
pub struct VerifyOtpRequest {
    /// The 6-digit code from the authenticator app.
    pub code: String,
}

/// A recovery code standing in for a lost authenticator. Sent as a query
/// parameter.
#[derive(Serialize, Debug)]
pub struct VerifyRecoveryOtpRequest {
    /// One of the recovery codes handed out at enrollment.
    pub code: String,
}

/// Identification for a password reset. Sent as query parameters.
#[derive(Serialize, Debug)]
pub struct ForgotPasswordRequest {
    /// Username of the account to reset.
    pub username: String,
    /// Email the reset is delivered to; must match the account.
    pub email: String,
}

/// A new password for the calling account.
#[derive(Serialize, Debug)]
pub struct ChangePasswordRequest {
    /// The new password.
    pub password: String,
    /// Confirmation, checked server-side to equal `password`.
    pub password_confirm: String,
}

/// A new account. Only admins may call the registration endpoint.
#[derive(Serialize, Debug)]
pub struct RegisterUserRequest {
    /// Login name of the new account.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Confirmation, checked server-side to equal `password`.
    pub password_confirm: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Whether the new account has the admin role.
    pub is_admin: bool,
}
