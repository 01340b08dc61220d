/// Navigation target produced by a controller.
///
/// The embedding shell owns the routing table; controllers only name the
/// destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The login screen.
    Login,
    /// The landing screen.
    Home,
    /// OTP entry; carries the provisioning QR image when the account still
    /// needs authenticator enrollment.
    Otp {
        /// Base64 provisioning QR image handed to the OTP screen.
        otp_qr_code_base64: Option<String>,
    },
    /// The user administration list.
    Users,
}
