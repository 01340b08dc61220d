//! Screen controllers
//!
//! One controller per screen, binding a validated form to a gateway call.
//! Each controller holds its form's field values, the last error message,
//! and (for list screens) a local cache of fetched records. Submitting
//! validates first — the error message follows a fixed precedence of
//! required, then length/range, then format, fields in declaration order —
//! and only then issues the gateway call, branching on the server's success
//! flag. Controllers return a [`Route`] naming the next screen; the
//! embedding shell owns the actual navigation.

mod change_information;
mod change_password;
mod forgot_password;
mod home;
mod login;
mod message;
mod nav;
mod otp;
mod recovery;
mod register;
mod route;
mod rules;
mod users;

pub use change_information::{ChangeInformationController, ChangeInformationForm};
pub use change_password::{ChangePasswordController, ChangePasswordForm};
pub use forgot_password::{ForgotPasswordController, ForgotPasswordForm};
pub use home::HomeController;
pub use login::{LoginController, LoginForm};
pub use nav::NavController;
pub use otp::{OtpController, OtpForm};
pub use recovery::RecoveryController;
pub use register::{RegisterController, RegisterForm};
pub use route::Route;
pub use users::UsersController;
