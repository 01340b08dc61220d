//! End-to-end screen flows against a mocked server.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use userhub_core::{Client, ClientSettings};
use userhub_pages::{
    LoginController, NavController, OtpController, RegisterController, Route, UsersController,
};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

fn make_client(server: &MockServer) -> Client {
    Client::new(Some(ClientSettings {
        api_url: server.uri(),
        user_agent: "UserHub Rust-SDK [TEST]".into(),
    }))
}

/// An unsigned JWT with the given admin claim.
fn make_jwt(is_admin: bool) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({
            "exp": 4_102_444_800_i64,
            "username": "jdoe",
            "sub": 1,
            "is_admin": is_admin,
        })
        .to_string(),
    );
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

fn user_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "username": format!("user{id}"),
        "name": format!("User {id}"),
        "age": 30,
        "email": format!("user{id}@example.com"),
        "is_admin": false,
    })
}

#[tokio::test]
async fn login_with_provisioning_routes_to_otp_setup() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "access_token": make_jwt(false),
            "otp_qr_code_base64": "aVFS",
        })))
        .mount(&server)
        .await;

    let client = make_client(&server);
    let mut controller = LoginController::activate(&client);
    controller.form.username = "jdoe".into();
    controller.form.password = "hunter22".into();

    let route = controller.submit().await;
    assert_eq!(
        route,
        Some(Route::Otp {
            otp_qr_code_base64: Some("aVFS".to_string()),
        })
    );
    assert_eq!(client.internal.tokens().get(), Some(make_jwt(false)));
}

#[tokio::test]
async fn login_without_provisioning_routes_to_plain_otp_entry() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "access_token": make_jwt(false),
        })))
        .mount(&server)
        .await;

    let client = make_client(&server);
    let mut controller = LoginController::activate(&client);
    controller.form.username = "jdoe".into();
    controller.form.password = "hunter22".into();

    let route = controller.submit().await;
    assert_eq!(
        route,
        Some(Route::Otp {
            otp_qr_code_base64: None,
        })
    );
}

#[tokio::test]
async fn failed_login_stays_on_the_form_with_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "bad creds",
        })))
        .mount(&server)
        .await;

    let client = make_client(&server);
    let mut controller = LoginController::activate(&client);
    controller.form.username = "jdoe".into();
    controller.form.password = "wrong".into();

    let route = controller.submit().await;
    assert_eq!(route, None);
    assert_eq!(controller.error_message.as_deref(), Some("bad creds"));
    assert_eq!(client.internal.tokens().get(), None);
}

#[tokio::test]
async fn register_password_mismatch_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let mut controller = RegisterController::activate(&client);
    controller.form.username = "newbie".into();
    controller.form.password = "abc123".into();
    controller.form.password_confirm = "xyz789".into();
    controller.form.email = "newbie@example.com".into();
    controller.form.name = "New User".into();
    controller.form.age = Some(30);

    let route = controller.submit().await;
    assert_eq!(route, None);
    assert_eq!(
        controller.error_message.as_deref(),
        Some("Passwords do not match")
    );
}

#[tokio::test]
async fn otp_verification_replaces_the_stored_token_and_routes_home() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/mfa/verify-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "access_token": make_jwt(true),
        })))
        .mount(&server)
        .await;

    let client = make_client(&server);
    client.internal.tokens().set("primary-token".to_string());

    let mut controller = OtpController::activate(&client, None);
    controller.form.otp = "123456".into();

    let route = controller.verify_otp().await;
    assert_eq!(route, Some(Route::Home));
    assert_eq!(client.internal.tokens().get(), Some(make_jwt(true)));
}

#[tokio::test]
async fn rejected_otp_leaves_the_stored_token_untouched() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/mfa/verify-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
        })))
        .mount(&server)
        .await;

    let client = make_client(&server);
    client.internal.tokens().set("primary-token".to_string());

    let mut controller = OtpController::activate(&client, None);
    controller.form.otp = "000000".into();

    let route = controller.verify_otp().await;
    assert_eq!(route, None);
    assert_eq!(controller.error_message.as_deref(), Some("Invalid OTP code"));
    assert_eq!(
        client.internal.tokens().get(),
        Some("primary-token".to_string())
    );
}

#[tokio::test]
async fn confirmed_delete_prunes_the_local_list() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "users": [user_json(5), user_json(7)],
        })))
        .mount(&server)
        .await;
    Mock::given(matchers::method("DELETE"))
        .and(matchers::path("/users/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
        })))
        .mount(&server)
        .await;

    let client = make_client(&server);
    let mut controller = UsersController::activate(&client).await;
    assert_eq!(controller.users.len(), 2);

    controller.remove_user(5).await;
    let remaining: Vec<i64> = controller.users.iter().map(|user| user.id).collect();
    assert_eq!(remaining, vec![7]);
}

#[tokio::test]
async fn unconfirmed_delete_leaves_the_local_list_untouched() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "users": [user_json(5), user_json(7)],
        })))
        .mount(&server)
        .await;
    Mock::given(matchers::method("DELETE"))
        .and(matchers::path("/users/5"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Admin role required",
        })))
        .mount(&server)
        .await;

    let client = make_client(&server);
    let mut controller = UsersController::activate(&client).await;

    controller.remove_user(5).await;
    assert_eq!(controller.users.len(), 2);
    assert_eq!(
        controller.error_message.as_deref(),
        Some("Admin role required")
    );
}

#[tokio::test]
async fn logout_clears_the_session_even_when_the_server_fails() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = make_client(&server);
    client.internal.tokens().set(make_jwt(true));

    let nav = NavController::activate(&client);
    assert!(nav.is_logged_in());
    assert!(nav.is_admin());

    let route = nav.logout().await;
    assert_eq!(route, Route::Login);
    assert_eq!(client.internal.tokens().get(), None);
    assert!(!nav.is_logged_in());
    assert!(!nav.is_admin());
}

#[tokio::test]
async fn nav_initializes_from_an_existing_admin_token() {
    let server = MockServer::start().await;
    let client = make_client(&server);
    client.internal.tokens().set(make_jwt(true));

    let nav = NavController::activate(&client);
    assert!(nav.is_logged_in());
    assert!(nav.is_admin());
}
