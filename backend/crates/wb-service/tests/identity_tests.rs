mod common;

use common::{TEST_JWT_SECRET, TEST_PASSWORD, TestContext};

use wb_auth::{Claims, TokenIssuer, TokenLifetimes, TokenPurpose};
use wb_core::{ModuleName, NotificationStatus, WorkspaceRole};
use wb_service::SignupRequest;

use googletest::prelude::*;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        fullname: "Sam Signup".to_string(),
    }
}

#[tokio::test]
async fn given_new_email_when_signing_up_then_user_is_stored_with_hashed_password() {
    // Given
    let ctx = TestContext::new().await;

    // When
    let user = ctx
        .services
        .identity
        .signup(signup_request("sam@example.com"))
        .await
        .unwrap();

    // Then
    assert_that!(user.email, eq("sam@example.com"));
    assert_that!(user.password, not(eq(TEST_PASSWORD)));
    assert_that!(user.password, starts_with("$argon2"));
    let available = ctx
        .services
        .identity
        .is_email_available("sam@example.com")
        .await
        .unwrap();
    assert_that!(available, eq(false));
}

#[tokio::test]
async fn given_existing_email_when_signing_up_again_then_conflict() {
    let ctx = TestContext::new().await;
    ctx.create_user("sam@example.com", "Sam").await;

    let error = ctx
        .services
        .identity
        .signup(signup_request("sam@example.com"))
        .await
        .unwrap_err();

    assert_that!(error.error_code(), eq("CONFLICT"));
    assert_that!(error.client_message(), eq("User already found!"));
}

#[tokio::test]
async fn given_malformed_email_when_signing_up_then_validation_error() {
    let ctx = TestContext::new().await;

    let error = ctx
        .services
        .identity
        .signup(signup_request("not-an-email"))
        .await
        .unwrap_err();

    assert_that!(error.field(), some(eq("email")));
}

#[tokio::test]
async fn given_registered_user_when_logging_in_then_session_token_validates() {
    // Given
    let ctx = TestContext::new().await;
    let user = ctx
        .services
        .identity
        .signup(signup_request("sam@example.com"))
        .await
        .unwrap();

    // When
    let session = ctx
        .services
        .identity
        .login("sam@example.com", TEST_PASSWORD)
        .await
        .unwrap();

    // Then
    assert_that!(session.user_id, eq(user.id));
    assert_that!(session.user_name, eq("Sam Signup"));
    let authenticated = ctx
        .services
        .identity
        .authenticate(&session.token)
        .unwrap();
    assert_that!(authenticated, eq(user.id));
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_invalid_credentials() {
    let ctx = TestContext::new().await;
    ctx.services
        .identity
        .signup(signup_request("sam@example.com"))
        .await
        .unwrap();

    let error = ctx
        .services
        .identity
        .login("sam@example.com", "wrong")
        .await
        .unwrap_err();

    assert_that!(error.error_code(), eq("INVALID_CREDENTIALS"));
    assert_that!(error.client_message(), eq("Invalid credentials"));
}

#[tokio::test]
async fn given_unknown_email_when_logging_in_then_user_not_found() {
    let ctx = TestContext::new().await;

    let error = ctx
        .services
        .identity
        .login("ghost@example.com", "whatever")
        .await
        .unwrap_err();

    assert_that!(error.client_message(), eq("User not found!"));
}

#[tokio::test]
async fn given_expired_session_when_verifying_then_token_expired() {
    // Given
    let ctx = TestContext::new().await;
    let user = ctx.create_user("sam@example.com", "Sam").await;
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user.id.to_string(),
        purpose: TokenPurpose::Session,
        exp: now - 3600,
        iat: now - 7200,
        email: None,
        workspace_id: None,
        role: None,
        inviter_id: None,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    // When
    let error = ctx.services.identity.verify_token(&token).unwrap_err();

    // Then
    assert_that!(error.error_code(), eq("TOKEN_EXPIRED"));
}

#[tokio::test]
async fn given_garbage_token_when_verifying_then_invalid_token() {
    let ctx = TestContext::new().await;

    let error = ctx.services.identity.verify_token("not.a.jwt").unwrap_err();

    assert_that!(error.error_code(), eq("INVALID_TOKEN"));
}

#[tokio::test]
async fn given_reset_request_when_token_redeemed_then_new_password_works() {
    // Given
    let ctx = TestContext::new().await;
    ctx.services
        .identity
        .signup(signup_request("sam@example.com"))
        .await
        .unwrap();
    ctx.services
        .identity
        .request_password_reset("sam@example.com")
        .await
        .unwrap();
    let token = ctx.mailer.last_token().unwrap();

    // When
    ctx.services
        .identity
        .reset_password(&token, "a brand new passphrase")
        .await
        .unwrap();

    // Then
    let mails = ctx.mailer.sent();
    assert_that!(mails[0].subject, eq("Password Reset Request"));
    assert_that!(
        mails[0].html,
        contains_substring("http://localhost:3000/reset-password?token=")
    );
    let login = ctx
        .services
        .identity
        .login("sam@example.com", "a brand new passphrase")
        .await;
    assert_that!(login.is_ok(), eq(true));
    let old = ctx
        .services
        .identity
        .login("sam@example.com", TEST_PASSWORD)
        .await;
    assert_that!(old.is_err(), eq(true));
}

#[tokio::test]
async fn given_session_token_when_resetting_password_then_rejected() {
    let ctx = TestContext::new().await;
    let user = ctx.create_user("sam@example.com", "Sam").await;
    let session = TokenIssuer::with_hs256(TEST_JWT_SECRET.as_bytes(), TokenLifetimes::default())
        .session(user.id)
        .unwrap();

    let error = ctx
        .services
        .identity
        .reset_password(&session, "irrelevant")
        .await
        .unwrap_err();

    assert_that!(error.error_code(), eq("INVALID_TOKEN"));
}

#[tokio::test]
async fn given_unknown_email_when_requesting_reset_then_not_found_and_no_mail() {
    let ctx = TestContext::new().await;

    let result = ctx
        .services
        .identity
        .request_password_reset("ghost@example.com")
        .await;

    assert_that!(result.is_err(), eq(true));
    assert_that!(ctx.mailer.sent(), empty());
}

#[tokio::test]
async fn given_new_oauth_identity_when_logging_in_twice_then_one_user_is_provisioned() {
    // Given
    let ctx = TestContext::new().await;

    // When
    let first = ctx
        .services
        .identity
        .oauth_login("oauth@example.com", "Olga Auth")
        .await
        .unwrap();
    let second = ctx
        .services
        .identity
        .oauth_login("oauth@example.com", "Olga Auth")
        .await
        .unwrap();

    // Then
    assert_that!(first.user_id, eq(second.user_id));
    assert_that!(first.user_name, eq("Olga Auth"));
    let users = ctx.services.identity.list_users().await.unwrap();
    assert_that!(users.len(), eq(1));
}

#[tokio::test]
async fn given_user_when_listing_and_fetching_details_then_credential_is_absent() {
    // Given
    let ctx = TestContext::new().await;
    let user = ctx.create_user("sam@example.com", "Sam").await;

    // When
    let users = ctx.services.identity.list_users().await.unwrap();
    let details = ctx.services.identity.user_details(user.id).await.unwrap();

    // Then
    let rendered = serde_json::to_string(&users).unwrap();
    assert_that!(rendered, not(contains_substring("password")));
    assert_that!(details.fullname, eq("Sam"));
    assert_that!(details.email, eq("sam@example.com"));
}

#[tokio::test]
async fn given_membership_when_checking_role_then_role_or_not_found() {
    // Given
    let ctx = TestContext::new().await;
    let creator = ctx.create_user("owner@example.com", "Olive Owner").await;
    let outsider = ctx.create_user("out@example.com", "Oscar Out").await;
    let module = ctx.module(ModuleName::Service).await;
    let workspace = ctx.create_workspace(module.id, creator.id, "Desk").await;

    // When
    let role = ctx
        .services
        .identity
        .check_role(workspace.id, creator.id)
        .await
        .unwrap();
    let missing = ctx
        .services
        .identity
        .check_role(workspace.id, outsider.id)
        .await;

    // Then
    assert_that!(role, eq(WorkspaceRole::Admin));
    assert_that!(missing.unwrap_err().error_code(), eq("NOT_FOUND"));
}

#[tokio::test]
async fn given_unread_notifications_when_marked_read_then_count_is_returned_once() {
    // Given
    let ctx = TestContext::new().await;
    let user = ctx.create_user("agent@example.com", "Avery Agent").await;
    let created = ctx
        .services
        .items
        .add_item(Some("Bug"), serde_json::json!({ "bugName": "Crash" }))
        .await
        .unwrap();
    ctx.services
        .items
        .add_member(Some("Bug"), created.id, user.id)
        .await
        .unwrap();

    // When
    let first = ctx
        .services
        .identity
        .mark_notifications_read(user.id)
        .await
        .unwrap();
    let second = ctx
        .services
        .identity
        .mark_notifications_read(user.id)
        .await
        .unwrap();

    // Then
    assert_that!(first, eq(1));
    assert_that!(second, eq(0));
    let notifications = ctx.services.identity.notifications(user.id).await.unwrap();
    assert_that!(notifications[0].status, eq(NotificationStatus::Read));
}
