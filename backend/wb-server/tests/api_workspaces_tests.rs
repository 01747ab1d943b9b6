//! Integration tests for workspace invitation handlers
mod common;

use crate::common::TestApp;

use wb_core::{Workspace, WorkspaceRole};
use wb_db::DocumentRepository;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_invite_then_accept_adds_member() {
    let app = TestApp::new().await;
    let owner = app.signup("ana@example.com", "Ana").await;
    let invitee = app.signup("bo@example.com", "Bo").await;
    let workspace = app.create_workspace(owner, "Launch").await;

    let invite = app
        .send(
            "POST",
            &format!("/api/workspaces/{}/invite", workspace.id),
            Some(json!({ "email": "bo@example.com", "role": "member" })),
            Some(&app.session_token(owner)),
        )
        .await;
    assert_eq!(invite.status, StatusCode::OK);
    assert_eq!(invite.json["message"], "Invitation sent successfully");

    let mail = app.mailer.sent().pop().unwrap();
    assert_eq!(mail.to, "bo@example.com");

    let token = app.mailer.last_token().unwrap();
    let accept = app
        .post("/api/workspaces/accept-invite", json!({ "token": token }))
        .await;
    assert_eq!(accept.status, StatusCode::OK);
    assert_eq!(accept.json["message"], "User added to Workspace successfully");

    let stored: Workspace = DocumentRepository::find_by_id(&app.state.services.pool, workspace.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.role_of(invitee), Some(WorkspaceRole::Member));
}

#[tokio::test]
async fn test_invite_requires_session() {
    let app = TestApp::new().await;
    let owner = app.signup("ana@example.com", "Ana").await;
    let workspace = app.create_workspace(owner, "Launch").await;

    let response = app
        .post(
            &format!("/api/workspaces/{}/invite", workspace.id),
            json!({ "email": "bo@example.com" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_invite_by_non_creator_is_forbidden() {
    let app = TestApp::new().await;
    let owner = app.signup("ana@example.com", "Ana").await;
    let other = app.signup("bo@example.com", "Bo").await;
    app.signup("cy@example.com", "Cy").await;
    let workspace = app.create_workspace(owner, "Launch").await;

    let response = app
        .send(
            "POST",
            &format!("/api/workspaces/{}/invite", workspace.id),
            Some(json!({ "email": "cy@example.com" })),
            Some(&app.session_token(other)),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.json["code"], "FORBIDDEN");
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_invite_for_unknown_workspace_or_user_is_not_found() {
    let app = TestApp::new().await;
    let owner = app.signup("ana@example.com", "Ana").await;
    let workspace = app.create_workspace(owner, "Launch").await;
    let token = app.session_token(owner);

    let no_workspace = app
        .send(
            "POST",
            &format!("/api/workspaces/{}/invite", Uuid::new_v4()),
            Some(json!({ "email": "ana@example.com" })),
            Some(&token),
        )
        .await;
    assert_eq!(no_workspace.status, StatusCode::NOT_FOUND);

    let no_user = app
        .send(
            "POST",
            &format!("/api/workspaces/{}/invite", workspace.id),
            Some(json!({ "email": "ghost@example.com" })),
            Some(&token),
        )
        .await;
    assert_eq!(no_user.status, StatusCode::NOT_FOUND);
    assert_eq!(no_user.json["message"], "User not found!");
}

#[tokio::test]
async fn test_inviting_existing_member_is_noop() {
    let app = TestApp::new().await;
    let owner = app.signup("ana@example.com", "Ana").await;
    let workspace = app.create_workspace(owner, "Launch").await;

    let response = app
        .send(
            "POST",
            &format!("/api/workspaces/{}/invite", workspace.id),
            Some(json!({ "email": "ana@example.com" })),
            Some(&app.session_token(owner)),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json["message"],
        "User is already a member of this workspace"
    );
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn test_accept_with_session_token_is_rejected() {
    let app = TestApp::new().await;
    let owner = app.signup("ana@example.com", "Ana").await;

    let response = app
        .post(
            "/api/workspaces/accept-invite",
            json!({ "token": app.session_token(owner) }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
