use crate::ApiError;

use wb_service::ServiceError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_message_and_code() {
    let (status, json) = render(ServiceError::not_found("Board not found").into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Board not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_conflict_and_bad_credentials_return_400() {
    let (status, json) = render(ServiceError::conflict("User already found!").into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");

    let (status, json) = render(ServiceError::invalid_credentials().into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_validation_error_carries_field() {
    let (status, json) =
        render(ServiceError::validation("Password is required", Some("password")).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "password");
}

#[tokio::test]
async fn test_inconsistent_state_returns_409() {
    let (status, json) = render(ServiceError::inconsistent("Group has no board").into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "INCONSISTENT_STATE");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let (status, json) = render(ServiceError::internal("pool exhausted at 0x1f").into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Something went wrong!");
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_unauthorized_and_forbidden_statuses() {
    let (status, json) = render(ApiError::unauthorized("No token provided")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) = render(ApiError::forbidden("Not the creator")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Not the creator");
}

#[tokio::test]
async fn test_uuid_error_becomes_bad_request() {
    let error: ApiError = uuid::Uuid::parse_str("not-a-uuid").unwrap_err().into();
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid UUID format")
    );
}
