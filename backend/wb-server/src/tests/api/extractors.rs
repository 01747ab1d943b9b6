use crate::ApiError;
use crate::api::extractors::auth_user::bearer_token;

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_bearer_token_is_extracted() {
    let headers = headers_with("Bearer abc.def.ghi");

    assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
}

#[test]
fn test_missing_header_is_unauthorized() {
    let result = bearer_token(&HeaderMap::new());

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_other_schemes_and_empty_tokens_are_rejected() {
    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "abc.def.ghi"] {
        let headers = headers_with(value);
        assert!(
            matches!(bearer_token(&headers), Err(ApiError::Unauthorized { .. })),
            "accepted {:?}",
            value
        );
    }
}
