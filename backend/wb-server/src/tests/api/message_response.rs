use crate::{ApiError, MessageResponse};

use wb_core::Outcome;

#[test]
fn test_done_and_noop_outcomes_are_success() {
    let done = MessageResponse::from_outcome(Outcome::Done("Added".to_string())).unwrap();
    assert_eq!(done.message, "Added");

    let noop = MessageResponse::from_outcome(Outcome::NoOp("Already there".to_string())).unwrap();
    assert_eq!(noop.message, "Already there");
}

#[test]
fn test_forbidden_outcome_is_error() {
    let result = MessageResponse::from_outcome(Outcome::Forbidden("Not allowed".to_string()));

    assert!(matches!(result, Err(ApiError::Forbidden { message, .. }) if message == "Not allowed"));
}
