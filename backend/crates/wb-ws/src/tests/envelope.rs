use crate::{ClientEvent, EventReply, INVALID_MESSAGE, ReplyStatus, WsError};

use wb_core::Outcome;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_well_formed_frame_when_parsed_then_fields_are_kept() {
    // Given
    let text = r#"{"event":"getBoardById","ackId":"a-1","data":{"boardId":"x"}}"#;

    // When
    let event = ClientEvent::parse(text).unwrap();

    // Then
    assert_that!(event.event, eq("getBoardById"));
    assert_that!(event.ack_id, eq(&json!("a-1")));
    assert_that!(event.data["boardId"], eq(&json!("x")));
}

#[test]
fn given_frame_without_ack_or_data_when_parsed_then_both_default_to_null() {
    let event = ClientEvent::parse(r#"{"event":"getWorkspaces"}"#).unwrap();

    assert_that!(event.ack_id.is_null(), eq(true));
    assert_that!(event.data.is_null(), eq(true));
    assert_that!(event.ack_label(), eq(""));
}

#[test]
fn given_numeric_ack_id_when_labelled_then_uses_its_json_text() {
    let event = ClientEvent::parse(r#"{"event":"getWorkspaces","ackId":42}"#).unwrap();

    assert_that!(event.ack_label(), eq("42"));
}

#[test]
fn given_non_json_text_when_parsed_then_invalid_message() {
    let err = ClientEvent::parse("hello").unwrap_err();

    assert_that!(err.error_code(), eq(INVALID_MESSAGE));
}

#[test]
fn given_blank_event_name_when_parsed_then_invalid_message() {
    let err = ClientEvent::parse(r#"{"event":"  ","ackId":"1"}"#).unwrap_err();

    assert_that!(err.error_code(), eq(INVALID_MESSAGE));
    assert_that!(err.client_message(), eq("Event name is required"));
}

#[test]
fn given_done_outcome_when_replied_then_ok_with_data_only() {
    // When
    let reply = EventReply::from_outcome(
        json!("a-1"),
        "createItem",
        Outcome::Done(json!({ "taskId": "t" })),
    );
    let wire = serde_json::to_value(&reply).unwrap();

    // Then
    assert_that!(
        wire,
        eq(&json!({
            "ackId": "a-1",
            "event": "createItem",
            "status": "ok",
            "data": { "taskId": "t" }
        }))
    );
}

#[test]
fn given_noop_outcome_when_replied_then_status_noop_with_message() {
    let reply = EventReply::from_outcome(
        json!(7),
        "removeMembersFromItem",
        Outcome::NoOp("User is not assigned to this task".to_string()),
    );
    let wire = serde_json::to_value(&reply).unwrap();

    assert_that!(wire["status"], eq(&json!("noop")));
    assert_that!(wire["message"], eq(&json!("User is not assigned to this task")));
    assert_that!(wire.get("data"), none());
    assert_that!(wire.get("code"), none());
}

#[test]
fn given_forbidden_outcome_when_replied_then_status_forbidden() {
    let reply = EventReply::from_outcome(
        json!("x"),
        "addMemberToWorkspace",
        Outcome::Forbidden("denied".to_string()),
    );

    assert_that!(reply.status, eq(ReplyStatus::Forbidden));
}

#[test]
fn given_error_when_replied_then_code_and_client_message_are_set() {
    // Given
    let error = WsError::invalid_message("Unknown event: nope");

    // When
    let reply = EventReply::from_error(json!("b"), "nope", &error);
    let wire = serde_json::to_value(&reply).unwrap();

    // Then
    assert_that!(wire["status"], eq(&json!("error")));
    assert_that!(wire["code"], eq(&json!("INVALID_MESSAGE")));
    assert_that!(wire["message"], eq(&json!("Unknown event: nope")));
    assert_that!(wire["ackId"], eq(&json!("b")));
}
