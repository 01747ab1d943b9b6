mod common;

use common::{FailingNotifier, TestContext};

use wb_core::{Group, ItemKind, NewGroup, Outcome, Ticket};
use wb_db::DocumentRepository;

use std::sync::Arc;

use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

fn new_group(name: &str) -> NewGroup {
    NewGroup {
        group_name: name.to_string(),
    }
}

fn named_payload(kind: ItemKind, name: &str) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(kind.name_field().to_string(), json!(name));
    serde_json::Value::Object(payload)
}

#[tokio::test]
async fn given_ticket_board_when_group_then_item_added_then_projection_shows_ticket() {
    // Given
    let ctx = TestContext::new().await;
    let (_, _, board) = ctx.board_setup().await;
    let items = &ctx.services.items;

    // When
    let view = items
        .add_group(Some("Ticket"), board.board_id, new_group("G"))
        .await
        .unwrap();

    // Then
    let rendered = serde_json::to_value(&view).unwrap();
    assert_that!(view.groups.len(), eq(1));
    assert_that!(rendered["groups"][0]["tickets"], eq(&json!([])));
    assert_that!(rendered["boardName"], eq(&json!("Service Desk")));
    assert_that!(rendered["workspaceName"], eq(&json!("Operations")));

    // When
    let group_id = view.groups[0].group_id;
    items
        .add_item_to_group(Some("Ticket"), group_id, json!({ "ticketName": "Printer jam" }))
        .await
        .unwrap();
    let view = items
        .fetch_board(Some("Ticket"), board.board_id)
        .await
        .unwrap();

    // Then
    let rendered = serde_json::to_value(&view).unwrap();
    let tickets = rendered["groups"][0]["tickets"].as_array().unwrap();
    assert_that!(tickets.len(), eq(1));
    assert_that!(tickets[0]["ticketName"], eq(&json!("Printer jam")));
    assert_that!(tickets[0]["status"], eq(&json!("")));
    assert_that!(tickets[0]["dueDate"], eq(&json!("")));
    assert_that!(tickets[0]["assignedToId"], eq(&json!([])));
}

#[tokio::test]
async fn given_ticket_in_group_when_fetched_as_generic_then_list_is_empty() {
    // Given
    let ctx = TestContext::new().await;
    let (_, _, board) = ctx.board_setup().await;
    let items = &ctx.services.items;
    let view = items
        .add_group(Some("Ticket"), board.board_id, new_group("G"))
        .await
        .unwrap();
    items
        .add_item_to_group(
            Some("Ticket"),
            view.groups[0].group_id,
            json!({ "ticketName": "Printer jam" }),
        )
        .await
        .unwrap();

    // When
    let generic = items.fetch_board(None, board.board_id).await.unwrap();

    // Then
    let rendered = serde_json::to_value(&generic).unwrap();
    assert_that!(rendered["groups"][0]["items"], eq(&json!([])));
}

#[tokio::test]
async fn given_missing_board_when_fetching_then_not_found() {
    let ctx = TestContext::new().await;

    let result = ctx
        .services
        .items
        .fetch_board(Some("Bug"), Uuid::new_v4())
        .await;

    let error = result.unwrap_err();
    assert_that!(error.error_code(), eq("NOT_FOUND"));
}

#[tokio::test]
async fn given_missing_board_when_adding_group_then_no_group_is_created() {
    // Given
    let ctx = TestContext::new().await;

    // When
    let result = ctx
        .services
        .items
        .add_group(None, Uuid::new_v4(), new_group("Orphan"))
        .await;

    // Then
    assert_that!(result.is_err(), eq(true));
    let groups: Vec<Group> = DocumentRepository::find_all(&ctx.pool).await.unwrap();
    assert_that!(groups, empty());
}

#[tokio::test]
async fn given_group_when_removed_then_board_no_longer_lists_it() {
    // Given
    let ctx = TestContext::new().await;
    let (_, _, board) = ctx.board_setup().await;
    let items = &ctx.services.items;
    items
        .add_group(None, board.board_id, new_group("Keep"))
        .await
        .unwrap();
    let view = items
        .add_group(None, board.board_id, new_group("Drop"))
        .await
        .unwrap();
    let dropped = view.groups[1].group_id;

    // When
    let view = items.remove_group(None, dropped).await.unwrap();

    // Then
    assert_that!(view.groups.len(), eq(1));
    assert_that!(view.groups[0].group_name, eq("Keep"));
    let gone: Option<Group> = DocumentRepository::find_by_id(&ctx.pool, dropped)
        .await
        .unwrap();
    assert_that!(gone.is_none(), eq(true));
}

#[tokio::test]
async fn given_group_without_board_when_removed_then_inconsistent_state() {
    // Given
    let ctx = TestContext::new().await;
    let orphan = Group::new(new_group("Orphan"), Uuid::new_v4());
    DocumentRepository::insert(&ctx.pool, &orphan).await.unwrap();

    // When
    let error = ctx
        .services
        .items
        .remove_group(None, orphan.id)
        .await
        .unwrap_err();

    // Then
    assert_that!(error.error_code(), eq("INCONSISTENT_STATE"));
    let still_there: Option<Group> = DocumentRepository::find_by_id(&ctx.pool, orphan.id)
        .await
        .unwrap();
    assert_that!(still_there.is_some(), eq(true));
}

#[tokio::test]
async fn given_item_in_group_when_removed_then_group_and_store_drop_it() {
    // Given
    let ctx = TestContext::new().await;
    let (_, _, board) = ctx.board_setup().await;
    let items = &ctx.services.items;
    let view = items
        .add_group(Some("Ticket"), board.board_id, new_group("G"))
        .await
        .unwrap();
    let group = items
        .add_item_to_group(
            Some("Ticket"),
            view.groups[0].group_id,
            json!({ "ticketName": "Printer jam" }),
        )
        .await
        .unwrap();
    let ticket_id = group.tickets[0];

    // When
    let group = items
        .remove_item_from_group(Some("Ticket"), ticket_id)
        .await
        .unwrap();

    // Then
    assert_that!(group.tickets, empty());
    let gone: Option<Ticket> = DocumentRepository::find_by_id(&ctx.pool, ticket_id)
        .await
        .unwrap();
    assert_that!(gone.is_none(), eq(true));
}

#[tokio::test]
async fn given_standalone_item_when_removed_from_group_then_not_found() {
    // Given
    let ctx = TestContext::new().await;
    let created = ctx
        .services
        .items
        .add_item(Some("Ticket"), json!({ "ticketName": "Loose" }))
        .await
        .unwrap();

    // When
    let error = ctx
        .services
        .items
        .remove_item_from_group(Some("Ticket"), created.id)
        .await
        .unwrap_err();

    // Then
    assert_that!(error.error_code(), eq("NOT_FOUND"));
    assert_that!(error.client_message(), contains_substring("Group containing"));
}

#[tokio::test]
async fn given_lead_when_created_standalone_then_reply_uses_lead_id_key() {
    let ctx = TestContext::new().await;

    let created = ctx
        .services
        .items
        .add_item(Some("Lead"), json!({ "leadName": "Acme", "id": "ignored" }))
        .await
        .unwrap();

    let rendered = serde_json::to_value(created).unwrap();
    assert_that!(rendered["leadId"], eq(&json!(created.id)));
}

#[tokio::test]
async fn given_payload_without_name_when_creating_then_validation_error() {
    let ctx = TestContext::new().await;

    let error = ctx
        .services
        .items
        .add_item(Some("Bug"), json!({ "status": "Open" }))
        .await
        .unwrap_err();

    assert_that!(error.error_code(), eq("VALIDATION_ERROR"));
}

#[tokio::test]
async fn given_date_only_due_date_when_ticket_added_then_projection_shows_midnight_utc() {
    // Given
    let ctx = TestContext::new().await;
    let (_, _, board) = ctx.board_setup().await;
    let items = &ctx.services.items;
    let view = items
        .add_group(Some("Ticket"), board.board_id, new_group("G"))
        .await
        .unwrap();

    // When
    items
        .add_item_to_group(
            Some("Ticket"),
            view.groups[0].group_id,
            json!({ "ticketName": "Renew licence", "dueDate": "2024-06-01" }),
        )
        .await
        .unwrap();
    let view = items
        .fetch_board(Some("Ticket"), board.board_id)
        .await
        .unwrap();

    // Then
    let rendered = serde_json::to_value(&view).unwrap();
    let ticket = &rendered["groups"][0]["tickets"][0];
    assert_that!(ticket["dueDate"], eq(&json!("2024-06-01T00:00:00+00:00")));
}

#[tokio::test]
async fn given_date_only_sprint_window_when_updated_then_dates_are_stored() {
    // Given
    let ctx = TestContext::new().await;
    let created = ctx
        .services
        .items
        .add_item(Some("Sprint"), json!({ "sprintName": "Sprint 1" }))
        .await
        .unwrap();

    // When
    let updated = ctx
        .services
        .items
        .update_item(
            Some("Sprint"),
            created.id,
            json!({ "startDate": "2024-06-03", "endDate": "2024-06-14T17:00:00Z" }),
        )
        .await
        .unwrap();

    // Then
    let rendered = serde_json::to_value(&updated).unwrap();
    assert_that!(rendered["startDate"], eq(&json!("2024-06-03T00:00:00Z")));
    assert_that!(rendered["endDate"], eq(&json!("2024-06-14T17:00:00Z")));
}

#[tokio::test]
async fn given_ticket_when_updated_then_fields_merge_and_id_is_kept() {
    // Given
    let ctx = TestContext::new().await;
    let created = ctx
        .services
        .items
        .add_item(
            Some("Ticket"),
            json!({ "ticketName": "Printer jam", "priority": "Low" }),
        )
        .await
        .unwrap();

    // When
    let updated = ctx
        .services
        .items
        .update_item(
            Some("Ticket"),
            created.id,
            json!({ "status": "Done", "id": Uuid::new_v4() }),
        )
        .await
        .unwrap();

    // Then
    assert_that!(updated.id(), eq(created.id));
    let rendered = serde_json::to_value(&updated).unwrap();
    assert_that!(rendered["status"], eq(&json!("Done")));
    assert_that!(rendered["priority"], eq(&json!("Low")));
    assert_that!(rendered["ticketName"], eq(&json!("Printer jam")));
}

#[tokio::test]
async fn given_every_variant_when_member_added_then_removed_then_list_is_restored() {
    let ctx = TestContext::new().await;
    let user = ctx.create_user("agent@example.com", "Avery Agent").await;
    let items = &ctx.services.items;

    for kind in ItemKind::ALL {
        // Given
        let created = items
            .add_item(Some(kind.as_str()), named_payload(kind, "Thing"))
            .await
            .unwrap();

        // When
        let added = items
            .add_member(Some(kind.as_str()), created.id, user.id)
            .await
            .unwrap();
        let removed = items
            .remove_member(Some(kind.as_str()), created.id, user.id)
            .await
            .unwrap();

        // Then
        assert_that!(added.assigned_to_id.len(), eq(1));
        assert_that!(added.assigned_to_id[0].email, eq("agent@example.com"));
        let removed = removed.done().unwrap();
        assert_that!(removed.assigned_to_id, empty());
    }
}

#[tokio::test]
async fn given_assigned_user_when_added_again_then_conflict_and_list_unchanged() {
    // Given
    let ctx = TestContext::new().await;
    let user = ctx.create_user("agent@example.com", "Avery Agent").await;
    let items = &ctx.services.items;
    let created = items
        .add_item(Some("Task"), json!({ "taskName": "Write docs" }))
        .await
        .unwrap();
    items
        .add_member(Some("Task"), created.id, user.id)
        .await
        .unwrap();

    // When
    let error = items
        .add_member(Some("Task"), created.id, user.id)
        .await
        .unwrap_err();

    // Then
    assert_that!(error.error_code(), eq("CONFLICT"));
    assert_that!(
        error.client_message(),
        eq("User is already assigned to this task")
    );
    let task: wb_core::Task = DocumentRepository::find_by_id(&ctx.pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(task.assigned_to_id.len(), eq(1));
}

#[tokio::test]
async fn given_unassigned_user_when_removed_then_noop_and_list_unchanged() {
    // Given
    let ctx = TestContext::new().await;
    let assigned = ctx.create_user("a@example.com", "Assigned").await;
    let stranger = ctx.create_user("s@example.com", "Stranger").await;
    let items = &ctx.services.items;
    let created = items
        .add_item(Some("Incident"), json!({ "incidentName": "Outage" }))
        .await
        .unwrap();
    items
        .add_member(Some("Incident"), created.id, assigned.id)
        .await
        .unwrap();

    // When
    let outcome = items
        .remove_member(Some("Incident"), created.id, stranger.id)
        .await
        .unwrap();

    // Then
    assert_that!(
        outcome,
        eq(&Outcome::NoOp(
            "User is not assigned to this incident".to_string()
        ))
    );
    let incident: wb_core::Incident = DocumentRepository::find_by_id(&ctx.pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(incident.assigned_to_id, vec![assigned.id]);
}

#[tokio::test]
async fn given_missing_user_when_assigning_then_not_found() {
    let ctx = TestContext::new().await;
    let created = ctx
        .services
        .items
        .add_item(Some("Bug"), json!({ "bugName": "Crash" }))
        .await
        .unwrap();

    let error = ctx
        .services
        .items
        .add_member(Some("Bug"), created.id, Uuid::new_v4())
        .await
        .unwrap_err();

    assert_that!(error.client_message(), eq("User not found"));
}

#[tokio::test]
async fn given_assignment_when_made_then_user_is_notified_in_app_and_externally() {
    // Given
    let ctx = TestContext::new().await;
    let user = ctx.create_user("agent@example.com", "Avery Agent").await;
    let created = ctx
        .services
        .items
        .add_item(Some("Ticket"), json!({ "ticketName": "Printer jam" }))
        .await
        .unwrap();

    // When
    ctx.services
        .items
        .add_member(Some("Ticket"), created.id, user.id)
        .await
        .unwrap();

    // Then
    let sent = ctx.notifier.sent();
    assert_that!(sent.len(), eq(1));
    assert_that!(sent[0].0, eq("agent@example.com"));
    assert_that!(
        sent[0].1,
        contains_substring("assigned to the ticket \"Printer jam\"")
    );
    let notifications = ctx.services.identity.notifications(user.id).await.unwrap();
    assert_that!(notifications.len(), eq(1));
    assert_that!(notifications[0].message, eq(&sent[0].1));
}

#[tokio::test]
async fn given_failing_notifier_when_assigning_then_assignment_still_succeeds() {
    // Given
    let ctx = TestContext::with_notifier(Arc::new(FailingNotifier)).await;
    let user = ctx.create_user("agent@example.com", "Avery Agent").await;
    let created = ctx
        .services
        .items
        .add_item(Some("Sprint"), json!({ "sprintName": "Sprint 1" }))
        .await
        .unwrap();

    // When
    let result = ctx
        .services
        .items
        .add_member(Some("Sprint"), created.id, user.id)
        .await;

    // Then
    assert_that!(result.is_ok(), eq(true));
    let notifications = ctx.services.identity.notifications(user.id).await.unwrap();
    assert_that!(notifications.len(), eq(1));
}
