use crate::{ItemHandler, ServiceError, ServiceResult, TypeDispatchRouter};

use wb_core::{AnyItem, AssigneeList, BoardView, CreatedItem, Group, ItemKind, NewGroup, Outcome};

use std::sync::Arc;

use async_trait::async_trait;
use googletest::prelude::*;
use proptest::prelude::*;
use serde_json::Value;
use uuid::Uuid;

/// Answers `add_item` with its own kind so tests can see which handler ran.
struct StubHandler(ItemKind);

#[async_trait]
impl ItemHandler for StubHandler {
    fn kind(&self) -> ItemKind {
        self.0
    }

    async fn fetch_board(&self, _board_id: Uuid) -> ServiceResult<BoardView> {
        Err(ServiceError::not_found("Board not found"))
    }

    async fn add_group(&self, _board_id: Uuid, _group: NewGroup) -> ServiceResult<BoardView> {
        Err(ServiceError::not_found("Board not found"))
    }

    async fn remove_group(&self, _group_id: Uuid) -> ServiceResult<BoardView> {
        Err(ServiceError::not_found("Group not found"))
    }

    async fn add_item_to_group(&self, _group_id: Uuid, _item: Value) -> ServiceResult<Group> {
        Err(ServiceError::not_found("Group not found"))
    }

    async fn add_item(&self, _item: Value) -> ServiceResult<CreatedItem> {
        Ok(CreatedItem {
            kind: self.0,
            id: Uuid::nil(),
        })
    }

    async fn remove_item_from_group(&self, _item_id: Uuid) -> ServiceResult<Group> {
        Err(ServiceError::not_found("Item not found"))
    }

    async fn update_item(&self, _item_id: Uuid, _patch: Value) -> ServiceResult<AnyItem> {
        Err(ServiceError::not_found("Item not found"))
    }

    async fn add_member(&self, _item_id: Uuid, _user_id: Uuid) -> ServiceResult<AssigneeList> {
        Err(ServiceError::not_found("Item not found"))
    }

    async fn remove_member(
        &self,
        _item_id: Uuid,
        _user_id: Uuid,
    ) -> ServiceResult<Outcome<AssigneeList>> {
        Err(ServiceError::not_found("Item not found"))
    }
}

fn stub_router() -> TypeDispatchRouter {
    let specific = ItemKind::ALL
        .into_iter()
        .filter(|kind| *kind != ItemKind::Item)
        .map(|kind| Arc::new(StubHandler(kind)) as Arc<dyn ItemHandler>)
        .collect();

    TypeDispatchRouter::with_handlers(specific, Arc::new(StubHandler(ItemKind::Item)))
}

#[test]
fn given_each_variant_tag_when_resolved_then_matching_handler_is_selected() {
    let router = stub_router();

    for kind in ItemKind::ALL {
        let handler = router.resolve(Some(kind.as_str()));
        assert_that!(handler.kind(), eq(kind));
    }
}

#[test]
fn given_no_discriminator_when_resolved_then_generic_handler_is_selected() {
    let router = stub_router();

    assert_that!(router.resolve(None).kind(), eq(ItemKind::Item));
}

#[test]
fn given_wrong_case_tag_when_resolved_then_generic_handler_is_selected() {
    let router = stub_router();

    assert_that!(router.resolve(Some("ticket")).kind(), eq(ItemKind::Item));
    assert_that!(router.resolve(Some("TICKET")).kind(), eq(ItemKind::Item));
}

#[tokio::test]
async fn given_ticket_tag_when_adding_item_then_ticket_handler_answers() {
    let router = stub_router();

    let created = router
        .add_item(Some("Ticket"), Value::Null)
        .await
        .unwrap();

    assert_that!(created.kind, eq(ItemKind::Ticket));
}

proptest! {
    #[test]
    fn resolution_agrees_with_item_kind_parsing(tag in "\\PC{0,12}") {
        let router = stub_router();

        let resolved = router.resolve(Some(tag.as_str())).kind();

        prop_assert_eq!(resolved, ItemKind::from_discriminator(Some(tag.as_str())));
    }
}
