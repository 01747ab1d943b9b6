use wb_core::{Board, Group, NewBoard, NewGroup, NewWorkspace, Ticket, User, Workspace, new_document};

use serde_json::json;
use uuid::Uuid;

pub fn create_test_user(email: &str) -> User {
    User::new(
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
        "Test User".to_string(),
    )
}

pub fn create_test_workspace(created_by: Uuid) -> Workspace {
    Workspace::new(
        NewWorkspace {
            workspace_name: "Test Workspace".to_string(),
            description: None,
        },
        created_by,
    )
}

pub fn create_test_board(workspace: &Workspace) -> Board {
    Board::new(
        NewBoard {
            board_name: "Test Board".to_string(),
            board_type: None,
            description: None,
        },
        workspace,
        workspace.created_by,
    )
}

pub fn create_test_group(board_id: Uuid) -> Group {
    Group::new(
        NewGroup {
            group_name: "Test Group".to_string(),
        },
        board_id,
    )
}

pub fn create_test_ticket(name: &str) -> Ticket {
    new_document(json!({ "ticketName": name })).expect("valid ticket payload")
}
