use crate::Board;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub board_id: Uuid,
    pub board_name: String,
}

impl From<&Board> for BoardSummary {
    fn from(board: &Board) -> Self {
        Self {
            board_id: board.id,
            board_name: board.board_name.clone(),
        }
    }
}
