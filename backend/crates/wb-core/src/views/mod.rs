pub mod assignee_list;
pub mod assignee_view;
pub mod board_summary;
pub mod board_view;
pub mod created_item;
pub mod group_view;
pub mod item_view;
pub mod member_view;
pub mod user_details;
pub mod user_view;
pub mod workspace_details;
pub mod workspace_summary;
pub mod workspace_view;
