pub mod any_item;
pub mod bug;
pub mod contact;
pub mod incident;
pub mod item;
pub mod item_date;
pub mod item_kind;
pub mod item_record;
pub mod lead;
pub mod sprint;
pub mod task;
pub mod ticket;
