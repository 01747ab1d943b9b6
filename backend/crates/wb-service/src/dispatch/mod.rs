pub mod board_projection;
pub mod item_handler;
pub mod type_dispatch_router;
pub mod variant_handler;
