pub mod board;
pub mod context;
pub mod dispatcher;
pub mod error_boundary;
pub mod error_codes;
pub mod item;
pub mod payloads;
pub mod workspace;
