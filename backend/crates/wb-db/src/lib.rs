pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{migrate, open_in_memory, open_pool};
pub use error::{DbError, Result};
pub use repositories::document_repository::DocumentRepository;
pub use repositories::module_repository::ModuleRepository;
pub use repositories::user_repository::UserRepository;
