use crate::{DocumentRepository, Result};

use wb_core::User;

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut users = DocumentRepository::find_by_field::<User, _>(executor, "email", email).await?;
        Ok(users.pop())
    }
}
