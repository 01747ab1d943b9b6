use crate::{DbError, Result};

use wb_core::Document;

use std::collections::HashMap;
use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Collection-agnostic access to JSON documents.
///
/// Methods take any executor so callers can run them against the pool or
/// inside a transaction (`&mut *tx`).
pub struct DocumentRepository;

impl DocumentRepository {
    pub async fn insert<'e, T, E>(executor: E, document: &T) -> Result<()>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "INSERT INTO {} (id, body, created_at, updated_at) VALUES (?, ?, ?, ?)",
            T::COLLECTION
        );
        let body = serde_json::to_string(document)?;
        let now = Utc::now().timestamp();

        sqlx::query(&sql)
            .bind(document.id().to_string())
            .bind(body)
            .bind(now)
            .bind(now)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, T, E>(executor: E, id: Uuid) -> Result<Option<T>>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT body FROM {} WHERE id = ?", T::COLLECTION);

        let body: Option<String> = sqlx::query_scalar(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        body.map(|b| decode::<T>(&b)).transpose()
    }

    /// Loads documents in the order of `ids`. Ids with no stored document
    /// are skipped.
    pub async fn find_many<'e, T, E>(executor: E, ids: &[Uuid]) -> Result<Vec<T>>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT body FROM {} WHERE id IN (SELECT value FROM json_each(?))",
            T::COLLECTION
        );
        let id_list = serde_json::to_string(ids)?;

        let bodies: Vec<String> = sqlx::query_scalar(&sql)
            .bind(id_list)
            .fetch_all(executor)
            .await?;

        let mut by_id = HashMap::with_capacity(bodies.len());
        for body in bodies {
            let document = decode::<T>(&body)?;
            by_id.insert(document.id(), document);
        }

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    pub async fn find_all<'e, T, E>(executor: E) -> Result<Vec<T>>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT body FROM {} ORDER BY created_at, rowid",
            T::COLLECTION
        );

        let bodies: Vec<String> = sqlx::query_scalar(&sql).fetch_all(executor).await?;

        bodies.iter().map(|b| decode::<T>(b)).collect()
    }

    /// Replaces the stored body. Returns false if the document does not exist.
    pub async fn save<'e, T, E>(executor: E, document: &T) -> Result<bool>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "UPDATE {} SET body = ?, updated_at = ? WHERE id = ?",
            T::COLLECTION
        );
        let body = serde_json::to_string(document)?;

        let result = sqlx::query(&sql)
            .bind(body)
            .bind(Utc::now().timestamp())
            .bind(document.id().to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false if the document did not exist.
    pub async fn delete<'e, T, E>(executor: E, id: Uuid) -> Result<bool>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::COLLECTION);

        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Reverse lookup: the first document whose id array `field` contains
    /// `member_id` (e.g. the board whose `groups` holds a group id).
    pub async fn find_containing<'e, T, E>(
        executor: E,
        field: &str,
        member_id: Uuid,
    ) -> Result<Option<T>>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT body FROM {table} WHERE EXISTS \
             (SELECT 1 FROM json_each({table}.body, ?) WHERE json_each.value = ?) \
             ORDER BY created_at, rowid LIMIT 1",
            table = T::COLLECTION
        );

        let body: Option<String> = sqlx::query_scalar(&sql)
            .bind(format!("$.{}", field))
            .bind(member_id.to_string())
            .fetch_optional(executor)
            .await?;

        body.map(|b| decode::<T>(&b)).transpose()
    }

    /// Documents whose top-level string `field` equals `value`.
    pub async fn find_by_field<'e, T, E>(executor: E, field: &str, value: &str) -> Result<Vec<T>>
    where
        T: Document,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT body FROM {} WHERE json_extract(body, ?) = ? ORDER BY created_at, rowid",
            T::COLLECTION
        );

        let bodies: Vec<String> = sqlx::query_scalar(&sql)
            .bind(format!("$.{}", field))
            .bind(value)
            .fetch_all(executor)
            .await?;

        bodies.iter().map(|b| decode::<T>(b)).collect()
    }
}

#[track_caller]
fn decode<T: Document>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| DbError::CorruptDocument {
        collection: T::COLLECTION,
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}
