//! Database repository for content records.
//!
//! Thin CRUD passthroughs over the `contents` table; updates merge with the
//! stored row rather than replacing it.

use crate::database::models::{Content, CreateContentRequest, UpdateContentRequest};
use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ContentRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> ContentRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Retrieves every content record.
    pub async fn list_all(&self) -> Result<Vec<Content>> {
        let contents = sqlx::query_as::<_, Content>(
            "SELECT id, title, description, content_path, category, user_id FROM contents",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(contents)
    }

    /// Retrieves the content records created by one user.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Content>> {
        let contents = sqlx::query_as::<_, Content>(
            "SELECT id, title, description, content_path, category, user_id FROM contents WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(contents)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Content>> {
        let content = sqlx::query_as::<_, Content>(
            "SELECT id, title, description, content_path, category, user_id FROM contents WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(content)
    }

    /// Creates a content record owned by `user_id`.
    pub async fn create(&self, user_id: &str, content: CreateContentRequest) -> Result<Content> {
        let id = Uuid::now_v7().to_string();

        let content = sqlx::query_as::<_, Content>(
            r#"
            INSERT INTO contents (id, title, description, content_path, category, user_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, content_path, category, user_id
            "#,
        )
        .bind(&id)
        .bind(&content.title)
        .bind(&content.description)
        .bind(&content.content_path)
        .bind(content.category)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(content)
    }

    /// Applies a partial update; fields absent from the request keep their
    /// stored values.
    ///
    /// # Returns
    /// The updated record, or `None` if the id does not exist
    pub async fn update(&self, id: &str, update: UpdateContentRequest) -> Result<Option<Content>> {
        let content = sqlx::query_as::<_, Content>(
            r#"
            UPDATE contents
            SET title = COALESCE(?, title),
                description = COALESCE(?, description),
                content_path = COALESCE(?, content_path),
                category = COALESCE(?, category)
            WHERE id = ?
            RETURNING id, title, description, content_path, category, user_id
            "#,
        )
        .bind(update.title)
        .bind(update.description)
        .bind(update.content_path)
        .bind(update.category)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(content)
    }

    /// Deletes a content record.
    ///
    /// # Returns
    /// `true` if a record was removed, `false` if the id did not exist
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contents WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
