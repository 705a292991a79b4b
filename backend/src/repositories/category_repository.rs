//! Database repository for category records.
//!
//! Same thin CRUD contract as the content repository, without an owner
//! column.

use crate::database::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct CategoryRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Retrieves every category record.
    pub async fn list_all(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, title, description, category_path, category FROM categories",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, title, description, category_path, category FROM categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    pub async fn create(&self, category: CreateCategoryRequest) -> Result<Category> {
        let id = Uuid::now_v7().to_string();

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, title, description, category_path, category)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, description, category_path, category
            "#,
        )
        .bind(&id)
        .bind(&category.title)
        .bind(&category.description)
        .bind(&category.category_path)
        .bind(category.category)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// Applies a partial update; fields absent from the request keep their
    /// stored values.
    pub async fn update(
        &self,
        id: &str,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET title = COALESCE(?, title),
                description = COALESCE(?, description),
                category_path = COALESCE(?, category_path),
                category = COALESCE(?, category)
            WHERE id = ?
            RETURNING id, title, description, category_path, category
            "#,
        )
        .bind(update.title)
        .bind(update.description)
        .bind(update.category_path)
        .bind(update.category)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }

    /// Deletes a category record.
    ///
    /// # Returns
    /// `true` if a record was removed, `false` if the id did not exist
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    fn sample() -> CreateCategoryRequest {
        CreateCategoryRequest {
            title: "News".to_string(),
            description: "News items".to_string(),
            category_path: "/news".to_string(),
            category: 1,
        }
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let pool = test_pool().await;
        let repo = CategoryRepository::new(&pool);

        let created = repo.create(sample()).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "News");

        let updated = repo
            .update(
                &created.id,
                UpdateCategoryRequest {
                    description: Some("World news".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "News");
        assert_eq!(updated.description, "World news");

        assert!(repo.delete(&created.id).await.unwrap());
        assert!(repo.get_by_id(&created.id).await.unwrap().is_none());
    }
}
