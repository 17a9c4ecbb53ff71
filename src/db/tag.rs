use color_eyre::{eyre::eyre, Result};

use super::models::Tag;
use super::Db;

impl Db {
    pub async fn create_tag(&self, name: &str) -> Result<i32> {
        let tag_id: i32 = sqlx::query_scalar("INSERT INTO tags (name) VALUES (?) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if super::is_unique_violation(&e) {
                    eyre!("tag '{name}' already exists")
                } else {
                    e.into()
                }
            })?;

        tracing::info!("new tag created: id={tag_id}, name={name:?}");
        Ok(tag_id)
    }

    /// Look up a tag by name, creating it if missing. Used by the lesson importer.
    pub async fn ensure_tag(&self, name: &str) -> Result<i32> {
        sqlx::query("INSERT OR IGNORE INTO tags (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        let tag_id: i32 = sqlx::query_scalar("SELECT id FROM tags WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(tag_id)
    }

    pub async fn tags(&self) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(tags)
    }

    pub async fn attach_tag(&self, lesson_id: i32, tag_id: i32) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO lesson_tags (lesson_id, tag_id) VALUES (?, ?)")
            .bind(lesson_id)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn tags_for_lesson(&self, lesson_id: i32) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.id, t.name
            FROM lesson_tags lt
            JOIN tags t ON t.id = lt.tag_id
            WHERE lt.lesson_id = ?
            ORDER BY t.name
            "#,
        )
        .bind(lesson_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags)
    }
}
