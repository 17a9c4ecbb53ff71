use color_eyre::{eyre::eyre, Result};

use super::models::{Quiz, QuizOverview};
use super::Db;

impl Db {
    pub async fn create_quiz(&self, lesson_id: i32, title: &str) -> Result<i32> {
        let quiz_id: i32 = sqlx::query_scalar(
            "INSERT INTO quizzes (lesson_id, title) VALUES (?, ?) RETURNING id",
        )
        .bind(lesson_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if super::is_unique_violation(&e) {
                eyre!("quiz title '{title}' is already in use for this lesson")
            } else {
                e.into()
            }
        })?;

        tracing::info!("new quiz created: id={quiz_id} for lesson_id={lesson_id}");
        Ok(quiz_id)
    }

    pub async fn get_quiz(&self, quiz_id: i32) -> Result<Option<Quiz>> {
        let quiz =
            sqlx::query_as::<_, Quiz>("SELECT id, lesson_id, title FROM quizzes WHERE id = ?")
                .bind(quiz_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(quiz)
    }

    pub async fn quizzes_for_lesson(&self, lesson_id: i32) -> Result<Vec<Quiz>> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            "SELECT id, lesson_id, title FROM quizzes WHERE lesson_id = ? ORDER BY title",
        )
        .bind(lesson_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn quizzes(&self) -> Result<Vec<QuizOverview>> {
        let quizzes = sqlx::query_as::<_, QuizOverview>(
            r#"
            SELECT q.id AS id, q.title AS title, l.title AS lesson_title
            FROM quizzes q
            JOIN lessons l ON l.id = q.lesson_id
            ORDER BY l.title, q.title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    pub async fn questions_count(&self, quiz_id: i32) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE quiz_id = ?")
            .bind(quiz_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
