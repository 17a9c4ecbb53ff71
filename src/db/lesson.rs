use color_eyre::{eyre::eyre, Result};

use super::models::{Lesson, LessonSummary};
use super::Db;
use crate::models::LessonImport;

impl Db {
    pub async fn create_lesson(&self, title: &str, body: &str) -> Result<i32> {
        let lesson_id: i32 =
            sqlx::query_scalar("INSERT INTO lessons (title, body) VALUES (?, ?) RETURNING id")
                .bind(title)
                .bind(body)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    if super::is_unique_violation(&e) {
                        eyre!("lesson title '{title}' is already in use")
                    } else {
                        e.into()
                    }
                })?;

        tracing::info!("new lesson created: id={lesson_id}, title={title:?}");
        Ok(lesson_id)
    }

    /// Insert a lesson with all its tags, quizzes, and questions atomically
    /// in one transaction. Returns the id of the new lesson.
    pub async fn import_lesson(&self, import: LessonImport) -> Result<i32> {
        let mut tx = self.pool.begin().await?;

        let lesson_id: i32 =
            sqlx::query_scalar("INSERT INTO lessons (title, body) VALUES (?, ?) RETURNING id")
                .bind(&import.title)
                .bind(&import.body)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    if super::is_unique_violation(&e) {
                        eyre!("lesson title '{}' is already in use", import.title)
                    } else {
                        color_eyre::Report::from(e)
                    }
                })?;

        for tag_name in &import.tags {
            sqlx::query("INSERT OR IGNORE INTO tags (name) VALUES (?)")
                .bind(tag_name)
                .execute(&mut *tx)
                .await?;
            let tag_id: i32 = sqlx::query_scalar("SELECT id FROM tags WHERE name = ?")
                .bind(tag_name)
                .fetch_one(&mut *tx)
                .await?;
            sqlx::query("INSERT OR IGNORE INTO lesson_tags (lesson_id, tag_id) VALUES (?, ?)")
                .bind(lesson_id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        let mut question_total = 0;
        for quiz in &import.quizzes {
            let quiz_id: i32 = sqlx::query_scalar(
                "INSERT INTO quizzes (lesson_id, title) VALUES (?, ?) RETURNING id",
            )
            .bind(lesson_id)
            .bind(&quiz.title)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if super::is_unique_violation(&e) {
                    eyre!("quiz title '{}' appears twice in the import", quiz.title)
                } else {
                    color_eyre::Report::from(e)
                }
            })?;

            for question in &quiz.questions {
                sqlx::query(
                    "INSERT INTO questions (quiz_id, body, correct_answer) VALUES (?, ?, ?)",
                )
                .bind(quiz_id)
                .bind(&question.body)
                .bind(question.correct_answer)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    if super::is_unique_violation(&e) {
                        eyre!("duplicate question body in quiz '{}'", quiz.title)
                    } else {
                        color_eyre::Report::from(e)
                    }
                })?;
                question_total += 1;
            }
        }

        tx.commit().await?;

        tracing::info!(
            "lesson imported: id={lesson_id}, quizzes={}, questions={question_total}",
            import.quizzes.len()
        );
        Ok(lesson_id)
    }

    pub async fn lessons(&self) -> Result<Vec<LessonSummary>> {
        let lessons = sqlx::query_as::<_, LessonSummary>(
            r#"
            SELECT
              lessons.id AS id,
              lessons.title AS title,
              COUNT(quizzes.id) AS quiz_count
            FROM lessons
            LEFT JOIN quizzes ON quizzes.lesson_id = lessons.id
            GROUP BY lessons.id, lessons.title
            ORDER BY lessons.title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(lessons)
    }

    pub async fn get_lesson(&self, lesson_id: i32) -> Result<Option<Lesson>> {
        let lesson = sqlx::query_as::<_, Lesson>(
            "SELECT id, title, body, created_at, updated_at FROM lessons WHERE id = ?",
        )
        .bind(lesson_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(lesson)
    }
}
