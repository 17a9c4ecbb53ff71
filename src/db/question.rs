use color_eyre::{eyre::eyre, Result};

use super::models::Question;
use super::Db;

impl Db {
    pub async fn create_question(
        &self,
        quiz_id: i32,
        body: &str,
        correct_answer: bool,
    ) -> Result<i32> {
        let question_id: i32 = sqlx::query_scalar(
            "INSERT INTO questions (quiz_id, body, correct_answer) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(quiz_id)
        .bind(body)
        .bind(correct_answer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if super::is_unique_violation(&e) {
                eyre!("this question already exists in the quiz")
            } else {
                e.into()
            }
        })?;

        tracing::info!("new question created: id={question_id} for quiz_id={quiz_id}");
        Ok(question_id)
    }

    pub async fn get_question(&self, question_id: i32) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, quiz_id, body, correct_answer FROM questions WHERE id = ?",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn questions_for_quiz(&self, quiz_id: i32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, quiz_id, body, correct_answer FROM questions WHERE quiz_id = ? ORDER BY id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }
}
