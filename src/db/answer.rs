use color_eyre::{eyre::eyre, eyre::OptionExt, Result};

use super::models::{Answer, AnswerReport};
use super::Db;

impl Db {
    /// Record a user's choice for a question. Correctness is derived from the
    /// question's stored correct answer at write time; it is not re-validated
    /// against later edits to the question. A second answer for the same
    /// (user, question) pair is a uniqueness violation.
    pub async fn record_answer(
        &self,
        user_id: i32,
        question_id: i32,
        choice: bool,
    ) -> Result<Answer> {
        let correct_answer: bool =
            sqlx::query_scalar("SELECT correct_answer FROM questions WHERE id = ?")
                .bind(question_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_eyre("question not found")?;

        let is_correct = choice == correct_answer;

        let answer = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (user_id, question_id, choice, is_correct)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, question_id, choice, is_correct
            "#,
        )
        .bind(user_id)
        .bind(question_id)
        .bind(choice)
        .bind(is_correct)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if super::is_unique_violation(&e) {
                eyre!("question already answered")
            } else {
                e.into()
            }
        })?;

        tracing::info!(
            "answer recorded for user={user_id} question={question_id}: is_correct={is_correct}"
        );

        Ok(answer)
    }

    /// Change a previously-recorded answer. Correctness is re-derived against
    /// the question's current correct answer, so an edit behaves like a fresh
    /// save.
    pub async fn update_answer(
        &self,
        user_id: i32,
        question_id: i32,
        choice: bool,
    ) -> Result<()> {
        let correct_answer: bool =
            sqlx::query_scalar("SELECT correct_answer FROM questions WHERE id = ?")
                .bind(question_id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_eyre("question not found")?;

        let is_correct = choice == correct_answer;

        sqlx::query(
            r#"
            UPDATE answers
            SET choice = ?, is_correct = ?, updated_at = CURRENT_TIMESTAMP
            WHERE user_id = ? AND question_id = ?
            "#,
        )
        .bind(choice)
        .bind(is_correct)
        .bind(user_id)
        .bind(question_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_user_answer(
        &self,
        user_id: i32,
        question_id: i32,
    ) -> Result<Option<Answer>> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, user_id, question_id, choice, is_correct
            FROM answers
            WHERE user_id = ? AND question_id = ?
            "#,
        )
        .bind(user_id)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(answer)
    }

    /// The user's own answers for one quiz, joined with the question bodies.
    pub async fn answers_for_quiz(&self, user_id: i32, quiz_id: i32) -> Result<Vec<AnswerReport>> {
        let answers = sqlx::query_as::<_, AnswerReport>(
            r#"
            SELECT q.id AS question_id, q.body AS question_body,
                   a.choice AS choice, a.is_correct AS is_correct
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE a.user_id = ? AND q.quiz_id = ?
            ORDER BY q.id
            "#,
        )
        .bind(user_id)
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }
}
