use std::fmt;

use color_eyre::Result;

use super::models::Question;
use super::Db;
use crate::names;

/// A user's score on one quiz: correct answers over total questions.
/// A quiz with no questions has nothing to score against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    NotApplicable,
    Fraction { correct: i64, total: i64 },
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::NotApplicable => f.write_str(names::SCORE_NOT_APPLICABLE),
            Score::Fraction { correct, total } => {
                write!(f, "{:.2}%", *correct as f64 * 100.0 / *total as f64)
            }
        }
    }
}

impl Db {
    /// The quiz's questions the user has not answered yet. The user's answers
    /// are collected across all quizzes; the join on the quiz's questions
    /// narrows them to this quiz.
    pub async fn unanswered_questions(
        &self,
        user_id: i32,
        quiz_id: i32,
    ) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, quiz_id, body, correct_answer
            FROM questions
            WHERE quiz_id = ?
              AND id NOT IN (SELECT question_id FROM answers WHERE user_id = ?)
            ORDER BY id
            "#,
        )
        .bind(quiz_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn quiz_score(&self, user_id: i32, quiz_id: i32) -> Result<Score> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE quiz_id = ?")
            .bind(quiz_id)
            .fetch_one(&self.pool)
            .await?;

        if total == 0 {
            return Ok(Score::NotApplicable);
        }

        let correct: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE a.user_id = ? AND q.quiz_id = ? AND a.is_correct = 1
            "#,
        )
        .bind(user_id)
        .bind(quiz_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Score::Fraction { correct, total })
    }
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn formats_as_percentage_with_two_decimals() {
        let score = Score::Fraction {
            correct: 1,
            total: 2,
        };
        assert_eq!(score.to_string(), "50.00%");
    }

    #[test]
    fn formats_thirds_without_rounding_surprises() {
        let score = Score::Fraction {
            correct: 1,
            total: 3,
        };
        assert_eq!(score.to_string(), "33.33%");
    }

    #[test]
    fn zero_of_zero_is_not_applicable() {
        assert_eq!(Score::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn full_marks() {
        let score = Score::Fraction {
            correct: 4,
            total: 4,
        };
        assert_eq!(score.to_string(), "100.00%");
    }
}
