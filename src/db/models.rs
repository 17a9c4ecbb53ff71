// Database model structs

#[derive(Clone, sqlx::FromRow)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub display_name: String,
    pub is_admin: bool,
}

#[derive(sqlx::FromRow)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

#[derive(sqlx::FromRow)]
pub struct Lesson {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One row of the lesson list: title plus how many quizzes hang off it.
#[derive(sqlx::FromRow)]
pub struct LessonSummary {
    pub id: i32,
    pub title: String,
    pub quiz_count: i64,
}

#[derive(sqlx::FromRow)]
pub struct Quiz {
    pub id: i32,
    pub lesson_id: i32,
    pub title: String,
}

/// A quiz with its lesson's title, for the admin content dashboard.
#[derive(sqlx::FromRow)]
pub struct QuizOverview {
    pub id: i32,
    pub title: String,
    pub lesson_title: String,
}

#[derive(sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub quiz_id: i32,
    pub body: String,
    pub correct_answer: bool,
}

#[derive(Debug, sqlx::FromRow)]
pub struct Answer {
    pub id: i32,
    pub user_id: i32,
    pub question_id: i32,
    pub choice: bool,
    pub is_correct: bool,
}

/// An answer joined with its question's body, for the per-quiz answer list.
#[derive(sqlx::FromRow)]
pub struct AnswerReport {
    pub question_id: i32,
    pub question_body: String,
    pub choice: bool,
    pub is_correct: bool,
}
