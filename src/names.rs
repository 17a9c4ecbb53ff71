pub const LOGIN_URL: &str = "/login";
pub const REGISTER_URL: &str = "/register";
pub const LOGOUT_URL: &str = "/logout";
pub const LESSON_LIST_URL: &str = "/lessons";
pub const ADMIN_URL: &str = "/admin";

pub const USER_SESSION_COOKIE_NAME: &str = "user_session";

pub fn lesson_url(lesson_id: i32) -> String {
    format!("/lesson/{lesson_id}")
}

pub fn quiz_url(quiz_id: i32) -> String {
    format!("/quiz/{quiz_id}")
}

pub fn quiz_answers_url(quiz_id: i32) -> String {
    format!("/quiz/{quiz_id}/answers")
}

pub fn question_url(question_id: i32) -> String {
    format!("/question/{question_id}")
}

pub fn answer_create_url(question_id: i32) -> String {
    format!("/question/{question_id}/answer")
}

pub const ADMIN_LESSON_URL: &str = "/admin/lesson";
pub const ADMIN_QUIZ_URL: &str = "/admin/quiz";
pub const ADMIN_QUESTION_URL: &str = "/admin/question";
pub const ADMIN_TAG_URL: &str = "/admin/tag";
pub const ADMIN_IMPORT_URL: &str = "/admin/import";

/// Rendered when a quiz has no questions to score against.
pub const SCORE_NOT_APPLICABLE: &str = "N/A";
