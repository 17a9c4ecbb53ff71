use serde::Deserialize;

/// A whole lesson uploaded as one JSON document through the admin surface.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonImport {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub quizzes: Vec<QuizImport>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizImport {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuestionImport>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionImport {
    pub body: String,
    #[serde(default)]
    pub correct_answer: bool,
}
