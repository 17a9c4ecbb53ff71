use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use maud::Markup;

use crate::{
    extractors::{AuthGuard, IsHtmx},
    rejections::{AppError, ResultExt},
    views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/{quiz_id}", get(quiz_detail))
        .route("/quiz/{quiz_id}/answers", get(answer_list))
}

async fn quiz_detail(
    AuthGuard(user): AuthGuard,
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Path(quiz_id): Path<i32>,
) -> Result<Markup, AppError> {
    let quiz = state
        .db
        .get_quiz(quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("quiz not found"))?;

    let questions = state
        .db
        .questions_for_quiz(quiz_id)
        .await
        .reject("could not get questions")?;

    let unanswered = state
        .db
        .unanswered_questions(user.id, quiz_id)
        .await
        .reject("could not get unanswered questions")?;

    let done = unanswered.is_empty();

    let title = quiz.title.clone();
    Ok(views::render(
        is_htmx,
        &title,
        quiz_views::quiz_detail(quiz_views::QuizDetailData {
            quiz,
            questions,
            done,
        }),
        Some(&user.display_name),
    ))
}

async fn answer_list(
    AuthGuard(user): AuthGuard,
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Path(quiz_id): Path<i32>,
) -> Result<Markup, AppError> {
    let quiz = state
        .db
        .get_quiz(quiz_id)
        .await
        .reject("could not get quiz")?
        .ok_or(AppError::NotFound("quiz not found"))?;

    let answers = state
        .db
        .answers_for_quiz(user.id, quiz_id)
        .await
        .reject("could not get answers")?;

    let score = state
        .db
        .quiz_score(user.id, quiz_id)
        .await
        .reject("could not compute score")?;

    let title = format!("{}: your answers", quiz.title);
    Ok(views::render(
        is_htmx,
        &title,
        quiz_views::answer_list(&quiz, answers, score),
        Some(&user.display_name),
    ))
}
