use axum::{
    extract::{Form, Path, State},
    routing::{get, post},
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::{AuthGuard, IsHtmx},
    rejections::{AppError, ResultExt},
    views,
    views::lesson as lesson_views,
    views::question as question_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/question/{question_id}", get(question_detail))
        .route("/question/{question_id}/answer", post(submit_answer))
}

async fn question_detail(
    AuthGuard(user): AuthGuard,
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
) -> Result<Markup, AppError> {
    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound("question not found"))?;

    let user_answer = state
        .db
        .get_user_answer(user.id, question_id)
        .await
        .reject("could not get user answer")?;

    Ok(views::render(
        is_htmx,
        "Question",
        question_views::question_detail(&question, user_answer.as_ref()),
        Some(&user.display_name),
    ))
}

#[derive(Deserialize)]
struct SubmitAnswerPost {
    choice: String,
}

/// Records the answer, then moves the user along: the next unanswered question
/// in the same quiz if one exists, the lesson list otherwise.
async fn submit_answer(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
    Form(body): Form<SubmitAnswerPost>,
) -> Result<Markup, AppError> {
    let question = state
        .db
        .get_question(question_id)
        .await
        .reject("could not get question")?
        .ok_or(AppError::NotFound("question not found"))?;

    let choice = body.choice == "true";

    match state.db.record_answer(user.id, question_id, choice).await {
        Ok(_) => {}
        Err(e) if e.to_string().contains("already answered") => {
            tracing::warn!(
                "duplicate answer for user={} question={question_id}",
                user.id
            );
            // Show the question page with the recorded answer instead
            let existing = state
                .db
                .get_user_answer(user.id, question_id)
                .await
                .reject("could not get existing answer")?;
            return Ok(views::titled(
                "Question",
                question_views::question_detail(&question, existing.as_ref()),
            ));
        }
        Err(e) => {
            tracing::error!("could not record answer for question={question_id}: {e}");
            return Err(AppError::Internal("could not record answer"));
        }
    }

    let unanswered = state
        .db
        .unanswered_questions(user.id, question.quiz_id)
        .await
        .reject("could not get unanswered questions")?;

    match unanswered.first() {
        Some(next) => Ok(views::titled(
            "Question",
            question_views::question_detail(next, None),
        )),
        None => {
            let lessons = state.db.lessons().await.reject("could not get lessons")?;
            Ok(views::titled("Lessons", lesson_views::lesson_list(lessons)))
        }
    }
}
