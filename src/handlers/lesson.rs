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
    views::lesson as lesson_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lessons", get(lesson_list))
        .route("/lesson/{lesson_id}", get(lesson_detail))
}

async fn lesson_list(
    AuthGuard(user): AuthGuard,
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
) -> Result<Markup, AppError> {
    let lessons = state.db.lessons().await.reject("could not get lessons")?;

    Ok(views::render(
        is_htmx,
        "Lessons",
        lesson_views::lesson_list(lessons),
        Some(&user.display_name),
    ))
}

async fn lesson_detail(
    AuthGuard(user): AuthGuard,
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
) -> Result<Markup, AppError> {
    let lesson = state
        .db
        .get_lesson(lesson_id)
        .await
        .reject("could not get lesson")?
        .ok_or(AppError::NotFound("lesson not found"))?;

    let tags = state
        .db
        .tags_for_lesson(lesson_id)
        .await
        .reject("could not get lesson tags")?;

    let quizzes = state
        .db
        .quizzes_for_lesson(lesson_id)
        .await
        .reject("could not get quizzes")?;

    let title = lesson.title.clone();
    Ok(views::render(
        is_htmx,
        &title,
        lesson_views::lesson_detail(lesson, tags, quizzes),
        Some(&user.display_name),
    ))
}
