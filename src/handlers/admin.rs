use axum::{
    extract::{Form, State},
    routing::{get, post},
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::{AuthGuard, IsHtmx},
    models::LessonImport,
    rejections::{AppError, ResultExt},
    views,
    views::admin as admin_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard))
        .route("/admin/lesson", post(create_lesson))
        .route("/admin/quiz", post(create_quiz))
        .route("/admin/question", post(create_question))
        .route("/admin/tag", post(create_tag))
        .route("/admin/import", post(import_lesson))
}

async fn dashboard(
    AuthGuard(user): AuthGuard,
    IsHtmx(is_htmx): IsHtmx,
    State(state): State<AppState>,
) -> Result<Markup, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }

    Ok(views::render(
        is_htmx,
        "Content Management",
        dashboard_body(&state, None).await?,
        Some(&user.display_name),
    ))
}

/// Re-renders the dashboard, optionally with a notice from a failed create.
async fn dashboard_body(state: &AppState, notice: Option<String>) -> Result<Markup, AppError> {
    let lessons = state.db.lessons().await.reject("could not get lessons")?;
    let quizzes = state.db.quizzes().await.reject("could not get quizzes")?;
    let tags = state.db.tags().await.reject("could not get tags")?;

    Ok(admin_views::dashboard(admin_views::AdminDashboardData {
        lessons,
        quizzes,
        tags,
        notice,
    }))
}

/// Runs a content write and folds a duplicate-key failure into an inline
/// notice instead of an error page.
async fn with_conflict_notice(
    state: &AppState,
    result: color_eyre::Result<i32>,
) -> Result<Markup, AppError> {
    let notice = match result {
        Ok(_) => None,
        Err(e) if e.to_string().contains("already") => {
            tracing::warn!("content create rejected: {e}");
            Some(e.to_string())
        }
        Err(e) => {
            tracing::error!("content create failed: {e}");
            return Err(AppError::Internal("could not create content"));
        }
    };

    Ok(views::titled(
        "Content Management",
        dashboard_body(state, notice).await?,
    ))
}

#[derive(Deserialize)]
struct CreateLessonPost {
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    tags: String,
}

async fn create_lesson(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(form): Form<CreateLessonPost>,
) -> Result<Markup, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }

    let result = state.db.create_lesson(&form.title, &form.body).await;

    if let Ok(lesson_id) = &result {
        for name in form.tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let tag_id = state
                .db
                .ensure_tag(name)
                .await
                .reject("could not create tag")?;
            state
                .db
                .attach_tag(*lesson_id, tag_id)
                .await
                .reject("could not attach tag")?;
        }
    }

    with_conflict_notice(&state, result).await
}

#[derive(Deserialize)]
struct CreateQuizPost {
    lesson_id: i32,
    title: String,
}

async fn create_quiz(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(form): Form<CreateQuizPost>,
) -> Result<Markup, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }

    let result = state.db.create_quiz(form.lesson_id, &form.title).await;
    with_conflict_notice(&state, result).await
}

#[derive(Deserialize)]
struct CreateQuestionPost {
    quiz_id: i32,
    #[serde(default)]
    body: String,
    #[serde(default)]
    correct_answer: Option<String>,
}

async fn create_question(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(form): Form<CreateQuestionPost>,
) -> Result<Markup, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }

    // A checkbox is only present in the form body when checked
    let correct_answer = form.correct_answer.as_deref() == Some("true");
    let result = state
        .db
        .create_question(form.quiz_id, &form.body, correct_answer)
        .await;
    with_conflict_notice(&state, result).await
}

#[derive(Deserialize)]
struct CreateTagPost {
    #[serde(default)]
    name: String,
}

async fn create_tag(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(form): Form<CreateTagPost>,
) -> Result<Markup, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }

    let result = state.db.create_tag(&form.name).await;
    with_conflict_notice(&state, result).await
}

#[derive(Deserialize)]
struct ImportPost {
    document: String,
}

async fn import_lesson(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(form): Form<ImportPost>,
) -> Result<Markup, AppError> {
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }

    let import: LessonImport = match serde_json::from_str(&form.document) {
        Ok(import) => import,
        Err(e) => {
            tracing::warn!("rejected malformed lesson import: {e}");
            return Ok(views::titled(
                "Content Management",
                dashboard_body(&state, Some(format!("invalid lesson document: {e}"))).await?,
            ));
        }
    };

    let result = state.db.import_lesson(import).await;
    with_conflict_notice(&state, result).await
}
