use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{html, Markup};

use crate::{names, views};

#[derive(Debug)]
pub enum AppError {
    /// No valid session; content routes redirect to the login page.
    Unauthorized,
    Forbidden,
    NotFound(&'static str),
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => Redirect::to(names::LOGIN_URL).into_response(),
            AppError::Forbidden => {
                (StatusCode::FORBIDDEN, error_page("Forbidden")).into_response()
            }
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, error_page(what)).into_response(),
            AppError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_page(message)).into_response()
            }
        }
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            a href=(names::LESSON_LIST_URL) { "Back to lessons" }
        },
        None,
    )
}

/// Log the underlying error and surface a terse internal failure to the caller.
pub trait ResultExt<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for color_eyre::Result<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}
