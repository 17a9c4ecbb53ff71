use axum::{
    extract::{Form, State},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    extractors::IsHtmx,
    names,
    rejections::{AppError, ResultExt},
    utils, views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/register", get(register_page).post(register_post))
        .route("/login", get(login_page).post(login_post))
        .route("/logout", post(logout_post))
}

async fn homepage(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(session_id) = jar
        .get(names::USER_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
    {
        if let Ok(Some(_user)) = state.db.get_user_by_session(&session_id).await {
            return Redirect::to(names::LESSON_LIST_URL);
        }
    }

    Redirect::to(names::LOGIN_URL)
}

async fn login_page(IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Log In",
        homepage_views::login_form(homepage_views::LoginState::NoError),
        None,
    )
}

async fn register_page(IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Register",
        homepage_views::register_form(homepage_views::RegisterState::NoError),
        None,
    )
}

#[derive(Deserialize)]
struct RegisterPost {
    email: String,
    display_name: String,
    password: String,
}

async fn register_post(
    State(state): State<AppState>,
    Form(body): Form<RegisterPost>,
) -> Result<axum::response::Response, AppError> {
    if body.email.trim().is_empty()
        || body.display_name.trim().is_empty()
        || body.password.is_empty()
    {
        return Ok(views::titled(
            "Register",
            homepage_views::register_form(homepage_views::RegisterState::EmptyFields),
        )
        .into_response());
    }

    if state
        .db
        .email_exists(&body.email)
        .await
        .reject("could not check email")?
    {
        return Ok(views::titled(
            "Register",
            homepage_views::register_form(homepage_views::RegisterState::EmailTaken),
        )
        .into_response());
    }

    let user_id = state
        .db
        .create_user(&body.email, &body.password, &body.display_name)
        .await
        .reject("could not create user")?;

    let session_token = state
        .db
        .create_user_session(user_id)
        .await
        .reject("could not create session")?;

    Ok(logged_in_response(&state, &session_token)?)
}

#[derive(Deserialize)]
struct LoginPost {
    email: String,
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    Form(body): Form<LoginPost>,
) -> Result<axum::response::Response, AppError> {
    let password_ok = state
        .db
        .verify_user_password(&body.email, &body.password)
        .await
        .reject("could not verify password")?;

    if !password_ok {
        tracing::warn!("failed login attempt for {}", body.email);
        return Ok(views::titled(
            "Log In",
            homepage_views::login_form(homepage_views::LoginState::IncorrectPassword),
        )
        .into_response());
    }

    let user = state
        .db
        .find_user_by_email(&body.email)
        .await
        .reject("could not load user")?
        .ok_or(AppError::Internal("user vanished after password check"))?;

    let session_token = state
        .db
        .create_user_session(user.id)
        .await
        .reject("could not create session")?;

    Ok(logged_in_response(&state, &session_token)?)
}

async fn logout_post(
    jar: CookieJar,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(session_id) = jar
        .get(names::USER_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
    {
        state
            .db
            .delete_user_session(&session_id)
            .await
            .reject("could not delete session")?;
    }

    let cookie = utils::expired_cookie(names::USER_SESSION_COOKIE_NAME)
        .reject("could not build logout cookie")?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (SET_COOKIE, cookie),
            (LOCATION, HeaderValue::from_static(names::LOGIN_URL)),
        ],
        "",
    ))
}

fn logged_in_response(
    state: &AppState,
    session_token: &str,
) -> Result<axum::response::Response, AppError> {
    let cookie = utils::cookie(
        names::USER_SESSION_COOKIE_NAME,
        session_token,
        state.secure_cookies,
    )
    .reject("could not build session cookie")?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (SET_COOKIE, cookie),
            (LOCATION, HeaderValue::from_static(names::LESSON_LIST_URL)),
        ],
        "",
    )
        .into_response())
}
