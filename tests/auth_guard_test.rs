mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use studyhall::{names, router, AppState};
use tower::ServiceExt;

fn app(db: studyhall::db::Db) -> axum::Router {
    router(AppState {
        db,
        secure_cookies: false,
    })
}

#[tokio::test]
async fn content_routes_redirect_to_login_without_a_session() {
    let app = app(common::create_test_db().await);

    let cases = [
        "/lessons",
        "/lesson/1",
        "/quiz/1",
        "/quiz/1/answers",
        "/question/1",
        "/admin",
    ];

    for uri in cases {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");

        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");

        assert_eq!(
            resp.status(),
            StatusCode::SEE_OTHER,
            "expected a redirect for {uri}",
        );
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            names::LOGIN_URL,
            "expected redirect to the login page for {uri}",
        );
    }
}

#[tokio::test]
async fn content_routes_accept_requests_with_a_valid_session() {
    let db = common::create_test_db().await;
    let user_id = common::create_test_user(&db, "test@example.com").await;
    let session = db
        .create_user_session(user_id)
        .await
        .expect("create session");

    let app = app(db);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/lessons")
        .header(
            header::COOKIE,
            format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_routes_reject_non_admin_users() {
    let db = common::create_test_db().await;
    let user_id = common::create_test_user(&db, "test@example.com").await;
    let session = db
        .create_user_session(user_id)
        .await
        .expect("create session");

    let app = app(db);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .header(
            header::COOKIE,
            format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_routes_accept_admin_users() {
    let db = common::create_test_db().await;
    db.ensure_admin("admin@example.com", "secret")
        .await
        .expect("create admin");
    let admin = db
        .find_user_by_email("admin@example.com")
        .await
        .expect("find admin")
        .expect("admin exists");
    let session = db
        .create_user_session(admin.id)
        .await
        .expect("create session");

    let app = app(db);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .header(
            header::COOKIE,
            format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn state_changing_requests_require_the_htmx_header() {
    let app = app(common::create_test_db().await);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("email=a%40b.c&password=pw"))
        .expect("request build should succeed");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from("email=a%40b.c&password=pw"))
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");
    assert_ne!(resp.status(), StatusCode::FORBIDDEN);
}
