mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use studyhall::{names, router, AppState};
use tower::ServiceExt;

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

fn answer_request(question_id: i32, session: &str, choice: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(names::answer_create_url(question_id))
        .header("content-type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .header(
            header::COOKIE,
            format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
        )
        .body(Body::from(format!("choice={choice}")))
        .expect("request build should succeed")
}

#[tokio::test]
async fn submitting_answers_walks_through_the_quiz() {
    let db = common::create_test_db().await;

    let lesson_id = db
        .create_lesson("Music", "You must practice.")
        .await
        .unwrap();
    let quiz_id = db.create_quiz(lesson_id, "Basics").await.unwrap();
    let first = db
        .create_question(quiz_id, "Practice makes perfect?", true)
        .await
        .unwrap();
    let second = db
        .create_question(quiz_id, "Talent is everything?", false)
        .await
        .unwrap();

    let user_id = common::create_test_user(&db, "test@example.com").await;
    let session = db.create_user_session(user_id).await.unwrap();

    let app = router(AppState {
        db: db.clone(),
        secure_cookies: false,
    });

    // Answering the first question serves the next unanswered one
    let resp = app
        .clone()
        .oneshot(answer_request(first, &session, "true"))
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Talent is everything?"));

    // Answering the last question falls back to the lesson list
    let resp = app
        .clone()
        .oneshot(answer_request(second, &session, "true"))
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Lessons"));

    // Worked example: A correct, B incorrect
    assert_eq!(
        db.quiz_score(user_id, quiz_id).await.unwrap().to_string(),
        "50.00%"
    );

    // A duplicate submission re-renders the recorded answer
    let resp = app
        .oneshot(answer_request(first, &session, "false"))
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("You answered"));

    // The original choice survives the duplicate attempt
    let answer = db.get_user_answer(user_id, first).await.unwrap().unwrap();
    assert!(answer.choice);
}

#[tokio::test]
async fn quiz_page_reports_completion() {
    let db = common::create_test_db().await;

    let lesson_id = db.create_lesson("Music", "body").await.unwrap();
    let quiz_id = db.create_quiz(lesson_id, "Basics").await.unwrap();
    let question_id = db.create_question(quiz_id, "Q1", true).await.unwrap();

    let user_id = common::create_test_user(&db, "test@example.com").await;
    let session = db.create_user_session(user_id).await.unwrap();
    db.record_answer(user_id, question_id, true).await.unwrap();

    let app = router(AppState {
        db,
        secure_cookies: false,
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri(names::quiz_url(quiz_id))
        .header(
            header::COOKIE,
            format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("answered every question"));
}

#[tokio::test]
async fn empty_quiz_reports_completion() {
    let db = common::create_test_db().await;

    let lesson_id = db.create_lesson("Music", "body").await.unwrap();
    let quiz_id = db.create_quiz(lesson_id, "Basics").await.unwrap();

    let user_id = common::create_test_user(&db, "test@example.com").await;
    let session = db.create_user_session(user_id).await.unwrap();

    let app = router(AppState {
        db,
        secure_cookies: false,
    });

    let req = Request::builder()
        .method(Method::GET)
        .uri(names::quiz_url(quiz_id))
        .header(
            header::COOKIE,
            format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("answered every question"));
}
