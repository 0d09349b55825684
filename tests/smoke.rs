// ABOUTME: End-to-end smoke test for the demo lifecycle over the router.
// ABOUTME: Exercises the index page, counter, todo list, and system-info fragments.

use std::sync::Arc;

use axum::body::Body;
use fasthtml_demo_server::{AppState, SharedState, create_router};
use http::Request;
use tower::ServiceExt;

/// Helper to create a test AppState on a fixed fake endpoint.
fn test_state() -> SharedState {
    Arc::new(AppState::new("127.0.0.1", 8080, false))
}

/// Helper to extract the HTML body from a response.
async fn html_body(resp: axum::response::Response) -> String {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Helper to build a form-encoded POST request.
fn form_post(path: &str, body: &str) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn smoke_test_full_lifecycle() {
    let state = test_state();

    // 1. Index renders the full page with zero state.
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "index should return 200");
    let html = html_body(resp).await;
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Count: 0"));
    assert!(html.contains("Counter Demo"));
    assert!(html.contains("System Information"));
    assert!(html.contains("Launch Options"));

    // 2. Two increments accumulate across requests.
    let app = create_router(Arc::clone(&state));
    let resp = app.oneshot(form_post("/increment", "")).await.unwrap();
    assert_eq!(resp.status(), 200, "increment should return 200");
    assert!(html_body(resp).await.contains("Count: 1"));

    let app = create_router(Arc::clone(&state));
    let resp = app.oneshot(form_post("/increment", "")).await.unwrap();
    assert!(html_body(resp).await.contains("Count: 2"));

    // 3. Adding todos returns the full re-rendered list, in order.
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(form_post("/add-todo", "task=buy%20milk"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "add-todo should return 200");
    let html = html_body(resp).await;
    assert!(html.contains(r#"<ul id="todo-list">"#));
    assert!(html.contains("<li>buy milk</li>"));

    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(form_post("/add-todo", "task=walk%20dog"))
        .await
        .unwrap();
    let html = html_body(resp).await;
    let milk = html.find("buy milk").unwrap();
    let dog = html.find("walk dog").unwrap();
    assert!(milk < dog, "todos should render in insertion order");

    // 4. User text is escaped, not interpreted.
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(form_post(
            "/add-todo",
            "task=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
        ))
        .await
        .unwrap();
    let html = html_body(resp).await;
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));

    // 5. An empty task value is accepted verbatim.
    let app = create_router(Arc::clone(&state));
    let resp = app.oneshot(form_post("/add-todo", "task=")).await.unwrap();
    assert_eq!(resp.status(), 200, "empty task should be accepted");
    assert!(html_body(resp).await.contains("<li></li>"));

    // 6. A missing task field never reaches the handler.
    let app = create_router(Arc::clone(&state));
    let resp = app.oneshot(form_post("/add-todo", "")).await.unwrap();
    assert!(
        resp.status().is_client_error(),
        "missing field should be a client error, got {}",
        resp.status()
    );

    // 7. The system-info fragment reports this process, freshly captured.
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/system-info").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "system-info should return 200");
    let html = html_body(resp).await;
    assert!(html.contains(r#"<div id="system-info">"#));
    assert!(html.contains(&format!("Process ID: {}", std::process::id())));
    assert!(html.contains("AppImage: No"));

    // 8. Index now reflects the accumulated state.
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let html = html_body(resp).await;
    assert!(html.contains("Count: 2"));
    assert!(html.contains("buy milk"));
    assert!(html.contains("walk dog"));
}
