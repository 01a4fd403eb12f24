use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(empty_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"text":"Buy milk","isCompleted":false}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.text, "Buy milk");
    assert!(!todo.is_completed);
    assert!(!todo.id.is_empty());
}

#[tokio::test]
async fn create_todo_with_completed_true() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"text":"Already done","isCompleted":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert!(todo.is_completed);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"not_text":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_todo_blank_text_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"text":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_todo_not_found() {
    let resp = app()
        .oneshot(json_request("PATCH", "/todos/999", r#"{"text":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_is_not_routed() {
    let resp = app()
        .oneshot(json_request("PUT", "/todos/999", r#"{"text":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/todos/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two so ordering is observable
    let mut ids = Vec::new();
    for text in ["Walk dog", "Feed cat"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/todos", &format!(r#"{{"text":"{text}"}}"#)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Todo = body_json(resp).await;
        assert_eq!(created.text, text);
        ids.push(created.id);
    }
    let id = ids[0].clone();

    // list — insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    let listed: Vec<_> = todos.into_iter().map(|t| t.id).collect();
    assert_eq!(listed, ids);

    // update — partial: only isCompleted
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", &format!("/todos/{id}"), r#"{"isCompleted":true}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.text, "Walk dog"); // unchanged
    assert!(updated.is_completed);

    // update — partial: only text
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", &format!("/todos/{id}"), r#"{"text":"Walk cat"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.text, "Walk cat");
    assert!(updated.is_completed); // unchanged from previous update

    // update — blank text rejected
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", &format!("/todos/{id}"), r#"{"text":" "}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — only the second remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, ids[1]);
    assert_eq!(todos[0].text, "Feed cat");
}
