use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub is_completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub is_completed: Option<bool>,
}

/// Insertion-ordered so `GET /todos` lists items in creation order.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "todo mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    debug!(count = todos.len(), "list todos");
    Json(todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    if input.text.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        text: input.text,
        is_completed: input.is_completed,
    };
    debug!(id = %todo.id, "create todo");
    db.write().await.push(todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    if input.text.as_deref().is_some_and(|text| text.trim().is_empty()) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(text) = input.text {
        todo.text = text;
    }
    if let Some(is_completed) = input.is_completed {
        todo.is_completed = is_completed;
    }
    debug!(%id, "update todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut todos = db.write().await;
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    if todos.len() == before {
        return StatusCode::NOT_FOUND;
    }
    debug!(%id, "delete todo");
    StatusCode::NO_CONTENT
}
