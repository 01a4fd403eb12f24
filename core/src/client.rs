//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, TodoItem, UpdateTodo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item(&self, id: &str) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_todo(&self, id: &str, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: self.item(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// json-server answers with `{}` and 200, the mock server with 204 and no
    /// body. Either way the body carries nothing we need.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
