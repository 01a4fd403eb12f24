//! Error types for the todo API client and store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. Failures below HTTP (connection
//! refused, broken pipe) are reported by the transport as `Transport`.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors surfaced to callers of `TodoStore`.
///
/// Network and server failures are logged and swallowed at the store
/// boundary; only lookups against local state fail loudly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("didn't find todo {0} to update")]
    TodoNotFound(String),
}
